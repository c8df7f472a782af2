//! Console rendering of game snapshots using 256-color ANSI escapes.

use crate::game::tile_game::{Checkpoint, TileGameView, TileObserver};
use crate::race::animal::{Animal, DieFace};
use crate::race::player::RacePlayerView;
use crate::race::race_game::RaceObserver;
use std::io::{self, Write};

const RESET: &str = "\u{1b}[0m";

/// Checkpoints at which the grid is drawn.
const DRAWN: [Checkpoint; 3] = [Checkpoint::InitAfter, Checkpoint::Spawned, Checkpoint::GameOver];

/// `(foreground, background)` 256-color codes for a tile value.
pub fn tile_colors(value: u32) -> Option<(u8, u8)> {
    let colors = match value {
        0 => return None,
        2 => (8, 253),
        4 => (8, 187),
        8 => (15, 215),
        16 => (15, 172),
        32 => (15, 9),
        64 => (15, 160),
        128 => (15, 229),
        256 => (15, 228),
        512 => (15, 227),
        1024 => (15, 226),
        2048 => (15, 220),
        4096 => (15, 0),
        8192 => (15, 234),
        16384 => (15, 236),
        _ => (15, 238),
    };
    Some(colors)
}

fn digits(value: u32) -> usize {
    value.to_string().len()
}

/// Renders one grid row, centring every value on the widest cell.
pub fn format_row(row: &[u32], width: usize, color: bool) -> String {
    row.iter()
        .map(|&value| {
            let diff = width.saturating_sub(digits(value));
            let left = diff.div_ceil(2);
            let right = diff / 2;
            let text = format!("{}{}{}", " ".repeat(left), value, " ".repeat(right));
            match tile_colors(value) {
                Some((fg, bg)) if color => {
                    format!("\u{1b}[38;5;{fg}m\u{1b}[48;5;{bg}m{text}{RESET}")
                }
                _ => text,
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Prints tile-game snapshots and race turns.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), true)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    /// Draws after initialisation, after each spawn and at game over.
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn draw_tiles(&mut self, view: &TileGameView<'_>) -> io::Result<()> {
        let width = view.grid.cells().iter().map(|&v| digits(v)).max().unwrap_or(1);
        for row in view.grid.rows() {
            writeln!(self.out, "{}", format_row(row, width, self.color))?;
        }
        writeln!(self.out, "Points: {}", view.score)
    }

    fn draw_checkpoint(
        &mut self,
        checkpoint: Checkpoint,
        view: &TileGameView<'_>,
    ) -> io::Result<()> {
        if DRAWN.contains(&checkpoint) {
            self.draw_tiles(view)?;
        }
        if checkpoint == Checkpoint::GameOver {
            writeln!(self.out, "Game over! You reached {} points.", view.score)?;
        }
        Ok(())
    }

    pub fn draw_race(
        &mut self,
        player: usize,
        roll: DieFace,
        view: &RacePlayerView<'_>,
    ) -> io::Result<()> {
        let list = |area: &[Animal]| {
            area.iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(
            self.out,
            "Player {} {} rolled {}: reserve [{}] | staging [{}] | track [{}]",
            player + 1,
            view.strategy,
            roll,
            list(view.pools.reserve()),
            list(view.pools.staging()),
            list(view.pools.track())
        )
    }
}

impl<W: Write> TileObserver for ConsoleRenderer<W> {
    fn observe(&mut self, checkpoint: Checkpoint, view: &TileGameView<'_>) {
        if let Err(e) = self.draw_checkpoint(checkpoint, view) {
            log::warn!("Failed to render grid: {}", e);
        }
    }
}

impl<W: Write> RaceObserver for ConsoleRenderer<W> {
    fn observe(&mut self, player: usize, roll: DieFace, view: &RacePlayerView<'_>) {
        if let Err(e) = self.draw_race(player, roll, view) {
            log::warn!("Failed to render player: {}", e);
        }
    }
}

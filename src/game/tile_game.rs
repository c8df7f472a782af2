//! One run of the tile-merging game.
//!
//! A turn compacts the grid toward the chosen edge, merges equal
//! neighbours, compacts again and, if anything happened, spawns a new tile.
//! The game ends after an effective turn that leaves no empty cell and no
//! equal neighbours.

use crate::game::direction::Direction;
use crate::game::grid::{Grid, SlideOutcome};
use crate::game::tile_strategy::{DirectionSelector, DirectionSource, TileStrategy};
use crate::Result;
use rand::Rng;
use serde::Serialize;

/// Points in a run at which observers are handed a view of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Checkpoint {
    InitBefore,
    InitAfter,
    MovedFirst,
    Merged,
    MovedSecond,
    Spawned,
    GameOver,
}

/// Read-only snapshot handed to renderers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TileGameView<'a> {
    pub grid: &'a Grid,
    pub score: u64,
    pub turns: u64,
}

/// Sink for [`TileGameView`]s. Observers never influence the game.
pub trait TileObserver {
    fn observe(&mut self, checkpoint: Checkpoint, view: &TileGameView<'_>);
}

impl TileObserver for () {
    fn observe(&mut self, _checkpoint: Checkpoint, _view: &TileGameView<'_>) {}
}

/// Result of a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub direction: Direction,
    pub slide: SlideOutcome,
    pub spawned: Option<(usize, u32)>,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGame {
    grid: Grid,
    score: u64,
    turns: u64,
    over: bool,
}

impl TileGame {
    /// Empty game on a `size`×`size` grid.
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self::from_grid(Grid::empty(size)?))
    }

    /// Game continuing from an existing grid with a score of zero.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            score: 0,
            turns: 0,
            over: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn view(&self) -> TileGameView<'_> {
        TileGameView {
            grid: &self.grid,
            score: self.score,
            turns: self.turns,
        }
    }

    fn notify<O: TileObserver + ?Sized>(&self, observer: &mut O, checkpoint: Checkpoint) {
        observer.observe(checkpoint, &self.view());
    }

    /// Places the two starting tiles.
    pub fn init<R, O>(&mut self, rng: &mut R, observer: &mut O)
    where
        R: Rng + ?Sized,
        O: TileObserver + ?Sized,
    {
        self.notify(observer, Checkpoint::InitBefore);
        self.grid.spawn_random_tile(rng);
        self.grid.spawn_random_tile(rng);
        self.notify(observer, Checkpoint::InitAfter);
    }

    /// Plays one turn in `direction`.
    pub fn play_turn<R, O>(
        &mut self,
        direction: Direction,
        rng: &mut R,
        observer: &mut O,
    ) -> TurnReport
    where
        R: Rng + ?Sized,
        O: TileObserver + ?Sized,
    {
        let moved = self.grid.compact(direction);
        self.notify(observer, Checkpoint::MovedFirst);

        let (merges, points) = self.grid.merge(direction);
        self.score += points;
        self.notify(observer, Checkpoint::Merged);

        self.grid.compact(direction);
        self.notify(observer, Checkpoint::MovedSecond);

        let slide = SlideOutcome {
            moved,
            merges,
            points,
        };
        self.turns += 1;

        let mut spawned = None;
        if slide.action_performed() {
            spawned = self.grid.spawn_random_tile(rng);
            self.notify(observer, Checkpoint::Spawned);

            if self.grid.is_game_over() {
                self.over = true;
                self.notify(observer, Checkpoint::GameOver);
            }
        }

        log::trace!(
            "turn {} {}: moved={} merges={} +{} score={}",
            self.turns,
            direction,
            moved,
            merges,
            points,
            self.score
        );

        TurnReport {
            direction,
            slide,
            spawned,
            game_over: self.over,
        }
    }

    /// Initialises the grid and plays until the game is over.
    /// Returns the final score.
    pub fn run<S, R, O>(&mut self, source: &mut S, rng: &mut R, observer: &mut O) -> Result<u64>
    where
        S: DirectionSource + ?Sized,
        R: Rng + ?Sized,
        O: TileObserver + ?Sized,
    {
        self.init(rng, observer);
        while !self.over {
            let direction = source.next_direction(rng)?;
            self.play_turn(direction, rng, observer);
        }
        Ok(self.score)
    }
}

/// Plays one full game with `strategy` on a fresh `size`×`size` grid.
pub fn simulate<R, O>(
    strategy: TileStrategy,
    size: usize,
    rng: &mut R,
    observer: &mut O,
) -> Result<u64>
where
    R: Rng + ?Sized,
    O: TileObserver + ?Sized,
{
    let mut game = TileGame::new(size)?;
    let mut selector = DirectionSelector::new(strategy);
    let score = game.run(&mut selector, rng, observer)?;
    log::debug!(
        "{:?} finished after {} turns: {} points (max tile {})",
        strategy,
        game.turns(),
        score,
        game.grid().max_tile()
    );
    Ok(score)
}

use crate::game::direction::Direction;
use crate::strategy::axis::StrategyAxis;
use crate::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed sequence walked by [`TileStrategy::LeftDownRightDownPattern`].
pub const LDRD_PATTERN: [Direction; 5] = [
    Direction::Left,
    Direction::Down,
    Direction::Right,
    Direction::Down,
    Direction::Up,
];

/// How the direction of the next tile-game turn is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileStrategy {
    /// Uniform over the four directions, every turn.
    Random,
    /// Left, Up, Right, Down, Left, ...
    #[serde(rename = "rotate_cw")]
    RotateClockwise,
    /// Left, Down, Right, Up, Left, ...
    #[serde(rename = "rotate_ccw")]
    RotateCounterClockwise,
    /// Left, Down, Right, Down, Up, Left, ...
    #[serde(rename = "ldrd")]
    LeftDownRightDownPattern,
}

impl StrategyAxis for TileStrategy {
    const AXIS: &'static str = "StrategyMove";

    fn variants() -> &'static [Self] {
        &[
            TileStrategy::Random,
            TileStrategy::RotateClockwise,
            TileStrategy::RotateCounterClockwise,
            TileStrategy::LeftDownRightDownPattern,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            TileStrategy::Random => "RANDOM",
            TileStrategy::RotateClockwise => "ROTATE_CW",
            TileStrategy::RotateCounterClockwise => "ROTATE_CCW",
            TileStrategy::LeftDownRightDownPattern => "LDRD",
        }
    }
}

/// Maps the strategy and its cursor to a direction and advances the cursor.
pub fn select_direction<R: Rng + ?Sized>(
    strategy: TileStrategy,
    cursor: &mut usize,
    rng: &mut R,
) -> Direction {
    match strategy {
        TileStrategy::Random => Direction::ALL[rng.random_range(0..Direction::ALL.len())],
        TileStrategy::RotateClockwise => {
            let dir = Direction::ALL[*cursor % Direction::ALL.len()];
            *cursor = (*cursor + 1) % Direction::ALL.len();
            dir
        }
        TileStrategy::RotateCounterClockwise => {
            let len = Direction::ALL.len();
            let dir = Direction::ALL[*cursor % len];
            *cursor = (*cursor + len - 1) % len;
            dir
        }
        TileStrategy::LeftDownRightDownPattern => {
            let dir = LDRD_PATTERN[*cursor % LDRD_PATTERN.len()];
            *cursor = (*cursor + 1) % LDRD_PATTERN.len();
            dir
        }
    }
}

/// Supplies the direction of each turn to a [`TileGame`](crate::game::tile_game::TileGame).
pub trait DirectionSource {
    fn next_direction<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Direction>;
}

/// A strategy together with its per-game cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionSelector {
    strategy: TileStrategy,
    cursor: usize,
}

impl DirectionSelector {
    pub fn new(strategy: TileStrategy) -> Self {
        Self {
            strategy,
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn select<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Direction {
        select_direction(self.strategy, &mut self.cursor, rng)
    }
}

impl DirectionSource for DirectionSelector {
    fn next_direction<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Direction> {
        Ok(self.select(rng))
    }
}

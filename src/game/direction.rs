use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge toward which every tile is compacted and merged during a turn.
///
/// The declaration order is the canonical rotation order used by the
/// rotating strategies and by the interactive prompt codes (1..=4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Position in the rotation order.
    pub fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    /// Code shown to a human player (1=LEFT .. 4=DOWN).
    pub fn code(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_code(code: i64) -> Option<Direction> {
        match code {
            1 => Some(Direction::Left),
            2 => Some(Direction::Up),
            3 => Some(Direction::Right),
            4 => Some(Direction::Down),
            _ => None,
        }
    }

    /// Upper-case label used in prompts.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Left => "LEFT",
            Direction::Up => "UP",
            Direction::Right => "RIGHT",
            Direction::Down => "DOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Human-facing play session for the tile game.

pub mod interactive;
pub mod prompt;

pub use interactive::{ensure_playable, play_interactive};
pub use prompt::DirectionPrompt;

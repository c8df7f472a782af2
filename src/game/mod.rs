//! The tile-merging game ("2048").

pub mod direction;
pub mod grid;
pub mod tile_game;
pub mod tile_strategy;

pub use direction::Direction;
pub use grid::{Grid, SlideOutcome};
pub use tile_game::{Checkpoint, TileGame, TileGameView, TileObserver, TurnReport};
pub use tile_strategy::{DirectionSelector, DirectionSource, TileStrategy};

//! The board race game ("Hoppel Poppel").
//!
//! Each player moves eight animal tokens from a reserve through a two-slot
//! staging area onto the track. The first player with every token on the
//! track wins.

pub mod animal;
pub mod duplicates;
pub mod player;
pub mod pools;
pub mod race_game;

pub use animal::{Animal, DieFace};
pub use duplicates::{DuplicatePolicy, PlaceholderStrategy, RaceStrategy};
pub use player::{RacePlayer, RacePlayerView};
pub use pools::TokenPools;
pub use race_game::{RaceGame, RaceObserver};

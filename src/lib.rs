//! # Best Game Strategy
//!
//! Monte-Carlo evaluation of simple playing strategies for two games.
//!
//! ## Features
//!
//! - **2048**: tile-merging engine with four direction strategies
//! - **Hoppel Poppel**: board race engine with duplicate-handling policies
//! - **Harness**: plays every strategy combination N times and ranks them
//! - **Reports**: console tables or JSON
//!
//! ## Usage
//!
//! ```rust
//! use best_game_strategy::config::{Game, SimulationConfig};
//! use best_game_strategy::strategy::run_stats;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = SimulationConfig { repetitions: 10, ..Default::default() };
//! let mut rng = StdRng::seed_from_u64(7);
//! let report = run_stats(Game::Tile2048, &config, &mut rng, None, &mut ()).unwrap();
//! assert_eq!(report.repetitions, 10);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Run configuration and game selection
pub mod config;

/// Tile-merging game engine
pub mod game;

/// Board race game engine
pub mod race;

/// Console renderers and report writers
pub mod render;

/// Score and win aggregates
pub mod scoring;

/// Interactive play session
pub mod services;

/// Strategy axes, harness and experiments
pub mod strategy;

/// Logger setup
pub mod logging;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the library
#[derive(Debug, thiserror::Error)]
pub enum BestGameStrategyError {
    #[error("Repetitions must be positive, got {0}")]
    InvalidRepetitions(u64),

    #[error("Grid size must be at least 2, got {0}")]
    InvalidGridSize(usize),

    #[error("Invalid number of players: {0}")]
    InvalidPlayerCount(usize),

    #[error("Unknown game: {0}")]
    UnknownGame(String),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BestGameStrategyError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

//! Simulation configuration.
//!
//! Values come from [`SimulationConfig::default`], optionally overlaid by a
//! JSON file and finally by command-line flags. [`SimulationConfig::validate`]
//! runs before any simulation starts.

use crate::game::grid::MIN_GRID_SIZE;
use crate::game::tile_strategy::TileStrategy;
use crate::race::duplicates::DuplicatePolicy;
use crate::{BestGameStrategyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default trials per strategy combination.
pub const DEFAULT_REPETITIONS: u64 = 100_000;

/// Which game to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Game {
    #[serde(rename = "2048")]
    #[value(name = "2048")]
    Tile2048,
    #[serde(rename = "hoppel_poppel")]
    #[value(name = "hoppel_poppel")]
    HoppelPoppel,
}

impl Game {
    pub fn id(self) -> &'static str {
        match self {
            Game::Tile2048 => "2048",
            Game::HoppelPoppel => "hoppel_poppel",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Game {
    type Err = BestGameStrategyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "2048" => Ok(Game::Tile2048),
            "hoppel_poppel" => Ok(Game::HoppelPoppel),
            other => Err(BestGameStrategyError::UnknownGame(other.to_string())),
        }
    }
}

/// Tunable parameters of a statistics run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Trials per strategy combination.
    /// Default: 100000
    pub repetitions: u64,

    /// Edge length of the tile-game grid.
    /// Default: 4
    pub grid_size: usize,

    /// Seed of the random generator. `None` draws a seed from the OS.
    /// Default: None
    pub seed: Option<u64>,

    /// Render every simulated tile game on the console.
    /// Default: false
    pub plot_auto: bool,

    /// Tile strategies to evaluate; empty means all.
    /// Default: []
    pub tile_strategies: Vec<TileStrategy>,

    /// Duplicate policies to evaluate for the player under test; empty means all.
    /// Default: []
    pub duplicate_policies: Vec<DuplicatePolicy>,

    /// Seat counts of the all-random race experiments run before the
    /// strategy comparison.
    /// Default: [2, 4]
    pub baseline_player_counts: Vec<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            grid_size: 4,
            seed: None,
            plot_auto: false,
            tile_strategies: Vec::new(),
            duplicate_policies: Vec::new(),
            baseline_player_counts: vec![2, 4],
        }
    }
}

impl SimulationConfig {
    /// Reads a JSON configuration. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BestGameStrategyError::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| BestGameStrategyError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(BestGameStrategyError::InvalidRepetitions(self.repetitions));
        }
        if self.grid_size < MIN_GRID_SIZE {
            return Err(BestGameStrategyError::InvalidGridSize(self.grid_size));
        }
        if let Some(&count) = self.baseline_player_counts.iter().find(|&&c| c == 0) {
            return Err(BestGameStrategyError::InvalidPlayerCount(count));
        }
        Ok(())
    }
}

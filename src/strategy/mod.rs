//! Strategy axes, the evaluation harness and the per-game experiments.

pub mod axis;
pub mod experiments;
pub mod harness;

pub use axis::{Combination, StrategyAxis};
pub use experiments::{run_stats, EvaluationReport, GameReport};
pub use harness::{evaluate, Ranking, Repetitions};

pub mod aggregate;

pub use aggregate::{Aggregate, ScoreAggregate, WinTally};

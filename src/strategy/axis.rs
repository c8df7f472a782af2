use crate::game::tile_strategy::TileStrategy;
use crate::race::duplicates::{DuplicatePolicy, PlaceholderStrategy, RaceStrategy};
use crate::{BestGameStrategyError, Result};
use std::fmt;

/// One independently enumerable dimension of decision policy.
pub trait StrategyAxis: Copy + Eq + fmt::Debug + 'static {
    /// Axis name printed next to the chosen variant.
    const AXIS: &'static str;

    /// Every variant in declaration order.
    fn variants() -> &'static [Self];

    /// Upper-case variant name.
    fn name(self) -> &'static str;

    /// Parses a variant name, ignoring case and treating `-` like `_`.
    fn parse(name: &str) -> Result<Self> {
        let wanted = name.trim().replace('-', "_").to_ascii_uppercase();
        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.name() == wanted)
            .ok_or_else(|| BestGameStrategyError::UnknownStrategy(name.to_string()))
    }
}

/// A full strategy: one choice per axis.
pub trait Combination: Copy + fmt::Debug {
    /// `(axis, variant)` pairs in axis order.
    fn labels(&self) -> Vec<(&'static str, &'static str)>;
}

impl Combination for TileStrategy {
    fn labels(&self) -> Vec<(&'static str, &'static str)> {
        vec![(TileStrategy::AXIS, self.name())]
    }
}

impl Combination for RaceStrategy {
    fn labels(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (DuplicatePolicy::AXIS, self.duplicates.name()),
            (PlaceholderStrategy::AXIS, self.placeholder.name()),
        ]
    }
}

/// Variants of `A`, optionally restricted to `only` (empty = all).
/// Declaration order is kept and duplicates in `only` are ignored.
pub fn variants_among<A: StrategyAxis>(only: &[A]) -> Vec<A> {
    A::variants()
        .iter()
        .copied()
        .filter(|variant| only.is_empty() || only.contains(variant))
        .collect()
}

/// Cartesian product of two axes, first axis varying slowest.
pub fn product<A: Copy, B: Copy>(first: &[A], second: &[B]) -> Vec<(A, B)> {
    first
        .iter()
        .flat_map(|&a| second.iter().map(move |&b| (a, b)))
        .collect()
}

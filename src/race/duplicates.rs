//! Rule tables deciding which token a player stages or recalls.
//!
//! Kinds are always scanned in [`Animal::ALL`] order, so the rules are
//! deterministic whenever they do not fall back to a random pick.

use crate::race::animal::Animal;
use crate::race::pools::TokenPools;
use crate::strategy::axis::StrategyAxis;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a player treats duplicate kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    Random,
    AvoidDuplicates,
    ForceDuplicates,
}

impl StrategyAxis for DuplicatePolicy {
    const AXIS: &'static str = "StrategyDuplicates";

    fn variants() -> &'static [Self] {
        &[
            DuplicatePolicy::Random,
            DuplicatePolicy::AvoidDuplicates,
            DuplicatePolicy::ForceDuplicates,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            DuplicatePolicy::Random => "RANDOM",
            DuplicatePolicy::AvoidDuplicates => "AVOID_DUPLICATES",
            DuplicatePolicy::ForceDuplicates => "FORCE_DUPLICATES",
        }
    }
}

/// Second strategy axis of the race game. It has no effect on play and
/// only exercises multi-axis enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceholderStrategy {
    T1,
    T2,
}

impl StrategyAxis for PlaceholderStrategy {
    const AXIS: &'static str = "StrategyTest";

    fn variants() -> &'static [Self] {
        &[PlaceholderStrategy::T1, PlaceholderStrategy::T2]
    }

    fn name(self) -> &'static str {
        match self {
            PlaceholderStrategy::T1 => "T1",
            PlaceholderStrategy::T2 => "T2",
        }
    }
}

/// One choice per race strategy axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RaceStrategy {
    pub duplicates: DuplicatePolicy,
    pub placeholder: PlaceholderStrategy,
}

impl RaceStrategy {
    /// Strategy of the reference player in every comparison.
    pub const BASELINE: RaceStrategy = RaceStrategy {
        duplicates: DuplicatePolicy::Random,
        placeholder: PlaceholderStrategy::T1,
    };

    pub fn new(duplicates: DuplicatePolicy, placeholder: PlaceholderStrategy) -> Self {
        Self {
            duplicates,
            placeholder,
        }
    }
}

impl From<(DuplicatePolicy, PlaceholderStrategy)> for RaceStrategy {
    fn from((duplicates, placeholder): (DuplicatePolicy, PlaceholderStrategy)) -> Self {
        Self::new(duplicates, placeholder)
    }
}

impl fmt::Display for RaceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            self.duplicates.name(),
            self.placeholder.name()
        )
    }
}

fn random_token<R: Rng + ?Sized>(area: &[Animal], rng: &mut R) -> Option<Animal> {
    if area.is_empty() {
        None
    } else {
        Some(area[rng.random_range(0..area.len())])
    }
}

/// Kinds to move from reserve into staging next, in order. Returns one
/// kind, two equal kinds (forced pair), or nothing when the reserve is
/// empty or staging is full.
pub fn pick_for_staging<R: Rng + ?Sized>(
    policy: DuplicatePolicy,
    pools: &TokenPools,
    rng: &mut R,
) -> Vec<Animal> {
    if pools.staging_is_full() || pools.reserve().is_empty() {
        return Vec::new();
    }

    let preferred = match policy {
        DuplicatePolicy::Random => None,
        DuplicatePolicy::AvoidDuplicates => {
            let unstaged_with = |copies: usize| {
                Animal::ALL
                    .into_iter()
                    .find(|&kind| pools.reserve_count(kind) == copies && !pools.is_staged(kind))
            };
            unstaged_with(2).or_else(|| unstaged_with(1)).map(|kind| vec![kind])
        }
        DuplicatePolicy::ForceDuplicates => match pools.staging() {
            [] if pools.reserve().len() >= 2 => Animal::ALL
                .into_iter()
                .find(|&kind| pools.reserve_count(kind) == 2)
                .map(|kind| vec![kind, kind]),
            [staged] => {
                let staged = *staged;
                (pools.reserve_count(staged) == 1).then(|| vec![staged])
            }
            _ => None,
        },
    };

    preferred
        .or_else(|| random_token(pools.reserve(), rng).map(|kind| vec![kind]))
        .unwrap_or_default()
}

/// Kind to take back from the track, or `None` when fewer than two tokens
/// are on the track.
pub fn pick_for_recall<R: Rng + ?Sized>(
    policy: DuplicatePolicy,
    pools: &TokenPools,
    rng: &mut R,
) -> Option<Animal> {
    if pools.track().len() <= 1 {
        return None;
    }

    let preferred = match policy {
        DuplicatePolicy::Random => None,
        DuplicatePolicy::AvoidDuplicates => Animal::ALL
            .into_iter()
            .find(|&kind| pools.track_count(kind) == 2),
        DuplicatePolicy::ForceDuplicates => Animal::ALL
            .into_iter()
            .find(|&kind| pools.track_count(kind) == 1),
    };

    preferred.or_else(|| random_token(pools.track(), rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use Animal::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    fn pools(reserve: &[Animal], staging: &[Animal], track: &[Animal]) -> TokenPools {
        TokenPools::from_areas(reserve.to_vec(), staging.to_vec(), track.to_vec())
            .expect("test pools must be consistent")
    }

    #[test]
    fn test_avoid_prefers_full_pairs_not_yet_staged() {
        let p = pools(
            &[Rooster, Rabbit, Rabbit, Duck, Duck, Cat, Cat],
            &[Rooster],
            &[],
        );
        assert_eq!(
            pick_for_staging(DuplicatePolicy::AvoidDuplicates, &p, &mut rng()),
            vec![Rabbit]
        );
    }

    #[test]
    fn test_avoid_falls_back_to_single_copies() {
        let p = pools(
            &[Rooster, Cat],
            &[Rabbit],
            &[Rabbit, Rooster, Duck, Duck, Cat],
        );
        assert_eq!(
            pick_for_staging(DuplicatePolicy::AvoidDuplicates, &p, &mut rng()),
            vec![Rooster]
        );
    }

    #[test]
    fn test_avoid_stages_a_duplicate_when_nothing_else_is_left() {
        let p = pools(
            &[Cat],
            &[Cat],
            &[Rooster, Rooster, Rabbit, Rabbit, Duck, Duck],
        );
        assert_eq!(
            pick_for_staging(DuplicatePolicy::AvoidDuplicates, &p, &mut rng()),
            vec![Cat]
        );
    }

    #[test]
    fn test_force_stages_a_full_pair_on_empty_staging() {
        let p = pools(
            &[Rooster, Rabbit, Duck, Duck, Cat, Cat],
            &[],
            &[Rooster, Rabbit],
        );
        assert_eq!(
            pick_for_staging(DuplicatePolicy::ForceDuplicates, &p, &mut rng()),
            vec![Duck, Duck]
        );
    }

    #[test]
    fn test_force_completes_a_staged_pair() {
        let p = pools(
            &[Rooster, Rooster, Duck, Cat, Cat],
            &[Duck],
            &[Rabbit, Rabbit],
        );
        assert_eq!(
            pick_for_staging(DuplicatePolicy::ForceDuplicates, &p, &mut rng()),
            vec![Duck]
        );
    }

    #[test]
    fn test_force_falls_back_to_a_random_single() {
        let p = pools(
            &[Rooster, Rabbit, Duck, Cat],
            &[],
            &[Rooster, Rabbit, Duck, Cat],
        );
        let picked = pick_for_staging(DuplicatePolicy::ForceDuplicates, &p, &mut rng());
        assert_eq!(picked.len(), 1);
        assert!(p.reserve().contains(&picked[0]));
    }

    #[test]
    fn test_nothing_is_staged_when_full_or_empty() {
        let full = pools(
            &[Rooster, Rooster, Rabbit, Rabbit, Duck, Duck],
            &[Cat, Cat],
            &[],
        );
        let empty = pools(
            &[],
            &[Cat],
            &[Rooster, Rooster, Rabbit, Rabbit, Duck, Duck, Cat],
        );
        for &policy in DuplicatePolicy::variants() {
            assert!(pick_for_staging(policy, &full, &mut rng()).is_empty());
            assert!(pick_for_staging(policy, &empty, &mut rng()).is_empty());
        }
    }

    #[test]
    fn test_recall_below_two_candidates_is_a_no_op() {
        let none = TokenPools::new();
        let one = pools(
            &[Rooster, Rabbit, Rabbit, Duck, Duck, Cat, Cat],
            &[],
            &[Rooster],
        );
        for &policy in DuplicatePolicy::variants() {
            assert_eq!(pick_for_recall(policy, &none, &mut rng()), None);
            assert_eq!(pick_for_recall(policy, &one, &mut rng()), None);
        }
    }

    #[test]
    fn test_recall_rules() {
        let p = pools(
            &[Rooster, Rabbit, Duck],
            &[],
            &[Rooster, Rabbit, Duck, Cat, Cat],
        );
        assert_eq!(
            pick_for_recall(DuplicatePolicy::AvoidDuplicates, &p, &mut rng()),
            Some(Cat)
        );
        assert_eq!(
            pick_for_recall(DuplicatePolicy::ForceDuplicates, &p, &mut rng()),
            Some(Rooster)
        );
        let random = pick_for_recall(DuplicatePolicy::Random, &p, &mut rng()).unwrap();
        assert!(p.track().contains(&random));
    }

    #[test]
    fn test_recall_rules_fall_back_to_random() {
        let singles = pools(
            &[Rooster, Rabbit, Duck, Cat],
            &[],
            &[Rooster, Rabbit, Duck, Cat],
        );
        let picked = pick_for_recall(DuplicatePolicy::AvoidDuplicates, &singles, &mut rng());
        assert!(picked.is_some());

        let pairs = pools(
            &[Duck, Duck, Cat, Cat],
            &[],
            &[Rooster, Rooster, Rabbit, Rabbit],
        );
        let picked = pick_for_recall(DuplicatePolicy::ForceDuplicates, &pairs, &mut rng());
        assert!(matches!(picked, Some(Rooster) | Some(Rabbit)));
    }
}

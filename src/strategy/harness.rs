//! Monte-Carlo evaluation of strategy combinations.
//!
//! Every combination is played `repetitions` times, each trial on a fresh
//! engine drawing from the shared generator. Outcomes are folded into one
//! [`Aggregate`] per combination and the combination with the highest
//! metric wins; ties go to the combination enumerated first.

use crate::scoring::aggregate::Aggregate;
use crate::{BestGameStrategyError, Result};
use indicatif::ProgressBar;
use rand::Rng;
use serde::Serialize;
use std::num::NonZeroU64;

/// Number of trials per combination. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Repetitions(NonZeroU64);

impl Repetitions {
    pub fn new(count: u64) -> Result<Self> {
        NonZeroU64::new(count)
            .map(Repetitions)
            .ok_or(BestGameStrategyError::InvalidRepetitions(count))
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for Repetitions {
    type Error = BestGameStrategyError;

    fn try_from(count: u64) -> Result<Self> {
        Self::new(count)
    }
}

/// Aggregated outcome of one combination.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry<C, A> {
    pub combination: C,
    pub aggregate: A,
}

/// All evaluated combinations in enumeration order plus the arg-max.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking<C, A> {
    pub entries: Vec<RankedEntry<C, A>>,
    pub best: Option<usize>,
}

impl<C, A: Aggregate> Ranking<C, A> {
    fn from_entries(entries: Vec<RankedEntry<C, A>>) -> Self {
        let best = arg_max(entries.iter().map(|e| e.aggregate.metric()));
        Self { entries, best }
    }

    pub fn best_entry(&self) -> Option<&RankedEntry<C, A>> {
        self.best.and_then(|i| self.entries.get(i))
    }

    /// Total trials over every combination.
    pub fn trials(&self) -> u64 {
        self.entries.iter().map(|e| e.aggregate.trials()).sum()
    }
}

/// Index of the largest value; the first one wins a tie. NaN never wins.
pub fn arg_max<I: IntoIterator<Item = f64>>(values: I) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, value) in values.into_iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, current)| value > current) {
            best = Some((i, value));
        }
    }
    best.map(|(i, _)| i)
}

/// Runs `repetitions` trials of one combination into `aggregate`.
pub fn run_trials<C, A, R, F>(
    combination: &C,
    repetitions: Repetitions,
    aggregate: &mut A,
    rng: &mut R,
    progress: Option<&ProgressBar>,
    trial: &mut F,
) -> Result<()>
where
    A: Aggregate,
    R: Rng + ?Sized,
    F: FnMut(&C, &mut R) -> Result<A::Outcome>,
{
    for _ in 0..repetitions.get() {
        let outcome = trial(combination, rng)?;
        aggregate.record(outcome);
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }
    Ok(())
}

/// Evaluates every combination and ranks them by [`Aggregate::metric`].
pub fn evaluate<C, A, R, N, F>(
    combinations: &[C],
    repetitions: Repetitions,
    rng: &mut R,
    progress: Option<&ProgressBar>,
    mut new_aggregate: N,
    mut trial: F,
) -> Result<Ranking<C, A>>
where
    C: Clone + std::fmt::Debug,
    A: Aggregate,
    R: Rng + ?Sized,
    N: FnMut() -> A,
    F: FnMut(&C, &mut R) -> Result<A::Outcome>,
{
    let mut entries = Vec::with_capacity(combinations.len());
    for (i, combination) in combinations.iter().enumerate() {
        log::info!(
            "Test ({}/{}) {:?}: {} trials",
            i + 1,
            combinations.len(),
            combination,
            repetitions.get()
        );
        let mut aggregate = new_aggregate();
        run_trials(
            combination,
            repetitions,
            &mut aggregate,
            rng,
            progress,
            &mut trial,
        )?;
        log::debug!("{:?}: metric {:.2}", combination, aggregate.metric());
        entries.push(RankedEntry {
            combination: combination.clone(),
            aggregate,
        });
    }
    Ok(Ranking::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::aggregate::ScoreAggregate;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_arg_max_prefers_first_on_ties() {
        assert_eq!(arg_max([1.0, 3.0, 3.0, 2.0]), Some(1));
        assert_eq!(arg_max([5.0, 5.0]), Some(0));
        assert_eq!(arg_max(Vec::<f64>::new()), None);
        assert_eq!(arg_max([f64::NAN, 1.0]), Some(1));
    }

    #[test]
    fn test_zero_repetitions_are_rejected() {
        assert_matches!(
            Repetitions::new(0),
            Err(BestGameStrategyError::InvalidRepetitions(0))
        );
        assert_eq!(Repetitions::try_from(3).unwrap().get(), 3);
    }

    #[test]
    fn test_evaluate_runs_each_combination_n_times() {
        let mut rng = StdRng::seed_from_u64(0);
        let combos = ["a", "b", "c"];
        let ranking = evaluate(
            &combos,
            Repetitions::new(10).unwrap(),
            &mut rng,
            None,
            ScoreAggregate::default,
            |c: &&str, _rng: &mut StdRng| Ok(if *c == "b" { 7 } else { 3 }),
        )
        .unwrap();

        assert_eq!(ranking.entries.len(), 3);
        assert!(ranking.entries.iter().all(|e| e.aggregate.trials() == 10));
        assert_eq!(ranking.trials(), 30);
        assert_eq!(ranking.best_entry().unwrap().combination, "b");
    }

    #[test]
    fn test_evaluate_ties_go_to_first_combination() {
        let mut rng = StdRng::seed_from_u64(0);
        let ranking = evaluate(
            &[1u8, 2, 3],
            Repetitions::new(2).unwrap(),
            &mut rng,
            None,
            ScoreAggregate::default,
            |_: &u8, _rng: &mut StdRng| Ok(5),
        )
        .unwrap();
        assert_eq!(ranking.best, Some(0));
    }

    #[test]
    fn test_trial_errors_stop_the_evaluation() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = evaluate(
            &[1u8],
            Repetitions::new(2).unwrap(),
            &mut rng,
            None,
            ScoreAggregate::default,
            |_: &u8, _rng: &mut StdRng| Err(BestGameStrategyError::InputClosed),
        );
        assert_matches!(result, Err(BestGameStrategyError::InputClosed));
    }
}

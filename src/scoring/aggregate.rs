//! Per-combination accumulators for trial outcomes.

use serde::Serialize;

/// Folds trial outcomes into a single ranking metric.
pub trait Aggregate {
    type Outcome;

    fn record(&mut self, outcome: Self::Outcome);

    /// Number of recorded trials.
    fn trials(&self) -> u64;

    /// Value maximised when ranking combinations.
    fn metric(&self) -> f64;
}

/// Running statistics over final scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreAggregate {
    trials: u64,
    total: u64,
    sum_squares: f64,
    min: Option<u64>,
    max: Option<u64>,
}

impl ScoreAggregate {
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn min(&self) -> Option<u64> {
        self.min
    }

    pub fn max(&self) -> Option<u64> {
        self.max
    }

    pub fn average(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total as f64 / self.trials as f64
        }
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let mean = self.average();
        (self.sum_squares / self.trials as f64 - mean * mean).max(0.0).sqrt()
    }
}

impl Aggregate for ScoreAggregate {
    type Outcome = u64;

    fn record(&mut self, score: u64) {
        self.trials += 1;
        self.total += score;
        self.sum_squares += (score as f64) * (score as f64);
        self.min = Some(self.min.map_or(score, |m| m.min(score)));
        self.max = Some(self.max.map_or(score, |m| m.max(score)));
    }

    fn trials(&self) -> u64 {
        self.trials
    }

    fn metric(&self) -> f64 {
        self.average()
    }
}

/// Win counts per seat. The ranking metric is the win count of `focus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinTally {
    wins: Vec<u64>,
    focus: usize,
}

impl WinTally {
    pub fn new(players: usize, focus: usize) -> Self {
        Self {
            wins: vec![0; players],
            focus,
        }
    }

    pub fn players(&self) -> usize {
        self.wins.len()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn wins(&self) -> &[u64] {
        &self.wins
    }

    pub fn total(&self) -> u64 {
        self.wins.iter().sum()
    }

    /// Share of all wins per seat; sums to 1 once any trial was recorded.
    pub fn win_rates(&self) -> Vec<f64> {
        let total = self.total();
        self.wins
            .iter()
            .map(|&w| if total == 0 { 0.0 } else { w as f64 / total as f64 })
            .collect()
    }

    /// Win rate scaled by the number of seats, so 1.0 is a fair share.
    pub fn fair_share_rates(&self) -> Vec<f64> {
        let players = self.players() as f64;
        self.win_rates().into_iter().map(|r| r * players).collect()
    }

    /// `matrix[a][b]` is wins of `a` divided by wins of `b`, `None` when `b`
    /// never won.
    pub fn crossover(&self) -> Vec<Vec<Option<f64>>> {
        self.wins
            .iter()
            .map(|&a| {
                self.wins
                    .iter()
                    .map(|&b| if b == 0 { None } else { Some(a as f64 / b as f64) })
                    .collect()
            })
            .collect()
    }
}

impl Aggregate for WinTally {
    type Outcome = usize;

    /// Records a win for `seat`, growing the table for unseen seats.
    fn record(&mut self, seat: usize) {
        if seat >= self.wins.len() {
            self.wins.resize(seat + 1, 0);
        }
        self.wins[seat] += 1;
    }

    fn trials(&self) -> u64 {
        self.total()
    }

    fn metric(&self) -> f64 {
        self.wins.get(self.focus).copied().unwrap_or(0) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_aggregate_statistics() {
        let mut agg = ScoreAggregate::default();
        for score in [100, 200, 300] {
            agg.record(score);
        }
        assert_eq!(agg.trials(), 3);
        assert_eq!(agg.total(), 600);
        assert_eq!(agg.min(), Some(100));
        assert_eq!(agg.max(), Some(300));
        assert!((agg.average() - 200.0).abs() < 1e-9);
        assert!((agg.std_dev() - 81.6496580927726).abs() < 1e-6);
        assert_eq!(agg.metric(), agg.average());
    }

    #[test]
    fn test_empty_score_aggregate() {
        let agg = ScoreAggregate::default();
        assert_eq!(agg.average(), 0.0);
        assert_eq!(agg.std_dev(), 0.0);
        assert_eq!(agg.min(), None);
    }

    #[test]
    fn test_win_tally_rates_and_crossover() {
        let mut tally = WinTally::new(2, 1);
        for seat in [0, 0, 0, 1] {
            tally.record(seat);
        }
        assert_eq!(tally.wins(), &[3, 1]);
        assert_eq!(tally.metric(), 1.0);
        assert_eq!(tally.win_rates(), vec![0.75, 0.25]);
        assert_eq!(tally.fair_share_rates(), vec![1.5, 0.5]);

        let matrix = tally.crossover();
        assert_eq!(matrix[0][0], Some(1.0));
        assert_eq!(matrix[0][1], Some(3.0));
        assert_eq!(matrix[1][0], Some(1.0 / 3.0));
    }

    #[test]
    fn test_crossover_handles_seats_without_wins() {
        let mut tally = WinTally::new(3, 0);
        tally.record(0);
        let matrix = tally.crossover();
        assert_eq!(matrix[0][1], None);
        assert_eq!(matrix[1][0], Some(0.0));
    }

    #[test]
    fn test_win_tally_grows_for_unknown_seats() {
        let mut tally = WinTally::new(1, 0);
        tally.record(2);
        assert_eq!(tally.wins(), &[0, 0, 1]);
        assert_eq!(tally.trials(), 1);
    }
}

//! The statistics runs of both games, built on the generic harness.

use crate::config::{Game, SimulationConfig};
use crate::game::tile_game::{self, TileObserver};
use crate::game::tile_strategy::TileStrategy;
use crate::race::duplicates::{PlaceholderStrategy, RaceStrategy};
use crate::race::race_game::{self, RaceObserver};
use crate::scoring::aggregate::{Aggregate, ScoreAggregate, WinTally};
use crate::strategy::axis::{product, variants_among, StrategyAxis};
use crate::strategy::harness::{evaluate, run_trials, Ranking, Repetitions};
use crate::{BestGameStrategyError, Result};
use chrono::Utc;
use indicatif::ProgressBar;
use rand::Rng;
use serde::Serialize;

/// Seat of the player whose strategy is varied in race comparisons.
pub const PLAYER_UNDER_TEST: usize = 1;

#[derive(Debug, Clone, Serialize)]
pub struct TileReport {
    pub grid_size: usize,
    pub ranking: Ranking<TileStrategy, ScoreAggregate>,
}

/// All seats play the baseline strategy; shows the effect of seat order.
#[derive(Debug, Clone, Serialize)]
pub struct BaselineReport {
    pub players: usize,
    pub tally: WinTally,
}

#[derive(Debug, Clone, Serialize)]
pub struct RaceReport {
    pub baselines: Vec<BaselineReport>,
    pub ranking: Ranking<RaceStrategy, WinTally>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "game", content = "results")]
pub enum GameReport {
    #[serde(rename = "2048")]
    Tile(TileReport),
    #[serde(rename = "hoppel_poppel")]
    Race(RaceReport),
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub generated_at: String,
    pub repetitions: u64,
    pub seed: Option<u64>,
    #[serde(flatten)]
    pub report: GameReport,
}

pub fn tile_combinations(config: &SimulationConfig) -> Vec<TileStrategy> {
    variants_among(&config.tile_strategies)
}

/// Strategy-under-test combinations: selected duplicate policies × every
/// placeholder variant.
pub fn race_combinations(config: &SimulationConfig) -> Vec<RaceStrategy> {
    product(
        &variants_among(&config.duplicate_policies),
        PlaceholderStrategy::variants(),
    )
    .into_iter()
    .map(RaceStrategy::from)
    .collect()
}

/// Number of trials a run of `game` will play, for progress reporting.
pub fn planned_trials(game: Game, config: &SimulationConfig) -> u64 {
    let combinations = match game {
        Game::Tile2048 => tile_combinations(config).len(),
        Game::HoppelPoppel => race_combinations(config).len() + config.baseline_player_counts.len(),
    };
    combinations as u64 * config.repetitions
}

/// Average score of every selected tile strategy.
pub fn run_tile_stats<R, O>(
    config: &SimulationConfig,
    rng: &mut R,
    progress: Option<&ProgressBar>,
    observer: &mut O,
) -> Result<TileReport>
where
    R: Rng + ?Sized,
    O: TileObserver + ?Sized,
{
    let repetitions = Repetitions::new(config.repetitions)?;
    let combinations = tile_combinations(config);
    log::info!(
        "🎲 2048: {} strategies × {} games on a {}x{} grid",
        combinations.len(),
        repetitions.get(),
        config.grid_size,
        config.grid_size
    );

    let grid_size = config.grid_size;
    let ranking = evaluate(
        &combinations,
        repetitions,
        rng,
        progress,
        ScoreAggregate::default,
        |&strategy: &TileStrategy, rng: &mut R| {
            tile_game::simulate(strategy, grid_size, rng, observer)
        },
    )?;

    if let Some(best) = ranking.best_entry() {
        log::info!(
            "🏆 Best 2048 strategy: {} ({:.2} points on average)",
            best.combination.name(),
            best.aggregate.average()
        );
    }
    Ok(TileReport { grid_size, ranking })
}

/// Plays `repetitions` races with `players` baseline seats.
pub fn run_baseline<R, O>(
    players: usize,
    repetitions: Repetitions,
    rng: &mut R,
    progress: Option<&ProgressBar>,
    observer: &mut O,
) -> Result<BaselineReport>
where
    R: Rng + ?Sized,
    O: RaceObserver + ?Sized,
{
    log::info!("🐇 {} players with a random strategy", players);
    let seats = vec![RaceStrategy::BASELINE; players];
    let mut tally = WinTally::new(players, 0);
    run_trials(
        &seats,
        repetitions,
        &mut tally,
        rng,
        progress,
        &mut |seats: &Vec<RaceStrategy>, rng: &mut R| race_winner(seats, rng, observer),
    )?;
    Ok(BaselineReport { players, tally })
}

fn race_winner<R, O>(seats: &[RaceStrategy], rng: &mut R, observer: &mut O) -> Result<usize>
where
    R: Rng + ?Sized,
    O: RaceObserver + ?Sized,
{
    race_game::simulate(seats, rng, observer)
        .ok_or(BestGameStrategyError::InvalidPlayerCount(seats.len()))
}

/// Baseline experiments followed by the baseline-vs-candidate comparison.
pub fn run_race_stats<R, O>(
    config: &SimulationConfig,
    rng: &mut R,
    progress: Option<&ProgressBar>,
    observer: &mut O,
) -> Result<RaceReport>
where
    R: Rng + ?Sized,
    O: RaceObserver + ?Sized,
{
    let repetitions = Repetitions::new(config.repetitions)?;

    let baselines = config
        .baseline_player_counts
        .iter()
        .map(|&players| run_baseline(players, repetitions, rng, progress, observer))
        .collect::<Result<Vec<_>>>()?;

    let combinations = race_combinations(config);
    log::info!(
        "🐇 Baseline {} against {} candidate strategies × {} games",
        RaceStrategy::BASELINE,
        combinations.len(),
        repetitions.get()
    );
    let ranking = evaluate(
        &combinations,
        repetitions,
        rng,
        progress,
        || WinTally::new(2, PLAYER_UNDER_TEST),
        |&candidate: &RaceStrategy, rng: &mut R| {
            race_winner(&[RaceStrategy::BASELINE, candidate], rng, observer)
        },
    )?;

    if let Some(best) = ranking.best_entry() {
        log::info!(
            "🏆 Best Hoppel Poppel strategy: {} ({} wins)",
            best.combination,
            best.aggregate.metric()
        );
    }
    Ok(RaceReport { baselines, ranking })
}

/// Validates `config` and runs the statistics of `game`. `observer` sees
/// every simulated game of either kind.
pub fn run_stats<R, O>(
    game: Game,
    config: &SimulationConfig,
    rng: &mut R,
    progress: Option<&ProgressBar>,
    observer: &mut O,
) -> Result<EvaluationReport>
where
    R: Rng + ?Sized,
    O: TileObserver + RaceObserver + ?Sized,
{
    config.validate()?;
    let report = match game {
        Game::Tile2048 => GameReport::Tile(run_tile_stats(config, rng, progress, observer)?),
        Game::HoppelPoppel => GameReport::Race(run_race_stats(config, rng, progress, observer)?),
    };
    Ok(EvaluationReport {
        generated_at: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        repetitions: config.repetitions,
        seed: config.seed,
        report,
    })
}

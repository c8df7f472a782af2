//! End-to-end statistics runs through the public API

use best_game_strategy::config::{Game, SimulationConfig};
use best_game_strategy::game::TileStrategy;
use best_game_strategy::race::{DuplicatePolicy, RaceStrategy};
use best_game_strategy::render::write_report;
use best_game_strategy::scoring::Aggregate;
use best_game_strategy::strategy::{run_stats, GameReport};
use best_game_strategy::BestGameStrategyError;
use assert_matches::assert_matches;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn report_json(game: Game, config: &SimulationConfig, seed: u64) -> serde_json::Value {
    let mut rng = StdRng::seed_from_u64(seed);
    let report = run_stats(game, config, &mut rng, None, &mut ()).unwrap();
    let mut json = serde_json::to_value(&report).unwrap();
    json["generated_at"] = serde_json::Value::Null;
    json
}

#[test]
fn test_single_combination_collects_every_trial() {
    let config = SimulationConfig {
        repetitions: 1000,
        grid_size: 3,
        tile_strategies: vec![TileStrategy::LeftDownRightDownPattern],
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(11);

    let report = run_stats(Game::Tile2048, &config, &mut rng, None, &mut ()).unwrap();

    let GameReport::Tile(tile) = &report.report else {
        panic!("expected a 2048 report");
    };
    assert_eq!(tile.ranking.entries.len(), 1);
    assert_eq!(tile.ranking.entries[0].aggregate.trials(), 1000);
    assert_eq!(tile.ranking.best, Some(0));
}

#[test]
fn test_same_seed_gives_identical_reports() {
    let tile = SimulationConfig {
        repetitions: 30,
        ..Default::default()
    };
    assert_eq!(
        report_json(Game::Tile2048, &tile, 42),
        report_json(Game::Tile2048, &tile, 42)
    );

    let race = SimulationConfig {
        repetitions: 50,
        duplicate_policies: vec![DuplicatePolicy::AvoidDuplicates],
        ..Default::default()
    };
    assert_eq!(
        report_json(Game::HoppelPoppel, &race, 42),
        report_json(Game::HoppelPoppel, &race, 42)
    );
}

#[test]
fn test_race_report_varies_only_the_second_seat() {
    let config = SimulationConfig {
        repetitions: 40,
        baseline_player_counts: vec![3],
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(5);

    let report = run_stats(Game::HoppelPoppel, &config, &mut rng, None, &mut ()).unwrap();

    let GameReport::Race(race) = &report.report else {
        panic!("expected a race report");
    };
    assert_eq!(race.baselines.len(), 1);
    assert_eq!(race.baselines[0].tally.wins().len(), 3);
    assert_eq!(race.ranking.entries[0].combination, RaceStrategy::BASELINE);
    for entry in &race.ranking.entries {
        assert_eq!(entry.aggregate.wins().iter().sum::<u64>(), 40);
    }
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let config = SimulationConfig {
        repetitions: 0,
        ..Default::default()
    };
    assert_matches!(
        run_stats(Game::HoppelPoppel, &config, &mut rng, None, &mut ()),
        Err(BestGameStrategyError::InvalidRepetitions(0))
    );
}

#[test]
fn test_text_report_names_the_best_strategy() {
    let config = SimulationConfig {
        repetitions: 20,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(8);
    let report = run_stats(Game::Tile2048, &config, &mut rng, None, &mut ()).unwrap();

    let mut out = Vec::new();
    write_report(&mut out, &report).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("# Test (4/4) with the following strategy:"));
    assert!(text.contains("==> The best strategy is:"));
    assert_eq!(text.matches("Points (avg): ").count(), 4);
}

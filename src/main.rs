use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use best_game_strategy::config::{Game, SimulationConfig};
use best_game_strategy::game::TileStrategy;
use best_game_strategy::logging::setup_logging;
use best_game_strategy::race::DuplicatePolicy;
use best_game_strategy::render::{write_report, ConsoleRenderer};
use best_game_strategy::services::{ensure_playable, play_interactive, DirectionPrompt};
use best_game_strategy::strategy::experiments::planned_trials;
use best_game_strategy::strategy::{run_stats, StrategyAxis};
use best_game_strategy::{BestGameStrategyError, NAME, VERSION};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "best-game-strategy", version, about)]
struct Config {
    /// Game to evaluate
    #[arg(short = 'g', long, value_enum)]
    game: Game,

    /// Number of games per strategy combination
    #[arg(short = 'n', long = "n-rep")]
    n_rep: Option<u64>,

    /// Render every simulated game on the console
    #[arg(short = 'p', long, default_value_t = false)]
    plot_auto: bool,

    /// Play a single 2048 game with directions read from stdin
    #[arg(long, default_value_t = false)]
    interactive: bool,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Edge length of the 2048 grid
    #[arg(long)]
    size: Option<usize>,

    /// Restrict the evaluated strategies (2048 moves or duplicate policies), repeatable
    #[arg(short = 's', long = "strategy")]
    strategies: Vec<String>,

    /// JSON configuration file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    no_progress: bool,
}

impl Config {
    fn simulation_config(&self) -> best_game_strategy::Result<SimulationConfig> {
        let mut sim = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };
        if let Some(n) = self.n_rep {
            sim.repetitions = n;
        }
        if let Some(size) = self.size {
            sim.grid_size = size;
        }
        if self.seed.is_some() {
            sim.seed = self.seed;
        }
        sim.plot_auto |= self.plot_auto;

        if !self.strategies.is_empty() {
            match self.game {
                Game::Tile2048 => {
                    sim.tile_strategies = self
                        .strategies
                        .iter()
                        .map(|s| TileStrategy::parse(s))
                        .collect::<best_game_strategy::Result<_>>()?;
                }
                Game::HoppelPoppel => {
                    sim.duplicate_policies = self
                        .strategies
                        .iter()
                        .map(|s| DuplicatePolicy::parse(s))
                        .collect::<best_game_strategy::Result<_>>()?;
                }
            }
        }

        sim.validate()?;
        Ok(sim)
    }
}

fn progress_bar(total: u64, hidden: bool) -> Result<ProgressBar, Box<dyn Error>> {
    if hidden {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] \
             {pos}/{len} games ({eta}) {msg}",
        )?
        .progress_chars("=>-"),
    );
    Ok(pb)
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    let _logger = setup_logging("info")?;

    let sim = config.simulation_config()?;
    log::info!("🚀 {} v{} - game {}", NAME, VERSION, config.game);

    let mut rng = match sim.seed {
        Some(seed) => {
            log::info!("🎲 Seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    if config.interactive {
        ensure_playable(config.game)?;
        let mut prompt = DirectionPrompt::stdio();
        let mut renderer = ConsoleRenderer::stdout();
        return match play_interactive(sim.grid_size, &mut prompt, &mut rng, &mut renderer) {
            Ok(_) | Err(BestGameStrategyError::InputClosed) => Ok(()),
            Err(e) => Err(e.into()),
        };
    }

    let pb = progress_bar(
        planned_trials(config.game, &sim),
        config.no_progress || config.json || sim.plot_auto,
    )?;

    let report = if sim.plot_auto {
        let mut renderer = ConsoleRenderer::stdout();
        run_stats(config.game, &sim, &mut rng, Some(&pb), &mut renderer)?
    } else {
        run_stats(config.game, &sim, &mut rng, Some(&pb), &mut ())?
    };
    pb.finish_and_clear();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        write_report(&mut out, &report)?;
    }
    out.flush()?;

    log::info!("✅ Evaluation finished at {}", report.generated_at);
    Ok(())
}

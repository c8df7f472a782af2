use crate::config::Game;
use crate::game::tile_game::{TileGame, TileObserver};
use crate::game::tile_strategy::DirectionSource;
use crate::{BestGameStrategyError, Result};
use rand::Rng;

/// Only the tile game can be played by a human.
pub fn ensure_playable(game: Game) -> Result<()> {
    match game {
        Game::Tile2048 => Ok(()),
        Game::HoppelPoppel => Err(BestGameStrategyError::Config(format!(
            "interactive play is only available for 2048, not {}",
            game
        ))),
    }
}

/// Plays a single tile game with directions from `source`, usually a
/// [`DirectionPrompt`](crate::services::prompt::DirectionPrompt).
/// Returns the final score.
pub fn play_interactive<S, R, O>(
    size: usize,
    source: &mut S,
    rng: &mut R,
    observer: &mut O,
) -> Result<u64>
where
    S: DirectionSource + ?Sized,
    R: Rng + ?Sized,
    O: TileObserver + ?Sized,
{
    let mut game = TileGame::new(size)?;
    log::info!("🎮 Interactive 2048 on a {}x{} grid", size, size);
    let score = game.run(source, rng, observer)?;
    log::info!(
        "Interactive game finished after {} turns with {} points",
        game.turns(),
        score
    );
    Ok(score)
}

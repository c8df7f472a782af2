use crate::race::animal::DieFace;
use crate::race::duplicates::RaceStrategy;
use crate::race::player::{RacePlayer, RacePlayerView};
use rand::Rng;

/// Sink for per-turn player snapshots. Observers never influence the game.
pub trait RaceObserver {
    fn observe(&mut self, player: usize, roll: DieFace, view: &RacePlayerView<'_>);
}

impl RaceObserver for () {
    fn observe(&mut self, _player: usize, _roll: DieFace, _view: &RacePlayerView<'_>) {}
}

/// A race between players taking turns in seat order.
#[derive(Debug, Clone)]
pub struct RaceGame {
    players: Vec<RacePlayer>,
}

impl RaceGame {
    pub fn new(strategies: &[RaceStrategy]) -> Self {
        Self {
            players: strategies.iter().copied().map(RacePlayer::new).collect(),
        }
    }

    pub fn players(&self) -> &[RacePlayer] {
        &self.players
    }

    /// Lets every player take turns in order until one wins.
    /// Returns the winner's seat index, or `None` when there are no players.
    pub fn run<R, O>(&mut self, rng: &mut R, observer: &mut O) -> Option<usize>
    where
        R: Rng + ?Sized,
        O: RaceObserver + ?Sized,
    {
        if self.players.is_empty() {
            return None;
        }
        loop {
            for (seat, player) in self.players.iter_mut().enumerate() {
                let (roll, won) = player.play_turn_rolled(rng);
                observer.observe(seat, roll, &player.view());
                if won {
                    log::trace!("player {} wins after {} turns", seat + 1, player.turns());
                    return Some(seat);
                }
            }
        }
    }
}

/// Plays one full race and returns the winner's seat.
pub fn simulate<R, O>(strategies: &[RaceStrategy], rng: &mut R, observer: &mut O) -> Option<usize>
where
    R: Rng + ?Sized,
    O: RaceObserver + ?Sized,
{
    RaceGame::new(strategies).run(rng, observer)
}

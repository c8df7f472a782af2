use crate::race::animal::DieFace;
use crate::race::duplicates::{pick_for_recall, pick_for_staging, RaceStrategy};
use crate::race::pools::TokenPools;
use rand::Rng;
use serde::Serialize;

/// Read-only snapshot of one player, handed to renderers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RacePlayerView<'a> {
    pub strategy: RaceStrategy,
    pub pools: &'a TokenPools,
    pub turns: u64,
}

/// One player's side of a race game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RacePlayer {
    strategy: RaceStrategy,
    pools: TokenPools,
    turns: u64,
}

impl RacePlayer {
    pub fn new(strategy: RaceStrategy) -> Self {
        Self::with_pools(strategy, TokenPools::new())
    }

    pub fn with_pools(strategy: RaceStrategy, pools: TokenPools) -> Self {
        Self {
            strategy,
            pools,
            turns: 0,
        }
    }

    pub fn strategy(&self) -> RaceStrategy {
        self.strategy
    }

    pub fn pools(&self) -> &TokenPools {
        &self.pools
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn view(&self) -> RacePlayerView<'_> {
        RacePlayerView {
            strategy: self.strategy,
            pools: &self.pools,
            turns: self.turns,
        }
    }

    /// Reserve and staging are empty, i.e. all tokens are on the track.
    pub fn has_won(&self) -> bool {
        self.pools.all_on_track()
    }

    /// Fills the staging area from the reserve following the duplicate policy.
    pub fn fill_staging<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        while !self.pools.staging_is_full() {
            let picks = pick_for_staging(self.strategy.duplicates, &self.pools, rng);
            if picks.is_empty() {
                break;
            }
            for kind in picks {
                self.pools.stage(kind);
            }
        }
    }

    /// Applies a die outcome to the pools.
    pub fn apply_roll<R: Rng + ?Sized>(&mut self, face: DieFace, rng: &mut R) {
        match face {
            DieFace::Animal(kind) => {
                self.pools.place(kind);
            }
            DieFace::PlaceBoth => {
                self.pools.place_all();
            }
            DieFace::RecallOne => {
                if let Some(kind) = pick_for_recall(self.strategy.duplicates, &self.pools, rng) {
                    self.pools.recall(kind);
                }
            }
        }
    }

    /// Stages, rolls and applies the roll. Returns the face rolled and
    /// whether the player has won.
    pub fn play_turn_rolled<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (DieFace, bool) {
        self.fill_staging(rng);
        let face = DieFace::roll(rng);
        self.apply_roll(face, rng);
        self.turns += 1;
        (face, self.has_won())
    }

    /// Plays one turn and reports whether the player has won.
    pub fn play_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.play_turn_rolled(rng).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::race::animal::Animal::{self, *};
    use crate::race::duplicates::{DuplicatePolicy, PlaceholderStrategy};
    use crate::race::pools::{STAGING_CAPACITY, TOKENS_PER_PLAYER};
    use crate::strategy::axis::StrategyAxis;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn player(
        policy: DuplicatePolicy,
        reserve: &[Animal],
        staging: &[Animal],
        track: &[Animal],
    ) -> RacePlayer {
        let pools =
            TokenPools::from_areas(reserve.to_vec(), staging.to_vec(), track.to_vec()).unwrap();
        RacePlayer::with_pools(RaceStrategy::new(policy, PlaceholderStrategy::T1), pools)
    }

    #[test]
    fn test_place_both_with_empty_staging_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = player(
            DuplicatePolicy::Random,
            &[Cat],
            &[],
            &[Rooster, Rooster, Rabbit, Rabbit, Duck, Duck, Cat],
        );
        let before = p.clone();

        p.apply_roll(DieFace::PlaceBoth, &mut rng);

        assert_eq!(p, before);
        assert!(!p.has_won());
    }

    #[test]
    fn test_animal_roll_places_only_a_staged_token() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = player(
            DuplicatePolicy::Random,
            &[Rooster, Rooster, Rabbit, Rabbit, Duck, Cat],
            &[Duck, Cat],
            &[],
        );

        p.apply_roll(DieFace::Animal(Rooster), &mut rng);
        assert!(p.pools().track().is_empty());

        p.apply_roll(DieFace::Animal(Duck), &mut rng);
        assert_eq!(p.pools().track(), &[Duck]);
        assert_eq!(p.pools().staging(), &[Cat]);
    }

    #[test]
    fn test_recall_with_a_single_token_on_track_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(1);
        for &policy in DuplicatePolicy::variants() {
            let mut p = player(
                policy,
                &[Rooster, Rabbit, Rabbit, Duck, Duck, Cat],
                &[Cat],
                &[Rooster],
            );
            let before = p.clone();
            p.apply_roll(DieFace::RecallOne, &mut rng);
            assert_eq!(p, before);
        }
    }

    #[test]
    fn test_placing_the_last_staged_tokens_wins() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = player(
            DuplicatePolicy::AvoidDuplicates,
            &[],
            &[Cat, Duck],
            &[Rooster, Rooster, Rabbit, Rabbit, Duck, Cat],
        );
        p.apply_roll(DieFace::PlaceBoth, &mut rng);
        assert!(p.has_won());
        assert_eq!(p.pools().track().len(), TOKENS_PER_PLAYER);
    }

    #[test]
    fn test_fill_staging_fills_both_slots() {
        let mut rng = StdRng::seed_from_u64(4);
        for &policy in DuplicatePolicy::variants() {
            let mut p = RacePlayer::new(RaceStrategy::new(policy, PlaceholderStrategy::T2));
            p.fill_staging(&mut rng);
            assert_eq!(p.pools().staging().len(), STAGING_CAPACITY);
            assert!(p.pools().is_consistent());
        }
    }

    #[test]
    fn test_force_duplicates_stages_a_pair() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut p = RacePlayer::new(RaceStrategy::new(
            DuplicatePolicy::ForceDuplicates,
            PlaceholderStrategy::T1,
        ));
        p.fill_staging(&mut rng);
        assert_eq!(p.pools().staging(), &[Rooster, Rooster]);
    }

    #[test]
    fn test_avoid_duplicates_stages_distinct_kinds() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut p = RacePlayer::new(RaceStrategy::new(
            DuplicatePolicy::AvoidDuplicates,
            PlaceholderStrategy::T1,
        ));
        p.fill_staging(&mut rng);
        assert_eq!(p.pools().staging(), &[Rooster, Rabbit]);
    }

    #[test]
    fn test_invariants_hold_over_whole_games() {
        for &policy in DuplicatePolicy::variants() {
            let mut rng = StdRng::seed_from_u64(2024);
            let mut p = RacePlayer::new(RaceStrategy::new(policy, PlaceholderStrategy::T1));
            loop {
                let won = p.play_turn(&mut rng);
                let pools = p.pools();
                assert!(pools.is_consistent());
                assert!(pools.staging().len() <= STAGING_CAPACITY);
                assert_eq!(
                    pools.reserve().len() + pools.staging().len() + pools.track().len(),
                    TOKENS_PER_PLAYER
                );
                assert_eq!(won, pools.track().len() == TOKENS_PER_PLAYER);
                if won {
                    break;
                }
            }
            assert!(p.turns() > 0);
        }
    }
}

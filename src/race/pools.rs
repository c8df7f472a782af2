use crate::race::animal::Animal;
use serde::Serialize;

/// Capacity of the staging area.
pub const STAGING_CAPACITY: usize = 2;

/// Total tokens per player.
pub const TOKENS_PER_PLAYER: usize = Animal::ALL.len() * Animal::COPIES;

/// The three areas holding a player's tokens.
///
/// Tokens only move between areas; the total per kind stays at
/// [`Animal::COPIES`] and the staging area never exceeds
/// [`STAGING_CAPACITY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPools {
    reserve: Vec<Animal>,
    staging: Vec<Animal>,
    track: Vec<Animal>,
}

impl Default for TokenPools {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenPools {
    /// All tokens in the reserve.
    pub fn new() -> Self {
        let mut reserve = Vec::with_capacity(TOKENS_PER_PLAYER);
        for _ in 0..Animal::COPIES {
            reserve.extend(Animal::ALL);
        }
        Self {
            reserve,
            staging: Vec::with_capacity(STAGING_CAPACITY),
            track: Vec::with_capacity(TOKENS_PER_PLAYER),
        }
    }

    /// Builds pools from explicit areas, or `None` if the token invariants
    /// would be broken.
    pub fn from_areas(
        reserve: Vec<Animal>,
        staging: Vec<Animal>,
        track: Vec<Animal>,
    ) -> Option<Self> {
        let pools = Self {
            reserve,
            staging,
            track,
        };
        pools.is_consistent().then_some(pools)
    }

    pub fn reserve(&self) -> &[Animal] {
        &self.reserve
    }

    pub fn staging(&self) -> &[Animal] {
        &self.staging
    }

    pub fn track(&self) -> &[Animal] {
        &self.track
    }

    pub fn staging_is_full(&self) -> bool {
        self.staging.len() >= STAGING_CAPACITY
    }

    pub fn reserve_count(&self, kind: Animal) -> usize {
        count(&self.reserve, kind)
    }

    pub fn track_count(&self, kind: Animal) -> usize {
        count(&self.track, kind)
    }

    pub fn is_staged(&self, kind: Animal) -> bool {
        self.staging.contains(&kind)
    }

    /// True when every token is on the track.
    pub fn all_on_track(&self) -> bool {
        self.reserve.is_empty() && self.staging.is_empty()
    }

    /// Two tokens per kind across all areas and staging within capacity.
    pub fn is_consistent(&self) -> bool {
        self.staging.len() <= STAGING_CAPACITY
            && Animal::ALL.iter().all(|&kind| {
                count(&self.reserve, kind) + count(&self.staging, kind) + count(&self.track, kind)
                    == Animal::COPIES
            })
    }

    /// Moves one `kind` token from reserve to staging. No-op when the kind
    /// is not in the reserve or staging is full.
    pub fn stage(&mut self, kind: Animal) -> bool {
        if self.staging_is_full() {
            return false;
        }
        match take(&mut self.reserve, kind) {
            Some(token) => {
                self.staging.push(token);
                true
            }
            None => false,
        }
    }

    /// Moves one staged `kind` token to the track.
    pub fn place(&mut self, kind: Animal) -> bool {
        match take(&mut self.staging, kind) {
            Some(token) => {
                self.track.push(token);
                true
            }
            None => false,
        }
    }

    /// Moves every staged token to the track. Returns how many moved.
    pub fn place_all(&mut self) -> usize {
        let moved = self.staging.len();
        self.track.append(&mut self.staging);
        moved
    }

    /// Moves one `kind` token from the track back to the reserve.
    pub fn recall(&mut self, kind: Animal) -> bool {
        match take(&mut self.track, kind) {
            Some(token) => {
                self.reserve.push(token);
                true
            }
            None => false,
        }
    }
}

fn count(area: &[Animal], kind: Animal) -> usize {
    area.iter().filter(|&&a| a == kind).count()
}

fn take(area: &mut Vec<Animal>, kind: Animal) -> Option<Animal> {
    let index = area.iter().position(|&a| a == kind)?;
    Some(area.remove(index))
}

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token kind. Every player owns two tokens of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Animal {
    Rooster,
    Rabbit,
    Duck,
    Cat,
}

impl Animal {
    pub const ALL: [Animal; 4] = [Animal::Rooster, Animal::Rabbit, Animal::Duck, Animal::Cat];

    /// Copies of each kind a player starts with.
    pub const COPIES: usize = 2;

    /// Die color showing this animal.
    pub fn color(self) -> &'static str {
        match self {
            Animal::Rooster => "red",
            Animal::Rabbit => "blue",
            Animal::Duck => "yellow",
            Animal::Cat => "green",
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Outcome of the six-sided color die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieFace {
    /// Move one staged token of this kind onto the track.
    Animal(Animal),
    /// White face: move every staged token onto the track.
    PlaceBoth,
    /// Black face: take one token from the track back to the reserve.
    RecallOne,
}

impl DieFace {
    pub const ALL: [DieFace; 6] = [
        DieFace::Animal(Animal::Rooster),
        DieFace::Animal(Animal::Rabbit),
        DieFace::Animal(Animal::Duck),
        DieFace::Animal(Animal::Cat),
        DieFace::PlaceBoth,
        DieFace::RecallOne,
    ];

    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> DieFace {
        DieFace::ALL[rng.random_range(0..DieFace::ALL.len())]
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DieFace::Animal(animal) => write!(f, "{} ({})", animal.color(), animal),
            DieFace::PlaceBoth => f.write_str("white (place both)"),
            DieFace::RecallOne => f.write_str("black (take one)"),
        }
    }
}

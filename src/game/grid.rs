use crate::game::direction::Direction;
use crate::{BestGameStrategyError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Probability that a spawned tile is a 2 (otherwise a 4).
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Smallest grid that still has neighbours in both axes.
pub const MIN_GRID_SIZE: usize = 2;

/// Square board of the tile game, stored row-major. `0` is an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<u32>,
}

/// What a slide (compact, merge, compact) did to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideOutcome {
    /// At least one tile changed position during the first compaction.
    pub moved: bool,
    /// Number of merges performed.
    pub merges: u32,
    /// Sum of the merged tile values, i.e. the score gained.
    pub points: u64,
}

impl SlideOutcome {
    pub fn action_performed(&self) -> bool {
        self.moved || self.merges > 0
    }
}

impl Grid {
    pub fn empty(size: usize) -> Result<Self> {
        if size < MIN_GRID_SIZE {
            return Err(BestGameStrategyError::InvalidGridSize(size));
        }
        Ok(Grid {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Builds a grid from explicit rows. Rows must form a square.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self> {
        let size = rows.len();
        if size < MIN_GRID_SIZE || rows.iter().any(|row| row.len() != size) {
            return Err(BestGameStrategyError::InvalidGridSize(size));
        }
        Ok(Grid {
            size,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row * self.size + col] = value;
    }

    pub fn row(&self, row: usize) -> &[u32] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Indices of all empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, &value)| if value == 0 { Some(i) } else { None })
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// True when two horizontally or vertically adjacent cells hold the same value.
    pub fn has_equal_neighbours(&self) -> bool {
        let n = self.size;
        for r in 0..n {
            for c in 0..n {
                let value = self.get(r, c);
                if c + 1 < n && value == self.get(r, c + 1) {
                    return true;
                }
                if r + 1 < n && value == self.get(r + 1, c) {
                    return true;
                }
            }
        }
        false
    }

    /// No empty cell and no equal neighbours. Reachability through a
    /// compaction is not considered.
    pub fn is_game_over(&self) -> bool {
        self.is_full() && !self.has_equal_neighbours()
    }

    /// Cell indices of lane `lane` ordered from the `dir` edge inward.
    fn lane(&self, dir: Direction, lane: usize) -> Vec<usize> {
        let n = self.size;
        match dir {
            Direction::Left => (0..n).map(|c| lane * n + c).collect(),
            Direction::Right => (0..n).rev().map(|c| lane * n + c).collect(),
            Direction::Up => (0..n).map(|r| r * n + lane).collect(),
            Direction::Down => (0..n).rev().map(|r| r * n + lane).collect(),
        }
    }

    /// Slides every tile toward the `dir` edge without merging.
    /// Returns whether any tile moved.
    pub fn compact(&mut self, dir: Direction) -> bool {
        let mut moved = false;
        for lane in 0..self.size {
            let indices = self.lane(dir, lane);
            let values: Vec<u32> = indices
                .iter()
                .map(|&i| self.cells[i])
                .filter(|&v| v != 0)
                .collect();
            for (k, &i) in indices.iter().enumerate() {
                let value = values.get(k).copied().unwrap_or(0);
                if self.cells[i] != value {
                    moved = true;
                    self.cells[i] = value;
                }
            }
        }
        moved
    }

    /// Merges equal neighbours along `dir`, scanning from the `dir` edge.
    ///
    /// The merged value lands on the cell nearer the edge and the other cell
    /// is cleared, so a freshly merged tile cannot merge again this pass.
    /// Returns `(merges, points)`.
    pub fn merge(&mut self, dir: Direction) -> (u32, u64) {
        let mut merges = 0;
        let mut points = 0u64;
        for lane in 0..self.size {
            let indices = self.lane(dir, lane);
            for pair in indices.windows(2) {
                let (near, far) = (pair[0], pair[1]);
                if self.cells[near] != 0 && self.cells[near] == self.cells[far] {
                    self.cells[near] *= 2;
                    self.cells[far] = 0;
                    points += u64::from(self.cells[near]);
                    merges += 1;
                }
            }
        }
        (merges, points)
    }

    /// Compact, merge, compact. No tile is spawned.
    pub fn slide(&mut self, dir: Direction) -> SlideOutcome {
        let moved = self.compact(dir);
        let (merges, points) = self.merge(dir);
        self.compact(dir);
        SlideOutcome {
            moved,
            merges,
            points,
        }
    }

    /// Places a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell.
    /// Returns the `(index, value)` placed, or `None` if the grid is full.
    pub fn spawn_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, u32)> {
        let free = self.empty_cells();
        if free.is_empty() {
            return None;
        }
        let index = free[rng.random_range(0..free.len())];
        let value = if rng.random_bool(SPAWN_TWO_PROBABILITY) {
            2
        } else {
            4
        };
        self.cells[index] = value;
        Some((index, value))
    }
}

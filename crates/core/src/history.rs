//! Bounded trail of visited cells with fuzzy recency lookup.

use arrayvec::ArrayVec;

use crate::fuzzy::Trapezoid;
use crate::grid::Position;

/// Number of past positions retained.
pub const HISTORY_CAPACITY: usize = 15;

/// Recency membership: one-sided ramp from 0 (absent) up to 1 at the newest
/// slot of a full trail.
const RECENCY: Trapezoid = Trapezoid::new_unchecked(
    0.0,
    HISTORY_CAPACITY as f64,
    f64::INFINITY,
    f64::INFINITY,
);

/// FIFO buffer of the last [`HISTORY_CAPACITY`] visited cells.
///
/// Revisits are recorded as separate entries. Lookups take the *first*
/// (oldest) occurrence, so a revisited cell keeps its low recency grade
/// until the old entry is evicted.
#[derive(Clone, Debug, Default)]
pub struct MoveHistory {
    trail: ArrayVec<Position, HISTORY_CAPACITY>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a visited cell, evicting the oldest entry when full.
    pub fn push(&mut self, position: Position) {
        if self.trail.is_full() {
            self.trail.remove(0);
        }
        self.trail.push(position);
    }

    /// Fuzzy recency of `position`: 0 when never visited, rising to 1 for
    /// the newest slot of a full trail.
    ///
    /// The engine divides by `0.1 + recency`, so a grade of 0 means "no
    /// penalty" and a grade near 1 suppresses the direction roughly
    /// elevenfold. Absent cells map to slot value 0 (below the ramp), which
    /// is what makes unvisited neighbors maximally attractive.
    pub fn recency(&self, position: Position) -> f64 {
        let slot = self
            .trail
            .iter()
            .position(|&visited| visited == position)
            .map_or(0, |index| index + 1);
        RECENCY.grade(slot as f64)
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Visited cells, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.trail.iter().copied()
    }
}

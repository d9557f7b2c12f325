//! Obstacle field: a fixed-size boolean grid plus a synthetic border ring.

use crate::grid::Position;
use crate::rng::Pcg32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("cannot scatter {requested} obstacles; only {available} free cells")]
    NotEnoughFreeCells { requested: usize, available: usize },
}

/// Grid of static obstacle cells.
///
/// Cells inside the `width × height` matrix are stored and mutable through
/// [`set_obstacle`](Self::set_obstacle). Every cell immediately outside the
/// matrix on all four sides is treated as a permanent obstacle; that border
/// ring is generated during enumeration and never stored.
///
/// Out-of-matrix access through [`is_obstacle`](Self::is_obstacle) or
/// [`set_obstacle`](Self::set_obstacle) is a programming error and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleField {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl ObstacleField {
    /// Creates an empty field. Dimensions must be nonzero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "field dimensions must be nonzero");
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True if `(x, y)` lies inside the stored matrix. Border cells are
    /// outside and not queryable through [`is_obstacle`](Self::is_obstacle).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Stored state of a cell. Panics outside the matrix.
    pub fn is_obstacle(&self, x: i32, y: i32) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Overwrites the stored state of a cell. Panics outside the matrix.
    pub fn set_obstacle(&mut self, x: i32, y: i32, obstacle: bool) {
        let index = self.index(x, y);
        self.cells[index] = obstacle;
    }

    /// Enumerates every obstacle the decision engine must consider: all
    /// stored obstacle cells in row-major order, then the synthetic border
    /// ring one cell beyond each edge. Restartable and deterministic.
    ///
    /// Downstream code never distinguishes stored from border obstacles.
    pub fn obstacles(&self) -> impl Iterator<Item = Position> + '_ {
        self.stored().chain(self.border())
    }

    fn stored(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width as i32;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, &occupied)| {
                occupied.then(|| Position::new(index as i32 % width, index as i32 / width))
            })
    }

    /// The generated border ring: one cell past every edge coordinate.
    pub fn border(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..width)
            .flat_map(move |x| [Position::new(x, -1), Position::new(x, height)])
            .chain((0..height).flat_map(move |y| [Position::new(-1, y), Position::new(width, y)]))
    }

    /// Scatters `count` obstacles into free, non-origin cells, rejecting
    /// the origin and already-occupied cells. Deterministic for a given
    /// seed.
    pub fn scatter(&mut self, count: usize, seed: u64) -> Result<(), FieldError> {
        let available = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(index, &occupied)| index != 0 && !occupied)
            .count();
        if count > available {
            return Err(FieldError::NotEnoughFreeCells {
                requested: count,
                available,
            });
        }

        let mut rng = Pcg32::new(seed);
        let mut placed = 0;
        while placed < count {
            let x = rng.below(self.width) as i32;
            let y = rng.below(self.height) as i32;
            if x == 0 && y == 0 {
                continue;
            }
            if !self.is_obstacle(x, y) {
                self.set_obstacle(x, y, true);
                placed += 1;
            }
        }
        Ok(())
    }

    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.contains(x, y),
            "cell ({x}, {y}) outside {}x{} field",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

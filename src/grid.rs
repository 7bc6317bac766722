//! The rectangular board that regions are grown on and pieces are placed on.
//!
//! While a puzzle is generated every cell holds `0` (free) or a region label.
//! While it is solved every cell holds `0` or `1`, the latter marking a cell
//! covered by an already placed piece.

use crate::error::{Error, Result};
use rand::Rng;
use std::collections::BTreeSet;

/// Value stored in a single grid cell.
pub type Cell = u32;

/// A width x height array of labelled cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// A grid-sized occupancy pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Mask {
    /// Create a mask with no cell set.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Width of the mask.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the mask.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major view of the cells.
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Return true if cell `(x, y)` is set.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells[to_index(x, y, self.width, self.height)]
    }

    /// Set cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the mask.
    pub fn set(&mut self, x: usize, y: usize) {
        let index = to_index(x, y, self.width, self.height);
        self.cells[index] = true;
    }

    /// Iterate over the `(x, y)` coordinates of all set cells.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(move |(index, _)| (index % width, index / width))
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|set| **set).count()
    }

    /// Row-major index of the first set cell.
    pub fn first_cell(&self) -> Option<usize> {
        self.cells.iter().position(|set| *set)
    }

    /// Return true if no cell is set in both masks.
    pub fn is_disjoint(&self, other: &Mask) -> bool {
        self.cells
            .iter()
            .zip(&other.cells)
            .all(|(a, b)| !(*a && *b))
    }
}

#[inline]
fn to_index(x: usize, y: usize, width: usize, height: usize) -> usize {
    assert!(
        x < width && y < height,
        "Cell ({x}, {y}) is outside the {width}x{height} grid."
    );
    y * width + x
}

impl Grid {
    /// Create a grid with every cell free.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![0; width * height],
        })
    }

    /// Return a grid of the same dimensions with every cell free.
    pub fn cleared(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![0; self.cells.len()],
        }
    }

    /// Width of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Row-major view of the cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Value of cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[to_index(x, y, self.width, self.height)]
    }

    /// Set every listed cell to `label`.
    ///
    /// # Panics
    ///
    /// Panics if any cell lies outside the grid.
    pub fn region_write(&mut self, label: Cell, cells: impl IntoIterator<Item = (usize, usize)>) {
        for (x, y) in cells {
            let index = to_index(x, y, self.width, self.height);
            self.cells[index] = label;
        }
    }

    /// Coordinates of the up to four orthogonal neighbours of `(x, y)`.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let (width, height) = (self.width, self.height);
        [
            x.checked_sub(1).map(|nx| (nx, y)),
            (x + 1 < width).then_some((x + 1, y)),
            y.checked_sub(1).map(|ny| (x, ny)),
            (y + 1 < height).then_some((x, y + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// Return true if no cell is nonzero in both the grid and `mask`.
    ///
    /// # Panics
    ///
    /// Panics if `mask` does not have the grid's dimensions.
    pub fn occupancy_fits(&self, mask: &Mask) -> bool {
        self.check_mask(mask);
        self.cells
            .iter()
            .zip(&mask.cells)
            .all(|(cell, set)| !(*set && *cell != 0))
    }

    /// Add one to every cell set in `mask`.
    ///
    /// # Panics
    ///
    /// Panics if `mask` does not have the grid's dimensions.
    pub fn apply(&mut self, mask: &Mask) {
        self.check_mask(mask);
        for (cell, set) in self.cells.iter_mut().zip(&mask.cells) {
            if *set {
                *cell += 1;
            }
        }
    }

    /// Subtract one from every cell set in `mask`, reverting an earlier
    /// [`Grid::apply`] of the same mask.
    ///
    /// # Panics
    ///
    /// Panics if `mask` does not have the grid's dimensions, or if a cell
    /// covered by `mask` is already free.
    pub fn undo(&mut self, mask: &Mask) {
        self.check_mask(mask);
        for (cell, set) in self.cells.iter_mut().zip(&mask.cells) {
            if *set {
                assert!(*cell > 0, "Undoing a mask that was never applied.");
                *cell -= 1;
            }
        }
    }

    /// Return true if any cell is free.
    pub fn has_free_cell(&self) -> bool {
        self.cells.contains(&0)
    }

    /// Number of free cells.
    pub fn free_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == 0).count()
    }

    /// Pick a free cell uniformly at random.
    ///
    /// Cells are drawn until a free one comes up.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] if no cell is free.
    pub fn random_free_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(usize, usize)> {
        if !self.has_free_cell() {
            return Err(Error::EmptyGrid);
        }
        loop {
            let x = rng.gen_range(0..self.width);
            let y = rng.gen_range(0..self.height);
            if self.get(x, y) == 0 {
                return Ok((x, y));
            }
        }
    }

    /// Mask of the cells holding `label`.
    pub fn region(&self, label: Cell) -> Mask {
        Mask {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(|cell| *cell == label).collect(),
        }
    }

    /// Clear the cells holding `label` and return their mask.
    pub fn take_region(&mut self, label: Cell) -> Mask {
        let mask = self.region(label);
        for (cell, set) in self.cells.iter_mut().zip(&mask.cells) {
            if *set {
                *cell = 0;
            }
        }
        mask
    }

    /// Distinct nonzero values present in the grid, in ascending order.
    pub fn labels(&self) -> BTreeSet<Cell> {
        self.cells.iter().copied().filter(|cell| *cell != 0).collect()
    }

    fn check_mask(&self, mask: &Mask) {
        assert!(
            mask.width == self.width && mask.height == self.height,
            "Mask of {}x{} does not match the {}x{} grid.",
            mask.width,
            mask.height,
            self.width,
            self.height
        );
    }
}

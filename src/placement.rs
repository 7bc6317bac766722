//! Enumeration of every way a piece can be laid on a grid.

use crate::{
    error::Result,
    grid::{Grid, Mask},
    shape::Shape,
    symmetry::{orientations_with, Symmetry},
};

/// Lazy iterator over the grid-sized masks of one piece.
///
/// Orientations are visited in the order [`orientations_with`] returns them.
/// For each orientation the horizontal offset is the outer loop and the
/// vertical offset the inner loop, both ascending. Orientations larger than
/// the grid contribute nothing. Clone the iterator to replay it.
#[derive(Debug, Clone)]
pub struct Placements {
    orientations: Vec<Shape>,
    grid_width: usize,
    grid_height: usize,

    orientation: usize,
    x: usize,
    y: usize,
}

/// Every placement of `shape` on `grid` under rotation and reflection.
pub fn placements(shape: &Shape, grid: &Grid) -> Result<Placements> {
    placements_with(shape, grid, Symmetry::Full)
}

/// Every placement of `shape` on `grid` using the orientations allowed by
/// `symmetry`.
///
/// Only the grid's dimensions are read; its contents are not consulted.
pub fn placements_with(shape: &Shape, grid: &Grid, symmetry: Symmetry) -> Result<Placements> {
    Ok(Placements {
        orientations: orientations_with(shape, symmetry)?,
        grid_width: grid.width(),
        grid_height: grid.height(),

        orientation: 0,
        x: 0,
        y: 0,
    })
}

impl Placements {
    fn next_orientation(&mut self) {
        self.orientation += 1;
        self.x = 0;
        self.y = 0;
    }
}

impl Iterator for Placements {
    type Item = Mask;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let shape = self.orientations.get(self.orientation)?;
            let (width, height) = (shape.width(), shape.height());

            if width > self.grid_width
                || height > self.grid_height
                || self.x > self.grid_width - width
            {
                self.next_orientation();
                continue;
            }

            let mut mask = Mask::empty(self.grid_width, self.grid_height);
            for (sx, sy) in shape.cells() {
                mask.set(self.x + sx, self.y + sy);
            }

            if self.y < self.grid_height - height {
                self.y += 1;
            } else {
                self.y = 0;
                self.x += 1;
            }

            return Some(mask);
        }
    }
}

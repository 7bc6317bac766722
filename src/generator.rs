//! Random puzzle generation by growing labelled regions across a grid.
//!
//! A puzzle is produced in two steps. [`generate`] drops one seed per piece
//! on random free cells and then grows the seeds outwards until every cell
//! belongs to a region, and [`grab_pieces`] cuts each region out of the grid
//! as a [`Shape`]. Because the regions partition the grid, the generated
//! pieces always have at least one tiling.

use crate::{
    error::{Error, Result},
    grid::{Cell, Grid},
    shape::Shape,
    solver::Solver,
};
use log::debug;
use rand::{seq::SliceRandom, Rng};

/// Partition the free cells of `grid` into `num_pieces` labelled regions.
///
/// Labels `1..=num_pieces` are each seeded on a random free cell. Then, until
/// no free cell is left, a random free cell is drawn and takes the label of
/// one of its labelled orthogonal neighbours, chosen uniformly among them
/// (so a label held by several neighbours is proportionally more likely).
/// A drawn cell with no labelled neighbour is left for a later draw.
///
/// # Errors
///
/// Returns [`Error::InvalidPieceCount`] if `num_pieces` is zero or larger
/// than the number of free cells.
pub fn generate<R: Rng + ?Sized>(grid: &mut Grid, num_pieces: usize, rng: &mut R) -> Result<()> {
    let available = grid.free_cell_count();
    if num_pieces == 0 || num_pieces > available {
        return Err(Error::InvalidPieceCount {
            requested: num_pieces,
            available,
        });
    }

    for label in 1..=num_pieces {
        let seed = grid.random_free_cell(rng)?;
        grid.region_write(label as Cell, [seed]);
    }
    debug!(
        "Seeded {} regions on a {}x{} grid.",
        num_pieces,
        grid.width(),
        grid.height()
    );

    let mut free = available - num_pieces;
    let mut draws = 0usize;
    let mut neighbor_labels = Vec::with_capacity(4);
    while free > 0 {
        let (x, y) = grid.random_free_cell(rng)?;
        draws += 1;

        neighbor_labels.clear();
        neighbor_labels.extend(
            grid.neighbors(x, y)
                .map(|(nx, ny)| grid.get(nx, ny))
                .filter(|label| *label != 0),
        );

        if let Some(&label) = neighbor_labels.choose(rng) {
            grid.region_write(label, [(x, y)]);
            free -= 1;
        }
    }
    debug!("Grew regions over the grid in {} draws.", draws);

    Ok(())
}

/// Cut every labelled region out of `grid`, highest label first.
///
/// Each region is cleared from the grid and returned as a trimmed shape, so
/// on success the labelled cells of `grid` are all free again.
///
/// # Errors
///
/// Returns [`Error::ShapeTooLarge`] if a region spans more than
/// [`MAX_SIDE`](crate::shape::MAX_SIDE) cells in either direction. Regions
/// already cut out before the failure stay cleared.
pub fn grab_pieces(grid: &mut Grid) -> Result<Vec<Shape>> {
    let pieces = grid
        .labels()
        .into_iter()
        .rev()
        .map(|label| Shape::try_from(&grid.take_region(label)))
        .collect::<Result<Vec<_>>>()?;
    debug!("Extracted {} pieces.", pieces.len());
    Ok(pieces)
}

/// A generated puzzle: the pieces together with the layout they were cut
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    layout: Grid,
    pieces: Vec<Shape>,
}

impl Puzzle {
    /// Generate a puzzle of `num_pieces` pieces covering a `width` x `height`
    /// grid.
    ///
    /// # Errors
    ///
    /// Fails if the dimensions are zero, the piece count is invalid for the
    /// grid, or a grown region does not fit the shape bounding box.
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        num_pieces: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let mut grid = Grid::new(width, height)?;
        generate(&mut grid, num_pieces, rng)?;
        let layout = grid.clone();
        let pieces = grab_pieces(&mut grid)?;

        Ok(Self { layout, pieces })
    }

    /// The labelled grid the pieces were cut from; piece `i` of
    /// [`Puzzle::pieces`] holds the `i`-th highest label.
    pub fn layout(&self) -> &Grid {
        &self.layout
    }

    /// The pieces, in extraction order.
    pub fn pieces(&self) -> &[Shape] {
        &self.pieces
    }

    /// A solver over an empty grid of the puzzle's dimensions.
    pub fn solver(&self) -> Solver {
        Solver::new(self.layout.cleared())
    }
}

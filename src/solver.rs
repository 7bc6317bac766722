use crate::{
    error::Result,
    grid::{Cell, Grid, Mask},
    placement::placements_with,
    shape::Shape,
    symmetry::{orientation_fingerprints, Symmetry},
};
use log::{debug, trace};

/// Exhaustive backtracking search for every tiling of a grid by a list of
/// pieces.
///
/// Pieces are placed in the order given. At each level every placement of
/// the first remaining piece that does not overlap an occupied cell is
/// applied, the rest of the pieces are searched, and the placement is undone
/// again. There is no pruning beyond the overlap test.
#[derive(Debug)]
pub struct Solver {
    grid: Grid,
    symmetry: Symmetry,
    distinct_tilings: bool,

    // Masks currently applied to the grid, one per placed piece
    placed: Vec<Mask>,
}

/// A complete tiling, borrowed from the solver at the moment it is found.
#[derive(Debug, Clone, Copy)]
pub struct Solution<'s> {
    grid: &'s Grid,
    placements: &'s [Mask],
}

impl<'s> Solution<'s> {
    /// The solver's grid, with every cell covered exactly once.
    pub fn grid(&self) -> &'s Grid {
        self.grid
    }

    /// The mask chosen for each piece, in piece order.
    pub fn placements(&self) -> &'s [Mask] {
        self.placements
    }

    /// A grid where the cells of piece `i` are labelled `i + 1`.
    pub fn labeled_grid(&self) -> Grid {
        let mut labeled = self.grid.cleared();
        for (index, mask) in self.placements.iter().enumerate() {
            labeled.region_write(index as Cell + 1, mask.cells());
        }
        labeled
    }
}

struct Search<'f> {
    // For each piece, the index of the first piece it is interchangeable with
    classes: Vec<usize>,
    found: usize,
    on_solution: &'f mut dyn FnMut(&Solution<'_>),
}

impl Solver {
    /// Create a solver that places pieces onto `grid`.
    ///
    /// Occupied cells of `grid` (nonzero values) are treated as already
    /// covered.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            symmetry: Symmetry::default(),
            distinct_tilings: true,
            placed: Vec::new(),
        }
    }

    /// Choose which orientations pieces may take.
    pub fn symmetry(mut self, symmetry: Symmetry) -> Self {
        self.symmetry = symmetry;
        self
    }

    /// Choose whether tilings that differ only by swapping interchangeable
    /// pieces are reported once (`true`, the default) or once per
    /// assignment of pieces to placements (`false`).
    ///
    /// This only filters which complete tilings are reported; the search
    /// itself visits the same placements either way.
    pub fn distinct_tilings(mut self, distinct: bool) -> Self {
        self.distinct_tilings = distinct;
        self
    }

    /// The grid the solver places pieces on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the solver, returning its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Search for every tiling of the free cells by `pieces`, calling
    /// `on_solution` for each one and returning how many were found.
    ///
    /// When this returns the grid is exactly as it was before the call.
    pub fn search<F>(&mut self, pieces: &[Shape], mut on_solution: F) -> Result<usize>
    where
        F: FnMut(&Solution<'_>),
    {
        let classes = self.interchangeable_classes(pieces)?;
        debug!(
            "Searching {} pieces on a {}x{} grid with {:?} symmetry.",
            pieces.len(),
            self.grid.width(),
            self.grid.height(),
            self.symmetry
        );

        let mut search = Search {
            classes,
            found: 0,
            on_solution: &mut on_solution,
        };
        let outcome = self.place(pieces, &mut search);
        debug_assert!(self.placed.is_empty());
        outcome?;

        debug!("Search finished with {} solutions.", search.found);
        Ok(search.found)
    }

    /// Count every tiling of the free cells by `pieces`.
    pub fn count_solutions(&mut self, pieces: &[Shape]) -> Result<usize> {
        self.search(pieces, |_| {})
    }

    /// Collect every tiling as a grid labelled by piece number.
    pub fn all_solutions(&mut self, pieces: &[Shape]) -> Result<Vec<Grid>> {
        let mut solutions = Vec::new();
        self.search(pieces, |solution| solutions.push(solution.labeled_grid()))?;
        Ok(solutions)
    }

    fn place(&mut self, remaining: &[Shape], search: &mut Search<'_>) -> Result<()> {
        let Some((first, rest)) = remaining.split_first() else {
            if self.is_canonical(&search.classes) {
                search.found += 1;
                trace!("Found solution #{}.", search.found);
                (search.on_solution)(&Solution {
                    grid: &self.grid,
                    placements: &self.placed,
                });
            }
            return Ok(());
        };

        for mask in placements_with(first, &self.grid, self.symmetry)? {
            if !self.grid.occupancy_fits(&mask) {
                continue;
            }

            self.grid.apply(&mask);
            self.placed.push(mask);
            let outcome = self.place(rest, search);
            if let Some(mask) = self.placed.pop() {
                self.grid.undo(&mask);
            }
            outcome?;
        }

        Ok(())
    }

    /// Group pieces that have the same set of orientations. When distinct
    /// tilings are not requested every piece is its own class.
    fn interchangeable_classes(&self, pieces: &[Shape]) -> Result<Vec<usize>> {
        if !self.distinct_tilings {
            return Ok((0..pieces.len()).collect());
        }

        let fingerprints = pieces
            .iter()
            .map(|piece| orientation_fingerprints(piece, self.symmetry))
            .collect::<Result<Vec<_>>>()?;

        Ok(fingerprints
            .iter()
            .map(|own| {
                fingerprints
                    .iter()
                    .position(|other| other == own)
                    .unwrap_or_default()
            })
            .collect())
    }

    /// A tiling is reported only when interchangeable pieces appear in
    /// increasing order of the first cell they cover.
    fn is_canonical(&self, classes: &[usize]) -> bool {
        classes.iter().enumerate().all(|(index, class)| {
            classes[..index]
                .iter()
                .rposition(|other| other == class)
                .map_or(true, |previous| {
                    self.placed[previous].first_cell() < self.placed[index].first_cell()
                })
        })
    }
}

#![deny(missing_docs)]

//! Generation and exhaustive solving of jigsaw-style
//! [polyomino tiling](https://en.wikipedia.org/wiki/Polyomino#Tiling_with_polyominoes)
//! puzzles.
//!
//! A puzzle is made by growing a fixed number of random regions across a
//! rectangular [`Grid`] until it is fully partitioned, then cutting each
//! region out as a [`Shape`]. The [`Solver`] then finds every way the pieces,
//! rotated and mirrored, tile the grid again.
//!
//! ```
//! use jigsaw_tiling::Puzzle;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let puzzle = Puzzle::generate(4, 4, 4, &mut rng).unwrap();
//! let solutions = puzzle.solver().count_solutions(puzzle.pieces()).unwrap();
//! assert!(solutions >= 1);
//! ```

pub mod error;
pub mod generator;
pub mod grid;
pub mod placement;
mod render;
pub mod shape;
pub(crate) mod solver;
pub mod symmetry;

pub use error::{Error, Result};
pub use generator::{generate, grab_pieces, Puzzle};
pub use grid::{Cell, Grid, Mask};
pub use placement::{placements, placements_with, Placements};
pub use shape::{trim, Fingerprint, Shape, MAX_SIDE};
pub use solver::{Solution, Solver};
pub use symmetry::{orientations, orientations_with, Symmetry};

//! Errors raised while building shapes, generating puzzles or sampling grids.

/// Failure of a shape, grid or generation operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The trimmed pattern does not fit inside the canonical bounding box.
    #[error("shape of {width}x{height} exceeds the 8x8 bounding box")]
    ShapeTooLarge {
        /// Width of the trimmed pattern.
        width: usize,
        /// Height of the trimmed pattern.
        height: usize,
    },
    /// The pattern has no occupied cell.
    #[error("shape pattern has no occupied cells")]
    EmptyShape,
    /// A free cell was requested from a grid that has none.
    #[error("no free cell left in the grid")]
    EmptyGrid,
    /// The requested number of pieces cannot be seeded in the grid.
    #[error("cannot seed {requested} pieces in a grid of {available} cells")]
    InvalidPieceCount {
        /// Number of pieces asked for.
        requested: usize,
        /// Number of cells in the grid.
        available: usize,
    },
    /// A grid dimension was zero.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

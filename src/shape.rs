//! Puzzle piece shapes.
//!
//! A [`Shape`] is a trimmed binary pattern, stored row-major with only the
//! width kept explicitly: the cell in column `x` of row `y` lives at index
//! `y * width + x`. Its identity is the [`Fingerprint`] obtained by embedding
//! the pattern in the top-left corner of a [`MAX_SIDE`] x [`MAX_SIDE`] box.

use crate::{
    grid::Mask,
    error::{Error, Result},
};
use std::hash::{Hash, Hasher};

/// Largest width or height a trimmed shape may have.
pub const MAX_SIDE: usize = 8;

/// Canonical identity of a shape in one orientation.
///
/// Bit `63 - (y * 8 + x)` is set when cell `(x, y)` of the shape is filled.
/// The value does not depend on where the pattern sat before trimming, but
/// rotated or mirrored copies of a shape have different fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(pub u64);

/// Strip empty rows and columns from every edge of a row-major pattern.
///
/// Returns the new width and pattern. A pattern without any filled cell is
/// returned unchanged.
///
/// # Panics
///
/// Panics if `width` is zero or the pattern length is not a multiple of it.
pub fn trim(width: usize, mask: &[u8]) -> (usize, Vec<u8>) {
    assert!(width != 0, "Width of pattern must be non-zero.");
    assert!(
        mask.len() % width == 0,
        "Pattern with incorrect length - incorrect number of elements supplied."
    );

    let height = mask.len() / width;
    if mask.iter().all(|el| *el == 0) {
        return (width, mask.to_vec());
    }

    let row_empty = |r: usize| mask[r * width..(r + 1) * width].iter().all(|el| *el == 0);
    let column_empty = |c: usize| mask.iter().skip(c).step_by(width).all(|el| *el == 0);

    let (mut r1, mut r2) = (0usize, height - 1);
    let (mut c1, mut c2) = (0usize, width - 1);

    while row_empty(r1) {
        r1 += 1;
    }
    while r2 > r1 && row_empty(r2) {
        r2 -= 1;
    }
    while column_empty(c1) {
        c1 += 1;
    }
    while c2 > c1 && column_empty(c2) {
        c2 -= 1;
    }

    let trimmed_width = c2 - c1 + 1;
    let trimmed_height = r2 - r1 + 1;

    let mut trimmed = Vec::with_capacity(trimmed_width * trimmed_height);
    for r in r1..=r2 {
        trimmed.extend(mask[r * width + c1..=r * width + c2].iter().map(|el| u8::from(*el != 0)));
    }

    (trimmed_width, trimmed)
}

/// A single puzzle piece in one orientation.
///
/// Two shapes compare equal exactly when their fingerprints match.
#[derive(Debug, Clone)]
pub struct Shape {
    width: usize,
    mask: Vec<u8>,
}

impl Shape {
    /// Build a shape from a row-major pattern of the given width.
    ///
    /// Empty rows and columns on the edges are trimmed first, so the stored
    /// width and pattern may differ from the arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyShape`] if no cell is filled and
    /// [`Error::ShapeTooLarge`] if the trimmed pattern is wider or taller
    /// than [`MAX_SIDE`].
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`trim`].
    pub fn new(width: usize, mask: Vec<u8>) -> Result<Self> {
        if mask.iter().all(|el| *el == 0) {
            return Err(Error::EmptyShape);
        }

        let (width, mask) = trim(width, &mask);
        let height = mask.len() / width;
        if width > MAX_SIDE || height > MAX_SIDE {
            return Err(Error::ShapeTooLarge { width, height });
        }

        Ok(Self { width, mask })
    }

    /// Width of the shape.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the shape.
    pub fn height(&self) -> usize {
        self.mask.len() / self.width
    }

    /// The trimmed row-major pattern, one byte per cell.
    pub fn mask(&self) -> &[u8] {
        &self.mask
    }

    /// Number of filled cells.
    pub fn cell_count(&self) -> usize {
        self.mask.iter().filter(|el| **el != 0).count()
    }

    /// Iterate over the `(x, y)` coordinates of all filled cells.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, el)| **el != 0)
            .map(move |(index, _)| (index % width, index / width))
    }

    /// Compute the canonical fingerprint of this orientation.
    pub fn fingerprint(&self) -> Fingerprint {
        let width = self.width;
        let height = self.height();
        let mut bits = 0u64;
        for y in 0..MAX_SIDE {
            for x in 0..MAX_SIDE {
                let filled = x < width && y < height && self.mask[y * width + x] != 0;
                bits = (bits << 1) | u64::from(filled);
            }
        }
        Fingerprint(bits)
    }

    /// Return this shape rotated a quarter turn clockwise.
    pub fn rotate90(&self) -> Result<Self> {
        let cols = self.width();
        let rows = self.height();
        let mut rotated = Vec::with_capacity(self.mask.len());

        for c in 0..cols {
            for r in (0..rows).rev() {
                rotated.push(self.mask[r * cols + c]);
            }
        }
        Self::new(rows, rotated)
    }

    /// Return this shape mirrored top to bottom.
    pub fn reflect(&self) -> Result<Self> {
        let width = self.width();
        let reflected = self.mask.chunks(width).rev().flatten().copied().collect();
        Self::new(width, reflected)
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint() == other.fingerprint()
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint().hash(state);
    }
}

impl<const W: usize, const H: usize> TryFrom<[[u8; W]; H]> for Shape {
    type Error = Error;

    fn try_from(arr: [[u8; W]; H]) -> Result<Self> {
        let mut mask = Vec::with_capacity(W * H);

        for row in arr {
            mask.extend_from_slice(&row);
        }

        Self::new(W, mask)
    }
}

impl TryFrom<&Mask> for Shape {
    type Error = Error;

    fn try_from(mask: &Mask) -> Result<Self> {
        let pattern = mask.as_slice().iter().map(|cell| u8::from(*cell)).collect();
        Self::new(mask.width(), pattern)
    }
}

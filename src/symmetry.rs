//! Orientations of a shape under rotation and reflection.

use crate::{
    error::Result,
    shape::{Fingerprint, Shape},
};
use std::collections::HashSet;

/// Group of transformations a piece may undergo when it is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Symmetry {
    /// Pieces are placed exactly as given.
    Fixed,
    /// Pieces may be rotated by quarter turns.
    Rotations,
    /// Pieces may be rotated and mirrored (the dihedral group of order 8).
    #[default]
    Full,
}

/// Every distinct orientation of `shape` under rotation and reflection.
///
/// Equivalent to [`orientations_with`] using [`Symmetry::Full`].
pub fn orientations(shape: &Shape) -> Result<Vec<Shape>> {
    orientations_with(shape, Symmetry::Full)
}

/// Every orientation of `shape` reachable through `symmetry`, with
/// duplicates collapsed by fingerprint.
///
/// The shape is rotated and recorded four times, then, for
/// [`Symmetry::Full`], mirrored once and rotated and recorded four more
/// times. Orientations are returned in the order they were first recorded.
pub fn orientations_with(shape: &Shape, symmetry: Symmetry) -> Result<Vec<Shape>> {
    let mut seen = HashSet::new();
    let mut orientations = Vec::with_capacity(8);

    let parities = match symmetry {
        Symmetry::Fixed => return Ok(vec![shape.clone()]),
        Symmetry::Rotations => 1,
        Symmetry::Full => 2,
    };

    let mut current = shape.clone();
    for parity in 0..parities {
        if parity == 1 {
            current = current.reflect()?;
        }
        for _ in 0..4 {
            current = current.rotate90()?;
            if seen.insert(current.fingerprint()) {
                orientations.push(current.clone());
            }
        }
    }

    Ok(orientations)
}

/// Sorted fingerprints of the orientations of `shape` under `symmetry`.
///
/// Two shapes are interchangeable as puzzle pieces exactly when these lists
/// are equal.
pub fn orientation_fingerprints(shape: &Shape, symmetry: Symmetry) -> Result<Vec<Fingerprint>> {
    let mut fingerprints: Vec<_> = orientations_with(shape, symmetry)?
        .iter()
        .map(Shape::fingerprint)
        .collect();
    fingerprints.sort();
    Ok(fingerprints)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape<const W: usize, const H: usize>(arr: [[u8; W]; H]) -> Shape {
        Shape::try_from(arr).unwrap()
    }

    fn fingerprint_set(shapes: &[Shape]) -> HashSet<Fingerprint> {
        shapes.iter().map(Shape::fingerprint).collect()
    }

    #[test]
    fn rotations_of_l_shape() {
        let s = shape([[1, 0, 0], [1, 1, 1]]);
        let rotations = orientations_with(&s, Symmetry::Rotations).unwrap();
        assert_eq!(
            rotations,
            vec![
                shape([[1, 1], [1, 0], [1, 0]]),
                shape([[1, 1, 1], [0, 0, 1]]),
                shape([[0, 1], [0, 1], [1, 1]]),
                s.clone(),
            ]
        );
    }

    #[test]
    fn full_symmetry_of_l_shape() {
        let s = shape([[1, 0, 0], [1, 1, 1]]);
        let all = orientations(&s).unwrap();
        assert_eq!(all.len(), 8);
        let expected: HashSet<_> = [
            shape([[1, 0, 0], [1, 1, 1]]),
            shape([[1, 1], [1, 0], [1, 0]]),
            shape([[1, 1, 1], [0, 0, 1]]),
            shape([[0, 1], [0, 1], [1, 1]]),
            shape([[1, 1, 1], [1, 0, 0]]),
            shape([[1, 0], [1, 0], [1, 1]]),
            shape([[0, 0, 1], [1, 1, 1]]),
            shape([[1, 1], [0, 1], [0, 1]]),
        ]
        .into_iter()
        .collect();
        assert_eq!(all.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn fixed_keeps_single_orientation() {
        let s = shape([[1, 0, 0], [1, 1, 1]]);
        assert_eq!(orientations_with(&s, Symmetry::Fixed).unwrap(), vec![s]);
    }

    #[test]
    fn orientation_counts() {
        assert_eq!(orientations(&shape([[1]])).unwrap().len(), 1);
        assert_eq!(orientations(&shape([[1, 1], [1, 1]])).unwrap().len(), 1);
        assert_eq!(orientations(&shape([[1, 1, 1, 1]])).unwrap().len(), 2);
        assert_eq!(orientations(&shape([[1], [1], [1], [1]])).unwrap().len(), 2);
        assert_eq!(orientations(&shape([[1, 1, 1], [0, 1, 0]])).unwrap().len(), 4);
        assert_eq!(orientations(&shape([[0, 1, 1], [1, 1, 0]])).unwrap().len(), 4);
        assert_eq!(
            orientations(&shape([[0, 1, 0], [1, 1, 1], [0, 1, 0]]))
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn orientation_set_is_closed() {
        let shapes = [
            shape([[1, 0, 0], [1, 1, 1]]),
            shape([[0, 1, 1], [1, 1, 0], [0, 1, 0]]),
            shape([[1, 1, 1, 1]]),
            shape([[1, 1, 0], [0, 1, 1]]),
        ];
        for s in shapes {
            let base = orientations(&s).unwrap();
            assert!((1..=8).contains(&base.len()));
            let expected = fingerprint_set(&base);
            for member in &base {
                assert_eq!(fingerprint_set(&orientations(member).unwrap()), expected);
            }
        }
    }

    #[test]
    fn mirrored_pieces_share_fingerprints() {
        let s = shape([[0, 1, 1], [1, 1, 0]]);
        let z = shape([[1, 1, 0], [0, 1, 1]]);
        assert_eq!(
            orientation_fingerprints(&s, Symmetry::Full).unwrap(),
            orientation_fingerprints(&z, Symmetry::Full).unwrap()
        );
        assert_ne!(
            orientation_fingerprints(&s, Symmetry::Rotations).unwrap(),
            orientation_fingerprints(&z, Symmetry::Rotations).unwrap()
        );
    }
}

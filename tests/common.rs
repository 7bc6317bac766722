use jigsaw_tiling::{Grid, Mask, Puzzle, Shape};
use rand::{rngs::StdRng, SeedableRng};

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Generate a puzzle from a fixed seed.
///
/// # Panics
///  - If generation fails, which only happens when a region outgrows the
///    shape bounding box.
#[allow(dead_code)]
pub fn seeded_puzzle(width: usize, height: usize, num_pieces: usize, seed: u64) -> Puzzle {
    let mut rng = StdRng::seed_from_u64(seed);
    Puzzle::generate(width, height, num_pieces, &mut rng).unwrap_or_else(|err| {
        panic!("Generating {width}x{height} with {num_pieces} pieces from seed [{seed}] failed: {err}")
    })
}

/// Build a shape from rows of `#` (filled) and `.` (empty) characters.
#[allow(dead_code)]
pub fn parse_shape(rows: &[&str]) -> Shape {
    let width = rows[0].len();
    let mask = rows
        .iter()
        .flat_map(|row| {
            assert_eq!(row.len(), width, "Rows must all have the same length.");
            row.chars().map(|c| u8::from(c == '#'))
        })
        .collect();
    Shape::new(width, mask).unwrap()
}

/// Assert that `masks` are pairwise disjoint and together cover every cell
/// of `grid`.
#[allow(dead_code)]
pub fn assert_partition(grid: &Grid, masks: &[Mask]) {
    for (i, a) in masks.iter().enumerate() {
        for b in &masks[i + 1..] {
            assert!(a.is_disjoint(b), "Masks overlap: {a:?} {b:?}");
        }
    }
    let covered: usize = masks.iter().map(Mask::count).sum();
    assert_eq!(covered, grid.area());
}

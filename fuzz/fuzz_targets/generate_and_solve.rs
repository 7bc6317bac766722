#![no_main]

use jigsaw_tiling::{Error, Puzzle};
use libfuzzer_sys::fuzz_target;
use rand::{rngs::StdRng, SeedableRng};

fuzz_target!(|input: (u64, u8, u8, u8)| {
    let (seed, width, height, num_pieces) = input;
    // Keep the search small enough to finish.
    let (width, height) = (usize::from(width % 5), usize::from(height % 5));
    let num_pieces = usize::from(num_pieces % 6);

    let mut rng = StdRng::seed_from_u64(seed);
    match Puzzle::generate(width, height, num_pieces, &mut rng) {
        Ok(puzzle) => {
            let solutions = puzzle
                .solver()
                .count_solutions(puzzle.pieces())
                .unwrap();
            assert!(solutions >= 1);
        }
        Err(Error::InvalidDimensions { .. } | Error::InvalidPieceCount { .. }) => {}
        Err(err) => panic!("unexpected failure: {err}"),
    }
});

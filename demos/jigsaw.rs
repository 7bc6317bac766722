//! Generate a random jigsaw puzzle and print every way to solve it.
//! Usage:
//!
//! ```bash
//! cargo run --release --example jigsaw [SIZE] [SEED]
//! ```
//!
//! `SIZE` is the side of the square board and the number of pieces
//! (default 6). `SEED` makes the puzzle reproducible.

use jigsaw_tiling::Puzzle;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, name: &str) -> Option<T> {
    let arg = args.get(index)?;
    match arg.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("invalid {name} [{arg}]");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let size: usize = parse_arg(&args, 1, "size").unwrap_or(6);
    let seed: u64 = parse_arg(&args, 2, "seed").unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("Generating a {}x{} puzzle from seed [{}].", size, size, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let puzzle = match Puzzle::generate(size, size, size, &mut rng) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("could not generate puzzle: {err}");
            std::process::exit(1);
        }
    };
    println!("{}", puzzle.layout());

    let mut solver = puzzle.solver();
    let mut index = 0;
    let result = solver.search(puzzle.pieces(), |solution| {
        index += 1;
        println!("Solution #{index}: \n{}\n", solution.labeled_grid());
    });
    if let Err(err) = result {
        eprintln!("search failed: {err}");
        std::process::exit(1);
    }
}

//! closest_word: nearest lexicon entries for each query line on stdin.

use std::io::{self, BufWriter};
use std::process;

use clap::Parser;

use lexdist::cli::args::ClosestWordArgs;
use lexdist::cli::commands::run_closest_word;
use lexdist::cli::logging;

fn main() {
    let args = ClosestWordArgs::parse();
    logging::init(args.verbosity.verbosity());

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_closest_word(&args, stdin.lock(), BufWriter::new(stdout.lock())) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

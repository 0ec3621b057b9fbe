//! estimate_weights: edit-operation weights from aligned pairs on stdin.
//!
//! Usage: paste source.txt target.txt | estimate_weights > weights.tsv

use std::io::{self, BufWriter};
use std::process;

use clap::Parser;

use lexdist::cli::args::EstimateWeightsArgs;
use lexdist::cli::commands::run_estimate_weights;
use lexdist::cli::logging;

fn main() {
    let args = EstimateWeightsArgs::parse();
    logging::init(args.verbosity.verbosity());

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_estimate_weights(&args, stdin.lock(), BufWriter::new(stdout.lock())) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

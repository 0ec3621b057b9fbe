//! editdist: edit distance between tab-separated string pairs on stdin.

use std::io::{self, BufWriter};
use std::process;

use clap::Parser;

use lexdist::cli::args::EditDistArgs;
use lexdist::cli::commands::run_editdist;
use lexdist::cli::logging;

fn main() {
    let args = EditDistArgs::parse();
    logging::init(args.verbosity.verbosity());

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_editdist(&args, stdin.lock(), BufWriter::new(stdout.lock())) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

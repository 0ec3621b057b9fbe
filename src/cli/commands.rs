//! Command implementations for the lexdist tools.
//!
//! Each command reads from a `BufRead` and writes to a `Write`, so the
//! binaries pass stdin/stdout and tests pass in-memory buffers.

use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::cli::args::{ClosestWordArgs, EditDistArgs, EstimateWeightsArgs};
use crate::cli::output::{write_distance, write_neighbors, write_weights};
use crate::cost::CostModel;
use crate::error::Result;
use crate::estimate::WeightEstimator;
use crate::levenshtein::distance;
use crate::search::NearestNeighborSearch;
use crate::symbol::{Symbol, Word};
use crate::text::{decode, load_lines, split_pair, split_words, PROGRESS_INTERVAL};

/// Print the edit distance of every tab-separated pair read from `input`.
pub fn run_editdist<R: BufRead, W: Write>(args: &EditDistArgs, input: R, mut output: W) -> Result<()> {
    let defaults = args.costs.defaults()?;
    if args.words {
        let mut costs = CostModel::<Word>::new(defaults);
        if let Some(path) = &args.costs_file {
            costs.load_from_file(path)?;
        }
        print_distances(&costs, split_words, input, &mut output)?;
    } else {
        let mut costs = CostModel::<char>::new(defaults);
        if let Some(path) = &args.costs_file {
            costs.load_from_file(path)?;
        }
        print_distances(&costs, decode, input, &mut output)?;
    }
    output.flush()?;
    Ok(())
}

fn print_distances<S, R, W>(
    costs: &CostModel<S>,
    tokenize: fn(&str) -> Vec<S>,
    input: R,
    output: &mut W,
) -> Result<()>
where
    S: Symbol,
    R: BufRead,
    W: Write,
{
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let (source, target) = split_pair(&line, idx + 1)?;
        let d = distance(&tokenize(source), &tokenize(target), costs);
        write_distance(output, d)?;
    }
    Ok(())
}

/// Print the closest lexicon entries for every query line read from `input`.
pub fn run_closest_word<R: BufRead, W: Write>(
    args: &ClosestWordArgs,
    input: R,
    mut output: W,
) -> Result<()> {
    let config = args.search_config();
    config.validate()?;
    let costs = CostModel::<char>::from_file(args.costs.defaults()?, &args.costs_file)?;

    info!("Loading lexicon from {}...", args.lexicon_file.display());
    let lexicon: Vec<Vec<char>> = load_lines(&args.lexicon_file)?
        .iter()
        .map(|line| decode(line))
        .collect();
    info!("Loaded {} lexicon entries.", lexicon.len());
    if lexicon.is_empty() {
        warn!("lexicon {} is empty, no neighbours will be printed", args.lexicon_file.display());
    }

    let search = NearestNeighborSearch::new(&lexicon, &costs, config)?;

    info!("Processing input...");
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let query = decode(&line);
        let neighbors = search.find_closest(&query);
        if neighbors.is_empty() && !lexicon.is_empty() {
            warn!("no lexicon entry within the length bound of {line:?}");
        }
        write_neighbors(&mut output, &line, &neighbors, args.output_format)?;
        if (idx + 1) % PROGRESS_INTERVAL == 0 {
            debug!("processed {} queries", idx + 1);
        }
    }
    output.flush()?;
    info!("Done");
    Ok(())
}

/// Tally edits over the aligned pairs read from `input` and print the
/// estimated cost table.
pub fn run_estimate_weights<R: BufRead, W: Write>(
    args: &EstimateWeightsArgs,
    input: R,
    mut output: W,
) -> Result<()> {
    if args.words {
        estimate(args, split_words, input, &mut output)?;
    } else {
        estimate(args, decode, input, &mut output)?;
    }
    output.flush()?;
    Ok(())
}

fn estimate<S, R, W>(
    args: &EstimateWeightsArgs,
    tokenize: fn(&str) -> Vec<S>,
    input: R,
    output: &mut W,
) -> Result<()>
where
    S: Symbol,
    R: BufRead,
    W: Write,
{
    let mut estimator = WeightEstimator::<S>::new(args.backtrack());
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let (source, target) = split_pair(&line, idx + 1)?;
        estimator.observe(&tokenize(source), &tokenize(target));
        if (idx + 1) % PROGRESS_INTERVAL == 0 {
            debug!("aligned {} pairs", idx + 1);
        }
    }
    info!(
        "tallied {} edits ({} distinct) over {} pairs",
        estimator.total_edits(),
        estimator.distinct_edits(),
        estimator.pairs()
    );
    write_weights(output, &estimator.weights(args.formula), args.output_format)
}

//! Command line argument parsing for the lexdist tools using clap.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::cost::CostDefaults;
use crate::error::Result;
use crate::estimate::WeightFormula;
use crate::levenshtein::Backtrack;
use crate::search::SearchConfig;

/// Verbosity flags shared by every tool.
#[derive(Args, Debug, Clone, Default)]
pub struct VerbosityArgs {
    /// Verbosity level (-v progress, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl VerbosityArgs {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2=info, 3+=debug).
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Default operation costs, overridable per symbol by a cost table.
#[derive(Args, Debug, Clone)]
pub struct CostArgs {
    /// Default cost of insertion
    #[arg(short = 'i', long = "insertion-cost", value_name = "COST", default_value_t = 1.0,
          allow_negative_numbers = true)]
    pub insertion: f32,

    /// Default cost of deletion
    #[arg(short = 'd', long = "deletion-cost", value_name = "COST", default_value_t = 1.0,
          allow_negative_numbers = true)]
    pub deletion: f32,

    /// Default cost of substitution
    #[arg(short = 's', long = "substitution-cost", value_name = "COST", default_value_t = 1.0,
          allow_negative_numbers = true)]
    pub substitution: f32,
}

impl Default for CostArgs {
    fn default() -> Self {
        let defaults = CostDefaults::default();
        CostArgs {
            insertion: defaults.insertion,
            deletion: defaults.deletion,
            substitution: defaults.substitution,
        }
    }
}

impl CostArgs {
    /// Validate the flags into cost defaults.
    pub fn defaults(&self) -> Result<CostDefaults> {
        CostDefaults::new(self.insertion, self.deletion, self.substitution)
    }
}

/// Output format for tools that emit structured results.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated text
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

/// Calculate edit distance between tab-delimited strings read from standard
/// input (UTF-8 encoding is assumed).
#[derive(Parser, Debug, Clone)]
#[command(name = "editdist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct EditDistArgs {
    /// Calculate the distance on words
    #[arg(short, long)]
    pub words: bool,

    /// Read operation costs from file
    #[arg(short = 'c', long = "costs", value_name = "FILE")]
    pub costs_file: Option<PathBuf>,

    #[command(flatten)]
    pub costs: CostArgs,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}

/// Given a table of edit costs and a lexicon, print the closest lexicon
/// entries for each line read from standard input.
#[derive(Parser, Debug, Clone)]
#[command(name = "closest_word")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct ClosestWordArgs {
    /// Number of closest entries to print per query
    #[arg(short = 'n', long = "closest", value_name = "N", default_value_t = 1)]
    pub closest: usize,

    /// Skip lexicon entries whose length differs by more than this (0 disables)
    #[arg(short = 'l', long = "max-length-diff", value_name = "N", default_value_t = 0)]
    pub max_length_diff: usize,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(short = 'c', long = "cores", value_name = "N")]
    pub cores: Option<usize>,

    #[command(flatten)]
    pub costs: CostArgs,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "plain")]
    pub output_format: OutputFormat,

    /// Cost table file
    #[arg(value_name = "COSTS")]
    pub costs_file: PathBuf,

    /// Lexicon file, one entry per line
    #[arg(value_name = "LEXICON")]
    pub lexicon_file: PathBuf,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}

impl ClosestWordArgs {
    /// Search configuration described by these flags.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            k: self.closest,
            max_length_diff: (self.max_length_diff > 0).then_some(self.max_length_diff),
            threads: self.cores,
        }
    }
}

/// Estimate weights of edit operations from tab-delimited source/target pairs
/// read from standard input.
#[derive(Parser, Debug, Clone)]
#[command(name = "estimate_weights")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct EstimateWeightsArgs {
    /// Align words instead of characters
    #[arg(short, long)]
    pub words: bool,

    /// Also tally insertions and deletions left on the alignment border
    #[arg(long)]
    pub drain_borders: bool,

    /// How counts are turned into weights
    #[arg(long, value_enum, default_value_t = WeightFormula::InverseCount)]
    pub formula: WeightFormula,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "plain")]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}

impl EstimateWeightsArgs {
    pub fn backtrack(&self) -> Backtrack {
        if self.drain_borders {
            Backtrack::DrainBorder
        } else {
            Backtrack::StopAtBorder
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editdist_args() {
        let args = EditDistArgs::try_parse_from([
            "editdist", "-w", "-c", "/tmp/costs.tsv", "-i", "0.5", "-s", "2",
        ])
        .unwrap();
        assert!(args.words);
        assert_eq!(args.costs_file, Some(PathBuf::from("/tmp/costs.tsv")));
        let defaults = args.costs.defaults().unwrap();
        assert_eq!(defaults.insertion, 0.5);
        assert_eq!(defaults.deletion, 1.0);
        assert_eq!(defaults.substitution, 2.0);
    }

    #[test]
    fn test_negative_cost_rejected() {
        let args = EditDistArgs::try_parse_from(["editdist", "-d", "-1"]).unwrap();
        assert_eq!(args.costs.deletion, -1.0);
        assert!(args.costs.defaults().is_err());
    }

    #[test]
    fn test_closest_word_args() {
        let args = ClosestWordArgs::try_parse_from([
            "closest_word", "-n", "3", "-l", "2", "-c", "4", "costs.tsv", "lexicon.txt",
        ])
        .unwrap();
        assert_eq!(args.closest, 3);
        assert_eq!(args.costs_file, PathBuf::from("costs.tsv"));
        assert_eq!(args.lexicon_file, PathBuf::from("lexicon.txt"));

        let config = args.search_config();
        assert_eq!(config.k, 3);
        assert_eq!(config.max_length_diff, Some(2));
        assert_eq!(config.threads, Some(4));
    }

    #[test]
    fn test_closest_word_defaults() {
        let args =
            ClosestWordArgs::try_parse_from(["closest_word", "costs.tsv", "lexicon.txt"]).unwrap();
        let config = args.search_config();
        assert_eq!(config.k, 1);
        assert_eq!(config.max_length_diff, None);
        assert_eq!(config.threads, None);
        assert_eq!(args.output_format, OutputFormat::Plain);
    }

    #[test]
    fn test_closest_word_requires_files() {
        assert!(ClosestWordArgs::try_parse_from(["closest_word", "costs.tsv"]).is_err());

        let args = ClosestWordArgs::try_parse_from(["closest_word", "-n", "0", "a", "b"]).unwrap();
        assert!(args.search_config().validate().is_err());
    }

    #[test]
    fn test_estimate_weights_args() {
        let args = EstimateWeightsArgs::try_parse_from([
            "estimate_weights",
            "--drain-borders",
            "--formula",
            "neg-log-prob",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.backtrack(), Backtrack::DrainBorder);
        assert_eq!(args.formula, WeightFormula::NegLogProb);
        assert_eq!(args.output_format, OutputFormat::Json);

        let args = EstimateWeightsArgs::try_parse_from(["estimate_weights"]).unwrap();
        assert_eq!(args.backtrack(), Backtrack::StopAtBorder);
        assert_eq!(args.formula, WeightFormula::InverseCount);
    }

    #[test]
    fn test_verbosity_levels() {
        let args = EditDistArgs::try_parse_from(["editdist"]).unwrap();
        assert_eq!(args.verbosity.verbosity(), 1);

        let args = EditDistArgs::try_parse_from(["editdist", "-vv"]).unwrap();
        assert_eq!(args.verbosity.verbosity(), 3);

        let args = EditDistArgs::try_parse_from(["editdist", "-v", "--quiet"]).unwrap();
        assert_eq!(args.verbosity.verbosity(), 0);
    }
}

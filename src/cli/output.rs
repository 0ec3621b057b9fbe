//! Output formatting for the command-line tools.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::estimate::{EditKey, EstimatedWeight};
use crate::search::Neighbor;
use crate::symbol::{render_sequence, Symbol};

/// One neighbour of a query, as printed in JSON output.
#[derive(Debug, Serialize, Deserialize)]
pub struct NeighborResult {
    pub word: String,
    pub distance: f32,
}

/// All neighbours of one query line.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClosestResult {
    pub query: String,
    pub neighbors: Vec<NeighborResult>,
}

/// One estimated cost-table rule.
#[derive(Debug, Serialize, Deserialize)]
pub struct WeightResult {
    pub operation: String,
    pub symbols: Vec<String>,
    pub count: usize,
    pub weight: f64,
}

impl<S: Symbol> From<&EstimatedWeight<S>> for WeightResult {
    fn from(estimated: &EstimatedWeight<S>) -> Self {
        let (operation, symbols) = match &estimated.key {
            EditKey::Delete(s) => ("d", vec![s.to_string()]),
            EditKey::Insert(s) => ("i", vec![s.to_string()]),
            EditKey::Substitute(from, to) => ("s", vec![from.to_string(), to.to_string()]),
        };
        WeightResult {
            operation: operation.to_string(),
            symbols,
            count: estimated.count,
            weight: estimated.weight,
        }
    }
}

/// Write one distance per line.
pub fn write_distance<W: Write>(out: &mut W, distance: f32) -> Result<()> {
    writeln!(out, "{distance}")?;
    Ok(())
}

/// Write the neighbours of one query: `word:distance` pairs separated by tabs
/// in plain format, or a single JSON object.
pub fn write_neighbors<W: Write>(
    out: &mut W,
    query: &str,
    neighbors: &[Neighbor<'_, char>],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            let line = neighbors
                .iter()
                .map(|n| format!("{}:{}", render_sequence(n.entry, ""), n.distance))
                .collect::<Vec<_>>()
                .join("\t");
            writeln!(out, "{line}")?;
        }
        OutputFormat::Json => {
            let result = ClosestResult {
                query: query.to_string(),
                neighbors: neighbors
                    .iter()
                    .map(|n| NeighborResult {
                        word: render_sequence(n.entry, ""),
                        distance: n.distance,
                    })
                    .collect(),
            };
            serde_json::to_writer(&mut *out, &result)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write an estimated cost table.
///
/// Plain output is the cost-table format; weights always carry a decimal
/// point (`1.0`, `0.5`) so they read back as floating-point costs.
pub fn write_weights<S: Symbol, W: Write>(
    out: &mut W,
    weights: &[EstimatedWeight<S>],
    format: OutputFormat,
) -> Result<()> {
    for estimated in weights {
        match format {
            OutputFormat::Plain => {
                writeln!(out, "{}\t{:?}", estimated.key, estimated.weight)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &WeightResult::from(estimated))?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

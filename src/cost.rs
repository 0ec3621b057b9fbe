//! Operation costs for weighted edit distance.
//!
//! A [`CostModel`] pairs uniform default costs with per-symbol overrides. It is
//! built once (optionally from a cost table), then only read, so a single
//! instance can be shared by reference across worker threads.
//!
//! # Cost table format
//!
//! One rule per line, fields separated by tabs:
//!
//! ```text
//! s	<from>	<to>	<cost>
//! d	<symbol>	<cost>
//! i	<symbol>	<cost>
//! ```

use std::path::Path;

use ahash::AHashMap;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{LexdistError, Result};
use crate::symbol::Symbol;
use crate::text::load_lines;

/// Uniform costs used when no override matches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostDefaults {
    /// Cost of inserting any symbol.
    pub insertion: f32,
    /// Cost of deleting any symbol.
    pub deletion: f32,
    /// Cost of substituting two different symbols.
    pub substitution: f32,
}

impl Default for CostDefaults {
    fn default() -> Self {
        CostDefaults {
            insertion: 1.0,
            deletion: 1.0,
            substitution: 1.0,
        }
    }
}

impl CostDefaults {
    /// Create defaults, rejecting negative or non-finite costs.
    pub fn new(insertion: f32, deletion: f32, substitution: f32) -> Result<Self> {
        for (name, cost) in [
            ("insertion", insertion),
            ("deletion", deletion),
            ("substitution", substitution),
        ] {
            if !is_valid_cost(cost) {
                return Err(LexdistError::invalid_argument(format!(
                    "{name} cost must be a non-negative number, got {cost}"
                )));
            }
        }
        Ok(CostDefaults {
            insertion,
            deletion,
            substitution,
        })
    }
}

fn is_valid_cost(cost: f32) -> bool {
    cost.is_finite() && cost >= 0.0
}

/// Per-operation costs with symbol-specific overrides.
#[derive(Debug, Clone)]
pub struct CostModel<S: Symbol> {
    defaults: CostDefaults,
    insertions: AHashMap<S, f32>,
    deletions: AHashMap<S, f32>,
    substitutions: AHashMap<(S, S), f32>,
}

impl<S: Symbol> Default for CostModel<S> {
    fn default() -> Self {
        CostModel::new(CostDefaults::default())
    }
}

impl<S: Symbol> CostModel<S> {
    /// Create a cost model with no overrides.
    pub fn new(defaults: CostDefaults) -> Self {
        CostModel {
            defaults,
            insertions: AHashMap::new(),
            deletions: AHashMap::new(),
            substitutions: AHashMap::new(),
        }
    }

    /// Create a cost model and load overrides from a cost-table file.
    pub fn from_file<P: AsRef<Path>>(defaults: CostDefaults, path: P) -> Result<Self> {
        let mut model = CostModel::new(defaults);
        model.load_from_file(path)?;
        Ok(model)
    }

    /// The uniform default costs.
    pub fn defaults(&self) -> CostDefaults {
        self.defaults
    }

    /// Total number of override entries across all three tables.
    pub fn override_count(&self) -> usize {
        self.insertions.len() + self.deletions.len() + self.substitutions.len()
    }

    /// Override the insertion cost of one symbol.
    pub fn with_insertion(mut self, symbol: S, cost: f32) -> Self {
        self.insertions.insert(symbol, cost);
        self
    }

    /// Override the deletion cost of one symbol.
    pub fn with_deletion(mut self, symbol: S, cost: f32) -> Self {
        self.deletions.insert(symbol, cost);
        self
    }

    /// Override the cost of substituting `from` by `to`. Not symmetric.
    pub fn with_substitution(mut self, from: S, to: S, cost: f32) -> Self {
        self.substitutions.insert((from, to), cost);
        self
    }

    /// Cost of deleting `symbol` from the source sequence.
    pub fn deletion_cost(&self, symbol: &S) -> f32 {
        self.deletions
            .get(symbol)
            .copied()
            .unwrap_or(self.defaults.deletion)
    }

    /// Cost of inserting `symbol` into the source sequence.
    pub fn insertion_cost(&self, symbol: &S) -> f32 {
        self.insertions
            .get(symbol)
            .copied()
            .unwrap_or(self.defaults.insertion)
    }

    /// Cost of replacing `from` with `to`; always zero for equal symbols.
    pub fn substitution_cost(&self, from: &S, to: &S) -> f32 {
        if from == to {
            return 0.0;
        }
        // The map is keyed by owned pairs, so the probe needs clones.
        self.substitutions
            .get(&(from.clone(), to.clone()))
            .copied()
            .unwrap_or(self.defaults.substitution)
    }

    /// Load overrides from a cost-table file.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let lines = load_lines(path)?;
        self.load_from_table(&lines)?;
        info!(
            "loaded {} cost rules from {}",
            lines.len(),
            path.display()
        );
        Ok(())
    }

    /// Load overrides from cost-table lines.
    ///
    /// Later rules for the same key replace earlier ones. The first invalid
    /// line aborts loading with a format error naming that line.
    pub fn load_from_table<I, L>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        for (idx, line) in lines.into_iter().enumerate() {
            let line_no = idx + 1;
            self.load_rule(line.as_ref(), line_no)
                .map_err(|e| e.at_line(line_no))?;
        }
        Ok(())
    }

    fn load_rule(&mut self, line: &str, line_no: usize) -> Result<()> {
        let fields: Vec<&str> = line.split('\t').collect();
        let arity_error = |op: &str, expected: usize| {
            LexdistError::format(
                line_no,
                format!(
                    "bad number of arguments for {op}, expected {expected}, found {}: {line}",
                    fields.len() - 1
                ),
            )
        };

        match fields[0] {
            "s" => {
                if fields.len() != 4 {
                    return Err(arity_error("substitution", 3));
                }
                let from = S::parse(fields[1])?;
                let to = S::parse(fields[2])?;
                let cost = parse_cost(fields[3], line, line_no)?;
                self.substitutions.insert((from, to), cost);
            }
            "d" => {
                if fields.len() != 3 {
                    return Err(arity_error("deletion", 2));
                }
                let symbol = S::parse(fields[1])?;
                let cost = parse_cost(fields[2], line, line_no)?;
                self.deletions.insert(symbol, cost);
            }
            "i" => {
                if fields.len() != 3 {
                    return Err(arity_error("insertion", 2));
                }
                let symbol = S::parse(fields[1])?;
                let cost = parse_cost(fields[2], line, line_no)?;
                self.insertions.insert(symbol, cost);
            }
            "" if fields.len() == 1 => {
                return Err(LexdistError::format(line_no, "empty line in costs table"));
            }
            tag => {
                return Err(LexdistError::format(
                    line_no,
                    format!("unrecognized operation type {tag:?}: {line}"),
                ));
            }
        }
        Ok(())
    }
}

fn parse_cost(field: &str, line: &str, line_no: usize) -> Result<f32> {
    match field.trim().parse::<f32>() {
        Ok(cost) if is_valid_cost(cost) => Ok(cost),
        _ => Err(LexdistError::format(
            line_no,
            format!("invalid cost {field:?}: {line}"),
        )),
    }
}

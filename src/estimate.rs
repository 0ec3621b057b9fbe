//! Empirical estimation of edit-operation weights from aligned word pairs.
//!
//! Each pair is aligned with [`trace`](crate::levenshtein::trace); every
//! non-identity edit on the chosen path is tallied. Counts are then turned
//! into weights so that frequent edits become cheap. The output uses the cost
//! table format, so it can be loaded back with
//! [`CostModel::load_from_table`](crate::cost::CostModel::load_from_table).

use std::fmt;

use ahash::AHashMap;
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::cost::{CostDefaults, CostModel};
use crate::levenshtein::{trace, Backtrack, Edit};
use crate::symbol::Symbol;

/// A tallied edit, keyed by operation and the symbols involved.
///
/// The variant order gives the `d`, `i`, `s` output order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EditKey<S> {
    Delete(S),
    Insert(S),
    Substitute(S, S),
}

impl<S: Clone> EditKey<S> {
    /// Key for an edit, or `None` for a no-op.
    pub fn from_edit(edit: &Edit<S>) -> Option<Self> {
        match edit {
            Edit::Delete(s) => Some(EditKey::Delete(s.clone())),
            Edit::Insert(s) => Some(EditKey::Insert(s.clone())),
            Edit::Substitute(from, to) => Some(EditKey::Substitute(from.clone(), to.clone())),
            Edit::NoOp(_) => None,
        }
    }
}

/// Renders the leading cost-table fields: `d\t<sym>`, `i\t<sym>` or
/// `s\t<from>\t<to>`.
impl<S: fmt::Display> fmt::Display for EditKey<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditKey::Delete(s) => write!(f, "d\t{s}"),
            EditKey::Insert(s) => write!(f, "i\t{s}"),
            EditKey::Substitute(from, to) => write!(f, "s\t{from}\t{to}"),
        }
    }
}

/// How observed counts become weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WeightFormula {
    /// `1 / count`
    #[default]
    InverseCount,
    /// `-ln(count / total)`, the negative log of the edit's relative frequency.
    NegLogProb,
}

impl WeightFormula {
    pub fn weight(self, count: usize, total: usize) -> f64 {
        match self {
            WeightFormula::InverseCount => 1.0 / count as f64,
            WeightFormula::NegLogProb => (total as f64 / count as f64).ln(),
        }
    }
}

/// One line of an estimated cost table.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatedWeight<S> {
    pub key: EditKey<S>,
    pub count: usize,
    pub weight: f64,
}

/// Tallies edits over a parallel corpus.
#[derive(Debug, Clone)]
pub struct WeightEstimator<S: Symbol> {
    backtrack: Backtrack,
    counts: AHashMap<EditKey<S>, usize>,
    total_edits: usize,
    pairs: usize,
}

impl<S: Symbol> Default for WeightEstimator<S> {
    fn default() -> Self {
        WeightEstimator::new(Backtrack::default())
    }
}

impl<S: Symbol> WeightEstimator<S> {
    pub fn new(backtrack: Backtrack) -> Self {
        WeightEstimator {
            backtrack,
            counts: AHashMap::new(),
            total_edits: 0,
            pairs: 0,
        }
    }

    /// Align one source/target pair and tally its non-identity edits.
    pub fn observe(&mut self, source: &[S], target: &[S]) {
        let alignment = trace(source, target, self.backtrack);
        self.observe_edits(alignment.edits());
        self.pairs += 1;
    }

    /// Tally a precomputed edit sequence. No-ops are ignored.
    pub fn observe_edits<'e, I>(&mut self, edits: I)
    where
        I: IntoIterator<Item = &'e Edit<S>>,
        S: 'e,
    {
        for key in edits.into_iter().filter_map(EditKey::from_edit) {
            *self.counts.entry(key).or_insert(0) += 1;
            self.total_edits += 1;
        }
    }

    /// Number of pairs observed.
    pub fn pairs(&self) -> usize {
        self.pairs
    }

    /// Number of non-identity edits tallied.
    pub fn total_edits(&self) -> usize {
        self.total_edits
    }

    /// Number of distinct edits tallied.
    pub fn distinct_edits(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, key: &EditKey<S>) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Weights for every tallied edit, sorted by operation then symbols.
    pub fn weights(&self, formula: WeightFormula) -> Vec<EstimatedWeight<S>> {
        let mut weights: Vec<EstimatedWeight<S>> = self
            .counts
            .iter()
            .map(|(key, &count)| EstimatedWeight {
                key: key.clone(),
                count,
                weight: formula.weight(count, self.total_edits),
            })
            .collect();
        weights.sort_by(|a, b| a.key.cmp(&b.key));
        debug!(
            "estimated {} weights from {} edits over {} pairs",
            weights.len(),
            self.total_edits,
            self.pairs
        );
        weights
    }

    /// Build a cost model whose overrides are the estimated weights.
    pub fn to_cost_model(&self, formula: WeightFormula, defaults: CostDefaults) -> CostModel<S> {
        self.weights(formula)
            .into_iter()
            .fold(CostModel::new(defaults), |model, estimated| {
                let cost = estimated.weight as f32;
                match estimated.key {
                    EditKey::Delete(s) => model.with_deletion(s, cost),
                    EditKey::Insert(s) => model.with_insertion(s, cost),
                    EditKey::Substitute(from, to) => model.with_substitution(from, to, cost),
                }
            })
    }
}

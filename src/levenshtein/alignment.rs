//! Unit-cost alignment with backtracking into elementary edits.

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// The operation chosen at one cell of the alignment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operation {
    Insert,
    Delete,
    Substitute,
    NoOp,
}

impl Operation {
    /// Tag used for this operation in cost tables.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Operation::Insert => Some("i"),
            Operation::Delete => Some("d"),
            Operation::Substitute => Some("s"),
            Operation::NoOp => None,
        }
    }
}

/// One elementary edit along an alignment path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edit<S> {
    /// Insert a symbol of the target.
    Insert(S),
    /// Delete a symbol of the source.
    Delete(S),
    /// Replace a source symbol with a different target symbol.
    Substitute(S, S),
    /// Keep a symbol shared by source and target.
    NoOp(S),
}

impl<S> Edit<S> {
    pub fn operation(&self) -> Operation {
        match self {
            Edit::Insert(_) => Operation::Insert,
            Edit::Delete(_) => Operation::Delete,
            Edit::Substitute(..) => Operation::Substitute,
            Edit::NoOp(_) => Operation::NoOp,
        }
    }

    /// Whether this edit leaves the sequence unchanged.
    pub fn is_identity(&self) -> bool {
        matches!(self, Edit::NoOp(_))
    }
}

/// What to do once backtracking reaches the first row or column of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backtrack {
    /// Stop as soon as either index reaches zero. A leading run of insertions
    /// or deletions on the border is not emitted.
    #[default]
    StopAtBorder,
    /// Continue along the border so the edits transform the whole source
    /// into the whole target.
    DrainBorder,
}

/// The result of aligning two sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment<S> {
    edits: Vec<Edit<S>>,
    distance: usize,
}

impl<S> Alignment<S> {
    /// The edits in source-to-target order.
    pub fn edits(&self) -> &[Edit<S>] {
        &self.edits
    }

    pub fn into_edits(self) -> Vec<Edit<S>> {
        self.edits
    }

    /// Unit-cost edit distance between the two sequences.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Edits other than no-ops.
    pub fn changes(&self) -> impl Iterator<Item = &Edit<S>> {
        self.edits.iter().filter(|edit| !edit.is_identity())
    }
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    dist: usize,
    op: Operation,
}

/// Align `s1` to `s2` and return one optimal edit sequence, stopping at the
/// grid border.
pub fn align<S: Symbol>(s1: &[S], s2: &[S]) -> Vec<Edit<S>> {
    trace(s1, s2, Backtrack::StopAtBorder).into_edits()
}

/// Align `s1` to `s2` with unit costs and backtrack with the given policy.
///
/// When several operations reach the minimum at a cell, deletion wins over
/// insertion, which wins over substitution (or no-op). Estimated weights
/// depend on this order.
pub fn trace<S: Symbol>(s1: &[S], s2: &[S], backtrack: Backtrack) -> Alignment<S> {
    let len1 = s1.len();
    let len2 = s2.len();

    let mut grid = vec![
        vec![
            Cell {
                dist: 0,
                op: Operation::Insert,
            };
            len2 + 1
        ];
        len1 + 1
    ];
    for (i, row) in grid.iter_mut().enumerate().skip(1) {
        row[0] = Cell {
            dist: i,
            op: Operation::Delete,
        };
    }
    for (j, cell) in grid[0].iter_mut().enumerate().skip(1) {
        cell.dist = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let same = s1[i - 1] == s2[j - 1];
            let candidates = [
                Cell {
                    dist: grid[i - 1][j].dist + 1,
                    op: Operation::Delete,
                },
                Cell {
                    dist: grid[i][j - 1].dist + 1,
                    op: Operation::Insert,
                },
                Cell {
                    dist: grid[i - 1][j - 1].dist + usize::from(!same),
                    op: if same {
                        Operation::NoOp
                    } else {
                        Operation::Substitute
                    },
                },
            ];

            // First strict minimum wins ties.
            let mut best = candidates[0];
            for candidate in &candidates[1..] {
                if candidate.dist < best.dist {
                    best = *candidate;
                }
            }
            grid[i][j] = best;
        }
    }

    let distance = grid[len1][len2].dist;
    let mut edits = Vec::with_capacity(len1.max(len2));
    let (mut i, mut j) = (len1, len2);

    while i > 0 && j > 0 {
        match grid[i][j].op {
            Operation::Delete => {
                edits.push(Edit::Delete(s1[i - 1].clone()));
                i -= 1;
            }
            Operation::Insert => {
                edits.push(Edit::Insert(s2[j - 1].clone()));
                j -= 1;
            }
            Operation::Substitute | Operation::NoOp => {
                if s1[i - 1] == s2[j - 1] {
                    edits.push(Edit::NoOp(s1[i - 1].clone()));
                } else {
                    edits.push(Edit::Substitute(s1[i - 1].clone(), s2[j - 1].clone()));
                }
                i -= 1;
                j -= 1;
            }
        }
    }

    if backtrack == Backtrack::DrainBorder {
        while i > 0 {
            edits.push(Edit::Delete(s1[i - 1].clone()));
            i -= 1;
        }
        while j > 0 {
            edits.push(Edit::Insert(s2[j - 1].clone()));
            j -= 1;
        }
    }

    edits.reverse();
    Alignment { edits, distance }
}

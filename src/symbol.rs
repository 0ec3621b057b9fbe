//! Symbol types the edit-distance engine operates on.
//!
//! The algorithms are generic over [`Symbol`]. Two instantiations are provided:
//! `char` for codepoint-level distances and [`Word`] for word-level distances,
//! where a whole word is compared as a single opaque unit.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{LexdistError, Result};

/// An atomic, comparable unit of a sequence.
///
/// Equality and hashing must agree. `Ord` is only used to give deterministic
/// output order when tallies are printed.
pub trait Symbol: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display + Send + Sync {
    /// Parse a single cost-table field into a symbol.
    fn parse(field: &str) -> Result<Self>;
}

impl Symbol for char {
    fn parse(field: &str) -> Result<Self> {
        let mut chars = field.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(LexdistError::decode(format!(
                "expected only one letter, found: {field}"
            ))),
        }
    }
}

/// A word treated as one composite symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Word(Vec<char>);

impl Word {
    /// Create a word from its codepoints.
    pub fn new(chars: Vec<char>) -> Self {
        Word(chars)
    }

    /// The codepoints of this word.
    pub fn chars(&self) -> &[char] {
        &self.0
    }

    /// Number of codepoints.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Word(text.chars().collect())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl Symbol for Word {
    fn parse(field: &str) -> Result<Self> {
        if field.chars().any(char::is_whitespace) {
            return Err(LexdistError::decode(format!(
                "word symbols cannot contain whitespace, found: {field:?}"
            )));
        }
        Ok(Word::from(field))
    }
}

/// Render a symbol sequence the way it is printed by the command-line tools:
/// codepoints are concatenated, words are joined with single spaces.
pub fn render_sequence<S: Symbol>(symbols: &[S], separator: &str) -> String {
    symbols
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

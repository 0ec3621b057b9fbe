//! Line-oriented text helpers shared by the library and the command-line tools.
//!
//! These are the thin collaborators around the distance engine: decoding UTF-8
//! text into codepoint sequences and back, splitting tab-separated input pairs
//! and loading whole files line by line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{LexdistError, Result};
use crate::symbol::Word;

/// Number of lines between progress messages when loading large files.
pub const PROGRESS_INTERVAL: usize = 10_000;

/// Decode a string into its sequence of Unicode codepoints.
pub fn decode(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Encode a codepoint sequence back into a string.
pub fn encode(symbols: &[char]) -> String {
    symbols.iter().collect()
}

/// Split a line into whitespace-delimited words.
pub fn split_words(text: &str) -> Vec<Word> {
    text.split_whitespace().map(Word::from).collect()
}

/// Split an input line into exactly two tab-separated fields.
///
/// Leading and trailing spaces are trimmed from the line first. `line_no` is
/// 1-based and only used for the error message.
pub fn split_pair(line: &str, line_no: usize) -> Result<(&str, &str)> {
    let trimmed = line.trim_matches(' ');
    let mut fields = trimmed.split('\t');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(LexdistError::format(
            line_no,
            format!("expected 2 tab-delimited strings, found: {line}"),
        )),
    }
}

/// Read every line of a reader, stripping line terminators.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
        if lines.len() % PROGRESS_INTERVAL == 0 {
            debug!("read {} lines", lines.len());
        }
    }
    Ok(lines)
}

/// Load every line of a file.
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    read_lines(BufReader::new(file))
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lexicon loading and length filtering.
//!
//! The lexicon is a plain set of lowercase words, read one per line from a
//! text file. After loading, the search only ever performs membership tests
//! against it, and only against words of the query length, so
//! [`filter_by_length`] reduces it once up front.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read a lexicon from a text file, one word per line.
///
/// Lines are trimmed of surrounding whitespace; blank lines are skipped.
/// The file is expected to contain lowercase words, per the contract with
/// [`generate`](crate::generate) - no case folding is applied here.
pub fn read_lexicon(path: impl AsRef<Path>) -> io::Result<HashSet<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut lexicon = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            lexicon.insert(word.to_string());
        }
    }
    Ok(lexicon)
}

/// Keep only the words of the given length.
///
/// Words of any other length can never appear in a ladder and would only
/// slow down the oracle's membership tests.
pub fn filter_by_length(lexicon: &HashSet<String>, len: usize) -> HashSet<String> {
    lexicon
        .iter()
        .filter(|word| word.len() == len)
        .cloned()
        .collect()
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use std::collections::HashSet;

/// A small fixed lexicon covering the reference query scenarios.
///
/// The word sets are chosen so that each scenario has exactly the ladders
/// the reference English lexicon produces for it: the only possible middle
/// words of each two-hop query are present, and no extra word creates a
/// shorter or additional shortest path.
pub fn fixture_lexicon() -> HashSet<String> {
    [
        // two letters
        "at", "it", "an", "in",
        // three letters
        "hat", "ham", "hit", "him", "hot", "bat", "cat",
        "dog", "dug", "mog", "mug", "dig",
        "fly", "sly", "sky",
        // four letters
        "code", "cade", "cate", "cote", "dote", "date", "data",
        // six letters, deliberately unconnected
        "yttric", "talons",
        // seven letters
        "atlases",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

fn one_letter_apart(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a.chars()
            .zip(b.chars())
            .filter(|(x, y)| x != y)
            .count()
            == 1
}

/// Assert the result-set properties every successful query must satisfy.
///
/// - every ladder runs from `start` to `destination` and has `length` words;
/// - consecutive words differ in exactly one letter position;
/// - every intermediate word is a lexicon member;
/// - the result set is sorted lexicographically with no duplicates.
pub fn assert_well_formed(
    ladders: &[Vec<String>],
    start: &str,
    destination: &str,
    length: usize,
    lexicon: &HashSet<String>,
) {
    for ladder in ladders {
        assert_eq!(ladder.len(), length, "ladder {:?} has the wrong length", ladder);
        assert_eq!(ladder.first().map(String::as_str), Some(start));
        assert_eq!(ladder.last().map(String::as_str), Some(destination));
        for pair in ladder.windows(2) {
            assert!(
                one_letter_apart(&pair[0], &pair[1]),
                "{} -> {} is not a single substitution",
                pair[0],
                pair[1]
            );
        }
        for word in &ladder[1..ladder.len() - 1] {
            assert!(lexicon.contains(word), "{} is not a lexicon word", word);
        }
    }
    for pair in ladders.windows(2) {
        assert!(pair[0] < pair[1], "result set not strictly sorted: {:?}", pair);
    }
}

/// Build an owned ladder from string literals.
pub fn ladder(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The adjacency oracle.
//!
//! Adjacency in the substitution graph is discovered lazily: a word's
//! neighbours are computed the first time the frontier reaches it, and
//! memoized in the context's adjacency map. For a word of length `n` this
//! tries the `n * 25` single-letter substitutions and keeps those present
//! in the length-filtered lexicon.

use crate::context::SearchContext;
use crate::state::Counters;

/// Compute and record the sorted neighbour list of `word`.
///
/// Idempotent: if `word` already has an adjacency entry, nothing happens.
/// The recorded list is sorted lexicographically, which fixes both the
/// enqueue order of the breadth-first phase and the emission order of the
/// path enumerator.
pub fn expand(ctx: &mut SearchContext, word: &str) {
    if ctx.adjacency.contains_key(word) {
        return;
    }

    let mut neighbours = Vec::new();
    for (i, original) in word.char_indices() {
        let prefix = &word[..i];
        let suffix = &word[i + original.len_utf8()..];
        for letter in 'a'..='z' {
            if letter == original {
                continue;
            }
            let mut candidate = String::with_capacity(word.len());
            candidate.push_str(prefix);
            candidate.push(letter);
            candidate.push_str(suffix);
            if ctx.lexicon.contains(&candidate) {
                neighbours.push(candidate);
            }
        }
    }

    // Substitutions are generated position-major, so the list is not yet
    // in lexicographic order.
    neighbours.sort();

    ctx.statistics.increment(Counters::WordsExpanded);
    ctx.adjacency.insert(word.to_string(), neighbours);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn context_for(start: &str, words: &[&str]) -> SearchContext {
        let lexicon: HashSet<String> = words.iter().map(|w| w.to_string()).collect();
        SearchContext::new(start, &lexicon)
    }

    #[test]
    fn test_expand_finds_sorted_neighbours() {
        let mut ctx = context_for("hat", &["hat", "hot", "ham", "hit", "bat", "dog"]);
        expand(&mut ctx, "hat");
        assert_eq!(
            ctx.adjacency["hat"],
            vec!["bat", "ham", "hit", "hot"]
        );
    }

    #[test]
    fn test_expand_never_includes_the_word_itself() {
        let mut ctx = context_for("hat", &["hat", "ham"]);
        expand(&mut ctx, "hat");
        assert_eq!(ctx.adjacency["hat"], vec!["ham"]);
    }

    #[test]
    fn test_expand_no_neighbours() {
        let mut ctx = context_for("zzz", &["zzz", "abc"]);
        expand(&mut ctx, "zzz");
        assert!(ctx.adjacency["zzz"].is_empty());
    }

    #[test]
    fn test_expand_is_idempotent() {
        let mut ctx = context_for("hat", &["hat", "ham"]);
        expand(&mut ctx, "hat");
        expand(&mut ctx, "hat");
        assert_eq!(ctx.statistics.get(Counters::WordsExpanded), 1);
        assert_eq!(ctx.adjacency["hat"], vec!["ham"]);
    }

    #[test]
    fn test_expand_word_absent_from_lexicon() {
        // The start word itself need not be a lexicon member.
        let mut ctx = context_for("aa", &["at", "an"]);
        expand(&mut ctx, "aa");
        assert_eq!(ctx.adjacency["aa"], vec!["an", "at"]);
    }
}

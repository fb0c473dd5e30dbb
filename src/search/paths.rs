// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Path enumeration (depth-first phase).
//!
//! After the breadth-first phase every surviving adjacency edge steps one
//! depth level towards the destination, so a plain depth-first walk from
//! the start emits exactly the shortest ladders. Words without an
//! adjacency entry (never expanded, or fully pruned) are dead ends.
//!
//! Recursion depth is bounded by the ladder length, so an explicit stack
//! is unnecessary; the accumulated path is threaded as one reused buffer.

use crate::context::SearchContext;
use crate::state::Counters;

/// Collect every shortest ladder from `start` to `destination`.
///
/// Must run after [`layered_search`](super::frontier::layered_search) on
/// the same context. Ladders are emitted in lexicographic sequence order -
/// adjacency lists are sorted, and paths sharing a prefix diverge in
/// sorted branch order - so no final sort is needed.
pub fn enumerate(ctx: &mut SearchContext, start: &str, destination: &str) -> Vec<Vec<String>> {
    let mut results = Vec::new();
    let mut path = Vec::new();
    walk(ctx, start, destination, &mut path, &mut results);
    ctx.statistics.add(Counters::LaddersFound, results.len() as u64);
    results
}

fn walk(
    ctx: &SearchContext,
    word: &str,
    destination: &str,
    path: &mut Vec<String>,
    results: &mut Vec<Vec<String>>,
) {
    path.push(word.to_string());
    if word == destination {
        results.push(path.clone());
    } else if let Some(neighbours) = ctx.adjacency.get(word) {
        for next in neighbours {
            walk(ctx, next, destination, path, results);
        }
    }
    path.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::frontier;
    use std::collections::HashSet;

    fn searched_context(start: &str, destination: &str, words: &[&str]) -> SearchContext {
        let lexicon: HashSet<String> = words.iter().map(|w| w.to_string()).collect();
        let mut ctx = SearchContext::new(start, &lexicon);
        frontier::layered_search(&mut ctx, destination);
        ctx
    }

    fn ladder(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_enumerate_two_ladders_in_order() {
        let mut ctx = searched_context("dog", "mug", &["dog", "dug", "mog", "mug", "dig"]);
        let ladders = enumerate(&mut ctx, "dog", "mug");
        assert_eq!(
            ladders,
            vec![ladder(&["dog", "dug", "mug"]), ladder(&["dog", "mog", "mug"])]
        );
        assert_eq!(ctx.statistics.get(Counters::LaddersFound), 2);
    }

    #[test]
    fn test_enumerate_dead_end_word() {
        // "dig" is enqueued at depth 1 but never leads to "mug".
        let mut ctx = searched_context("dog", "mug", &["dog", "dug", "mog", "mug", "dig"]);
        let ladders = enumerate(&mut ctx, "dog", "mug");
        assert!(ladders.iter().all(|l| !l.contains(&"dig".to_string())));
    }

    #[test]
    fn test_enumerate_without_discovery_is_empty() {
        let mut ctx = searched_context("dog", "cat", &["dog", "dug", "cat"]);
        let ladders = enumerate(&mut ctx, "dog", "cat");
        assert!(ladders.is_empty());
        assert_eq!(ctx.statistics.get(Counters::LaddersFound), 0);
    }
}

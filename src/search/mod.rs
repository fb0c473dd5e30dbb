// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two-phase ladder search.
//!
//! [`generate`] is the entry point described in the crate docs. It wires the
//! phases together:
//!
//! 1. [`frontier::layered_search`] - breadth-first layering with pruning,
//!    producing a depth map and an adjacency map whose surviving edges all
//!    step from depth `d` to depth `d + 1`;
//! 2. [`paths::enumerate`] - depth-first collection of every start-to-
//!    destination path through the pruned structure.
//!
//! Malformed queries (unequal word lengths, identical start and
//! destination) produce an empty result set rather than an error, as does
//! an unreachable destination.

pub mod adjacency;
pub mod frontier;
pub mod paths;

use crate::context::SearchContext;
use std::collections::HashSet;

/// Find all shortest ladders from `start` to `destination`.
///
/// `lexicon` supplies the legal intermediate words; the start and
/// destination themselves do not need to be members, although the
/// destination can only be reached through the lexicon entry matching it.
/// Ladders are returned in lexicographic sequence order, each running from
/// `start` to `destination` inclusive, all of the same (minimal) length.
///
/// Returns an empty vector when no ladder exists, when the two words have
/// different lengths, or when `start == destination`.
pub fn generate(
    start: &str,
    destination: &str,
    lexicon: &HashSet<String>,
) -> Vec<Vec<String>> {
    let mut ctx = SearchContext::new(start, lexicon);
    run(&mut ctx, destination)
}

/// Run the search in an existing context.
///
/// Identical to [`generate`], but leaves the context (adjacency map, depth
/// map, statistics) available for inspection afterwards.
pub fn run(ctx: &mut SearchContext, destination: &str) -> Vec<Vec<String>> {
    if ctx.start.len() != destination.len() || ctx.start == destination {
        return Vec::new();
    }
    if frontier::layered_search(ctx, destination).is_none() {
        // Destination unreachable: skip the enumerator rather than walk
        // the whole explored component for nothing.
        return Vec::new();
    }
    let start = ctx.start.clone();
    paths::enumerate(ctx, &start, destination)
}

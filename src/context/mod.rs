// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context owning all per-invocation state.
//!
//! The SearchContext is the core data structure threaded by reference
//! through both search phases:
//!
//! - the length-filtered lexicon consumed by the adjacency oracle;
//! - the adjacency map, depth map, seen set, and frontier queue mutated by
//!   the breadth-first phase;
//! - the statistics counters.
//!
//! Nothing here outlives one `generate` call: the context is created, used
//! by the two phases in sequence, and dropped once the result set has been
//! produced. There is no shared or global mutable state, so independent
//! queries never interact.

use crate::lexicon;
use crate::state::Statistics;
use std::collections::{HashMap, HashSet, VecDeque};

/// All mutable state for a single ladder search.
///
/// # Map lifecycle
///
/// An `adjacency` entry exists only once its word has been expanded by the
/// oracle. The entry is sorted lexicographically at creation, stays
/// append-only while other words are being explored, and is pruned exactly
/// once - when the owning word is popped from the frontier and its depth is
/// thereby finalized. `depths` is written exactly once per word: the
/// breadth-first order guarantees first discovery is at minimum depth.
#[derive(Debug)]
pub struct SearchContext {
    /// The start word of the query (depth 0).
    pub start: String,

    /// The lexicon restricted to words of the start word's length.
    pub lexicon: HashSet<String>,

    /// Lazily discovered adjacency: word -> sorted one-substitution
    /// neighbours present in the lexicon.
    pub adjacency: HashMap<String, Vec<String>>,

    /// Minimum hops from the start, fixed at first discovery.
    pub depths: HashMap<String, usize>,

    /// Words already enqueued, including the start.
    pub seen: HashSet<String>,

    /// FIFO frontier of discovered-but-unexpanded words with their depths.
    pub frontier: VecDeque<(String, usize)>,

    /// Hop count of the shortest ladder, once the destination is reached.
    pub shortest: Option<usize>,

    /// Search statistics counters.
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context for a query starting at `start`.
    ///
    /// Filters the lexicon down to words of the start word's length and
    /// seeds the frontier with the start at depth 0. The start itself does
    /// not need to be in the lexicon.
    pub fn new(start: &str, lexicon: &HashSet<String>) -> Self {
        let mut depths = HashMap::new();
        depths.insert(start.to_string(), 0);

        let mut seen = HashSet::new();
        seen.insert(start.to_string());

        let mut frontier = VecDeque::new();
        frontier.push_back((start.to_string(), 0));

        Self {
            start: start.to_string(),
            lexicon: lexicon::filter_by_length(lexicon, start.len()),
            adjacency: HashMap::new(),
            depths,
            seen,
            frontier,
            shortest: None,
            statistics: Statistics::new(),
        }
    }

    /// The recorded depth of a discovered word.
    pub fn depth_of(&self, word: &str) -> Option<usize> {
        self.depths.get(word).copied()
    }

    /// Whether `word` has a finalized edge to `neighbour`.
    ///
    /// Relies on adjacency lists being sorted.
    pub fn has_edge(&self, word: &str, neighbour: &str) -> bool {
        self.adjacency
            .get(word)
            .is_some_and(|list| list.binary_search_by(|w| w.as_str().cmp(neighbour)).is_ok())
    }
}

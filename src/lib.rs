// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive shortest word-ladder search.
//!
//! A *ladder* between two equal-length words is a sequence of dictionary
//! words in which each step changes exactly one letter. This crate finds
//! **all** shortest ladders between a start and a destination word, given a
//! lexicon (one lowercase word per line).
//!
//! # Architecture
//!
//! The search runs in two phases over one shared, per-invocation
//! [`SearchContext`]:
//!
//! ## Phase 1: Layered frontier search (breadth-first)
//!
//! Explores the substitution graph level by level, lazily discovering
//! adjacency through the oracle in [`search::adjacency`]. Each word's depth
//! (minimum hops from the start) is fixed at first discovery. The instant
//! the destination appears in some word's adjacency list, depth advance
//! stops; the frontier is then drained so that every remaining word at the
//! final depth is still expanded. Adjacency edges that cannot lie on a
//! shortest path (wrong-depth edges) are pruned when their owning word's
//! depth is finalized.
//!
//! ## Phase 2: Path enumeration (depth-first)
//!
//! Walks the pruned adjacency structure from the start, collecting every
//! path that reaches the destination. Because adjacency lists are sorted
//! lexicographically, ladders come out in lexicographic sequence order.
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//!
//! let lexicon: HashSet<String> =
//!     ["hat", "ham", "hit", "him", "hot"].iter().map(|w| w.to_string()).collect();
//! let ladders = word_ladder::generate("hat", "him", &lexicon);
//!
//! assert_eq!(ladders, vec![
//!     vec!["hat".to_string(), "ham".to_string(), "him".to_string()],
//!     vec!["hat".to_string(), "hit".to_string(), "him".to_string()],
//! ]);
//! ```
//!
//! # No-path queries
//!
//! An unreachable destination is not an error: `generate` simply returns an
//! empty vector. The same holds for the two malformed-query cases (unequal
//! word lengths, identical start and destination).

pub mod context;
pub mod lexicon;
pub mod search;
pub mod state;

// Re-export the public surface
pub use context::SearchContext;
pub use lexicon::read_lexicon;
pub use search::generate;

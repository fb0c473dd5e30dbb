// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Layered frontier search (breadth-first phase).
//!
//! The frontier explores the substitution graph level by level, assigning
//! each newly discovered word a depth of its discoverer's depth + 1. The
//! phase has two modes:
//!
//! - **Running**: pop a word, expand it, and either discover the
//!   destination in its neighbour list (fixing the shortest ladder length
//!   and switching to draining) or finalize the list: unseen neighbours are
//!   assigned a depth and enqueued, while already-seen neighbours survive
//!   only if their depth is exactly one below the owner's.
//! - **Draining**: the destination has been reached, so no greater depth
//!   matters. The remaining frontier is fully popped; words at the final
//!   depth (`shortest - 1`) are still expanded and pruned, so that *every*
//!   edge into the destination's level is captured, while deeper words are
//!   discarded unexpanded.
//!
//! A word's adjacency list is pruned exactly once, in the same pop that
//! finalizes its depth. Surviving edges therefore all step from depth `d`
//! to depth `d + 1`; unseen neighbours are also kept (the destination is
//! never enqueued and stays unseen), and show up as dead ends to the path
//! enumerator unless they are the destination itself.

use super::adjacency;
use crate::context::SearchContext;
use crate::state::Counters;

/// Run the breadth-first phase against `destination`.
///
/// On return the context's adjacency map is finalized for path
/// enumeration. Yields the shortest ladder length in hops, or `None` when
/// the destination is unreachable from the start.
pub fn layered_search(ctx: &mut SearchContext, destination: &str) -> Option<usize> {
    while let Some((word, depth)) = ctx.frontier.pop_front() {
        match ctx.shortest {
            None => {
                adjacency::expand(ctx, &word);
                if ctx.has_edge(&word, destination) {
                    // First contact with the destination: its minimum
                    // depth is now known. Nothing more is enqueued, and
                    // the destination itself never enters the frontier.
                    ctx.shortest = Some(depth + 1);
                    prune_finalized(ctx, &word, depth);
                } else {
                    enqueue_neighbours(ctx, &word, depth);
                }
            }
            Some(shortest) => {
                // Only same-depth siblings of the destination's
                // discoverers can still contribute shortest-path edges.
                if depth + 1 == shortest {
                    adjacency::expand(ctx, &word);
                    prune_finalized(ctx, &word, depth);
                }
            }
        }
    }
    ctx.shortest
}

/// Finalize a word's neighbour list in the running phase.
///
/// Single pass over the freshly expanded list: unseen neighbours get depth
/// `depth + 1`, enter the seen set, and are enqueued; seen neighbours are
/// kept only at exactly `depth + 1` (anything else is an ancestor or sits
/// on a non-shortest branch and is pruned).
fn enqueue_neighbours(ctx: &mut SearchContext, word: &str, depth: usize) {
    let next_depth = depth + 1;
    let SearchContext {
        adjacency,
        depths,
        seen,
        frontier,
        statistics,
        ..
    } = ctx;
    let neighbours = adjacency
        .get_mut(word)
        .expect("expand records an entry before finalization");

    neighbours.retain(|w| {
        if seen.contains(w) {
            if depths.get(w) == Some(&next_depth) {
                true
            } else {
                statistics.increment(Counters::EdgesPruned);
                false
            }
        } else {
            depths.insert(w.clone(), next_depth);
            seen.insert(w.clone());
            frontier.push_back((w.clone(), next_depth));
            statistics.increment(Counters::WordsEnqueued);
            true
        }
    });
}

/// Prune a word's neighbour list without enqueuing anything.
///
/// Used once the destination has been discovered: seen neighbours at the
/// wrong depth are removed, unseen ones (including the destination) are
/// kept.
fn prune_finalized(ctx: &mut SearchContext, word: &str, depth: usize) {
    let next_depth = depth + 1;
    let SearchContext {
        adjacency,
        depths,
        seen,
        statistics,
        ..
    } = ctx;
    let neighbours = adjacency
        .get_mut(word)
        .expect("expand records an entry before finalization");

    neighbours.retain(|w| {
        if seen.contains(w) && depths.get(w) != Some(&next_depth) {
            statistics.increment(Counters::EdgesPruned);
            false
        } else {
            true
        }
    });
}

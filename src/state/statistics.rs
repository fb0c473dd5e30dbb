// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the search phases
//! as they expand words, enqueue neighbours, and prune edges. They are cheap
//! enough to maintain unconditionally and are reported by the `ladder`
//! binary after each query.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counters {
    /// Words whose adjacency list was computed by the oracle.
    WordsExpanded,
    /// Words assigned a depth and pushed onto the frontier.
    WordsEnqueued,
    /// Adjacency edges removed because they cannot lie on a shortest path.
    EdgesPruned,
    /// Complete ladders emitted by the path enumerator.
    LaddersFound,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Increment the specified counter by `n`.
    pub fn add(&mut self, counter: Counters, n: u64) {
        self.stats[counter as usize] += n;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

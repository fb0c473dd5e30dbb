// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-search mutable bookkeeping that is not part of the core maps.

pub mod statistics;

pub use statistics::{Counters, Statistics};

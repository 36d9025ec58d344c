//! Implementation blocks for statistics.

pub mod cache_stats_atomics;

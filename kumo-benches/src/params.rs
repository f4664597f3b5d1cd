//! Benchmark parameter types.
//!
//! Groups the knobs of a clustering benchmark run into a struct so that
//! Criterion benchmark ids stay consistent across benches.

use std::fmt;

/// Parameters for a radius clustering benchmark run.
#[derive(Clone, Debug)]
pub struct ClusterBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
    /// Number of worker threads used by the clusterer.
    pub threads: usize,
}

impl fmt::Display for ClusterBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},t={}", self.point_count, self.threads)
    }
}

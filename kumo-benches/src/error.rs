//! Benchmark setup error type.
//!
//! Aggregates the error types that may arise during benchmark data
//! preparation so that setup functions can propagate failures with `?`
//! instead of using `.expect()`.

use crate::source::SyntheticError;
use kumo_core::ClusterError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic point generation failed.
    #[error("synthetic point generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Clusterer configuration was rejected.
    #[error("clusterer setup failed: {0}")]
    Cluster(#[from] ClusterError),
}

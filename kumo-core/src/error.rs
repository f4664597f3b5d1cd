//! Error types for the kumo core library.
//!
//! Defines the error enum exposed by the public API, stable machine-readable
//! codes for logging surfaces, and a convenient result alias.

use std::sync::Arc;

use thiserror::Error;

/// Error type produced when configuring or running a [`crate::Clusterer`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClusterError {
    /// The radius must be finite and non-negative.
    #[error("radius must be finite and non-negative (got {got})")]
    InvalidRadius {
        /// The invalid radius supplied by the caller.
        got: f64,
    },
    /// The worker count must be at least 1.
    #[error("thread count must be at least 1 (got {got})")]
    InvalidThreadCount {
        /// The invalid worker count supplied by the caller.
        got: usize,
    },
    /// The operating system refused to start a worker thread.
    #[error("failed to spawn worker {worker}: {message}")]
    WorkerSpawn {
        /// Index of the worker that could not be started.
        worker: usize,
        /// Operating-system error description.
        message: Arc<str>,
    },
    /// A worker thread panicked before completing its chunk.
    #[error("worker {worker} panicked")]
    WorkerPanicked {
        /// Index of the worker that panicked.
        worker: usize,
    },
    /// A synchronisation primitive became poisoned after a panic.
    #[error("lock for {resource} is poisoned")]
    LockPoisoned {
        /// Name of the locked resource that was poisoned.
        resource: &'static str,
    },
}

impl ClusterError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> ClusterErrorCode {
        match self {
            Self::InvalidRadius { .. } => ClusterErrorCode::InvalidRadius,
            Self::InvalidThreadCount { .. } => ClusterErrorCode::InvalidThreadCount,
            Self::WorkerSpawn { .. } => ClusterErrorCode::WorkerSpawn,
            Self::WorkerPanicked { .. } => ClusterErrorCode::WorkerPanicked,
            Self::LockPoisoned { .. } => ClusterErrorCode::LockPoisoned,
        }
    }
}

/// Machine-readable error codes for [`ClusterError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ClusterErrorCode {
    /// The radius must be finite and non-negative.
    InvalidRadius,
    /// The worker count must be at least 1.
    InvalidThreadCount,
    /// The operating system refused to start a worker thread.
    WorkerSpawn,
    /// A worker thread panicked before completing its chunk.
    WorkerPanicked,
    /// A synchronisation primitive became poisoned after a panic.
    LockPoisoned,
}

impl ClusterErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRadius => "INVALID_RADIUS",
            Self::InvalidThreadCount => "INVALID_THREAD_COUNT",
            Self::WorkerSpawn => "WORKER_SPAWN",
            Self::WorkerPanicked => "WORKER_PANICKED",
            Self::LockPoisoned => "LOCK_POISONED",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ClusterError>;

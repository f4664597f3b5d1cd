//! Clustering entry point for the kumo core library.
//!
//! Provides the [`Clusterer`] runtime handle that resolves the worker count
//! and drives the parallel pair scan over a caller-supplied point sequence.

use std::num::NonZeroUsize;
use std::thread;

use tracing::{Span, field, info, instrument};

use crate::{
    Result,
    components::radius_components,
    point::Point,
    result::Partition,
};

/// Runs radius clustering over point sequences.
///
/// Construct instances through [`crate::ClustererBuilder`], which validates
/// the radius and worker count up front so `cluster` itself has no
/// configuration failure paths.
///
/// # Examples
/// ```
/// use kumo_core::{ClustererBuilder, Point};
///
/// let clusterer = ClustererBuilder::new()
///     .with_radius(5.0)
///     .with_threads(2)
///     .build()
///     .expect("configuration is valid");
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(50.0, 50.0),
/// ];
/// let partition = clusterer.cluster(&points).expect("clustering must succeed");
/// assert_eq!(partition.cluster_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Clusterer {
    radius: f64,
    threads: Option<NonZeroUsize>,
}

impl Clusterer {
    pub(crate) const fn new(radius: f64, threads: Option<NonZeroUsize>) -> Self {
        Self { radius, threads }
    }

    /// Returns the inclusive clustering radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the configured worker count, when one was set explicitly.
    ///
    /// `None` means the platform concurrency hint decides at `cluster` time.
    #[must_use]
    pub const fn threads(&self) -> Option<NonZeroUsize> {
        self.threads
    }

    /// Partitions `points` into maximal components under the radius.
    ///
    /// Point indices in the result refer to positions in `points`. The
    /// partition depends only on the points and the radius; the worker count
    /// affects scheduling, never the outcome. An empty input yields an empty
    /// partition.
    ///
    /// # Errors
    /// Returns [`crate::ClusterError::WorkerSpawn`] when the operating
    /// system refuses to start a worker, [`crate::ClusterError::WorkerPanicked`]
    /// when a worker dies mid-scan, and
    /// [`crate::ClusterError::LockPoisoned`] when a union-find lock was
    /// poisoned. Partial results are never returned.
    #[instrument(
        name = "core.cluster",
        err,
        skip(self, points),
        fields(points = points.len(), radius = self.radius, workers = field::Empty),
    )]
    pub fn cluster(&self, points: &[Point]) -> Result<Partition> {
        let workers = self.resolve_workers(points.len());
        Span::current().record("workers", workers.get());
        let clusters = radius_components(points, self.radius * self.radius, workers.get())?;
        let partition = Partition::from_clusters(clusters);
        info!(
            workers = workers.get(),
            clusters = partition.cluster_count(),
            "pair scan completed"
        );
        Ok(partition)
    }

    /// Resolves the worker count for a run over `items` points.
    ///
    /// Falls back to the platform concurrency hint, then to a single worker
    /// when the hint is unavailable. There is no benefit in more workers
    /// than outer-loop indices, so the count is clamped to `items`.
    fn resolve_workers(&self, items: usize) -> NonZeroUsize {
        let configured = self.threads.or_else(|| thread::available_parallelism().ok());
        let workers = configured.map_or(1, NonZeroUsize::get);
        NonZeroUsize::new(workers.min(items.max(1))).unwrap_or(NonZeroUsize::MIN)
    }
}

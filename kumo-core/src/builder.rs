//! Builder utilities for configuring radius clustering.
//!
//! Exposes the configuration surface and the validation performed before
//! constructing [`Clusterer`] instances.

use std::num::NonZeroUsize;

use crate::{Result, clusterer::Clusterer, error::ClusterError};

/// Default inclusive radius applied when the caller sets none.
const DEFAULT_RADIUS: f64 = 1.0;

/// Configures and constructs [`Clusterer`] instances.
///
/// # Examples
/// ```
/// use kumo_core::ClustererBuilder;
///
/// let clusterer = ClustererBuilder::new()
///     .with_radius(2.5)
///     .with_threads(4)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(clusterer.radius(), 2.5);
/// assert_eq!(clusterer.threads().map(|t| t.get()), Some(4));
/// ```
#[derive(Debug, Clone)]
pub struct ClustererBuilder {
    radius: f64,
    threads: Option<usize>,
}

impl Default for ClustererBuilder {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            threads: None,
        }
    }
}

impl ClustererBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use kumo_core::ClustererBuilder;
    ///
    /// let builder = ClustererBuilder::new();
    /// assert_eq!(builder.radius(), 1.0);
    /// assert_eq!(builder.threads(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the inclusive clustering radius.
    ///
    /// Two points at exactly this distance land in the same cluster. The
    /// value is validated by [`Self::build`].
    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Returns the currently configured radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Overrides the worker thread count.
    ///
    /// When unset, [`Clusterer::cluster`] uses the platform concurrency
    /// hint, defaulting to one worker when the hint is unavailable. The
    /// value is validated by [`Self::build`].
    #[must_use]
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Returns the currently configured worker count, if any.
    #[must_use]
    pub const fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validates the configuration and constructs a [`Clusterer`].
    ///
    /// # Errors
    /// Returns [`ClusterError::InvalidRadius`] when the radius is negative
    /// or non-finite, and [`ClusterError::InvalidThreadCount`] when an
    /// explicit worker count of zero was requested.
    ///
    /// # Examples
    /// ```
    /// use kumo_core::{ClusterError, ClustererBuilder};
    ///
    /// let err = ClustererBuilder::new().with_radius(-1.0).build();
    /// assert!(matches!(err, Err(ClusterError::InvalidRadius { .. })));
    /// ```
    pub fn build(self) -> Result<Clusterer> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ClusterError::InvalidRadius { got: self.radius });
        }

        let threads = self
            .threads
            .map(|threads| {
                NonZeroUsize::new(threads).ok_or(ClusterError::InvalidThreadCount { got: threads })
            })
            .transpose()?;

        Ok(Clusterer::new(self.radius, threads))
    }
}

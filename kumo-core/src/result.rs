//! Result types for clustering operations.
//!
//! Provides the [`Partition`] returned by [`crate::Clusterer::cluster`],
//! validation of the partition invariants, and the canonical form used when
//! comparing partitions.

use thiserror::Error;

/// A partition of `0..point_count` into disjoint non-empty clusters.
///
/// Cluster order and the order of indices within a cluster are unspecified
/// until [`Self::canonicalize`] is called.
///
/// # Examples
/// ```
/// use kumo_core::Partition;
///
/// let mut partition = Partition::from_clusters(vec![vec![2, 0], vec![1]]);
/// partition.canonicalize();
/// assert_eq!(partition.clusters(), &[vec![0, 2], vec![1]]);
/// assert_eq!(partition.point_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    clusters: Vec<Vec<usize>>,
    point_count: usize,
}

/// Error returned when cluster index lists do not form a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedPartition {
    /// A cluster contained no indices.
    #[error("clusters must be non-empty")]
    EmptyCluster,
    /// An index appeared in more than one cluster.
    #[error("index {index} appears in more than one cluster")]
    DuplicateIndex {
        /// The repeated point index.
        index: usize,
    },
    /// The clusters do not cover a contiguous `0..n` index space.
    #[error("index {index} is missing from the partition")]
    MissingIndex {
        /// The smallest uncovered point index.
        index: usize,
    },
}

impl Partition {
    /// Builds a partition from cluster member lists.
    ///
    /// # Panics
    /// Panics when the lists are not a partition of a contiguous index
    /// space; use [`Self::try_from_clusters`] for fallible construction.
    #[must_use]
    pub fn from_clusters(clusters: Vec<Vec<usize>>) -> Self {
        Self::try_from_clusters(clusters)
            .expect("clusters must partition a contiguous index space")
    }

    /// Attempts to build a partition from cluster member lists.
    ///
    /// The lists must be non-empty, pairwise disjoint, and together cover
    /// `0..n` for some `n`. An empty list of clusters is accepted and yields
    /// the empty partition.
    ///
    /// # Errors
    /// Returns [`MalformedPartition::EmptyCluster`] when a cluster has no
    /// members, [`MalformedPartition::DuplicateIndex`] when an index appears
    /// twice, and [`MalformedPartition::MissingIndex`] when the union of the
    /// clusters has a gap.
    ///
    /// # Examples
    /// ```
    /// use kumo_core::{MalformedPartition, Partition};
    ///
    /// let err = Partition::try_from_clusters(vec![vec![0], vec![0]]);
    /// assert_eq!(err, Err(MalformedPartition::DuplicateIndex { index: 0 }));
    /// ```
    pub fn try_from_clusters(
        clusters: Vec<Vec<usize>>,
    ) -> Result<Self, MalformedPartition> {
        let point_count = clusters.iter().map(Vec::len).sum();
        let mut seen = vec![false; point_count];

        for cluster in &clusters {
            if cluster.is_empty() {
                return Err(MalformedPartition::EmptyCluster);
            }
            for &index in cluster {
                match seen.get_mut(index) {
                    // An index at or beyond the total member count implies a
                    // gap below it, caught by the coverage check.
                    None => continue,
                    Some(slot) if *slot => {
                        return Err(MalformedPartition::DuplicateIndex { index });
                    }
                    Some(slot) => *slot = true,
                }
            }
        }

        if let Some(index) = seen.iter().position(|&covered| !covered) {
            return Err(MalformedPartition::MissingIndex { index });
        }

        Ok(Self {
            clusters,
            point_count,
        })
    }

    /// Returns the clusters in their current order.
    #[must_use]
    pub fn clusters(&self) -> &[Vec<usize>] {
        &self.clusters
    }

    /// Consumes the partition, returning the cluster member lists.
    #[must_use]
    pub fn into_clusters(self) -> Vec<Vec<usize>> {
        self.clusters
    }

    /// Returns the number of clusters.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Returns the number of points covered by the partition.
    #[must_use]
    pub const fn point_count(&self) -> usize {
        self.point_count
    }

    /// Returns whether the partition covers no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Rewrites the partition into its canonical form.
    ///
    /// Each cluster's indices are sorted ascending and clusters are ordered
    /// by their minimum index. Two partitions of the same point set are
    /// equal after canonicalisation iff they group the points identically.
    pub fn canonicalize(&mut self) {
        for cluster in &mut self.clusters {
            cluster.sort_unstable();
        }
        self.clusters.sort_unstable_by_key(|cluster| cluster.first().copied());
    }
}

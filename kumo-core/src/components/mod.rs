//! Parallel connected-component extraction under a radius predicate.
//!
//! This module provides the all-pairs engine behind [`crate::Clusterer`].
//! The index space is shuffled, split into contiguous chunks, and handed to
//! one scoped worker thread per chunk. Every worker scans `j = i + 1..n` for
//! each index `i` it owns, so each unordered pair is examined by exactly one
//! worker, and unites the pair on a shared [`ParallelDsu`] whenever the
//! squared distance is within the squared radius. The union-find absorbs the
//! symmetric and transitive closure, which is why duplicated or re-ordered
//! pair visits cannot change the outcome.

mod union_find;

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use rand::rngs::SmallRng;
use rand::{SeedableRng, seq::SliceRandom};
use tracing::debug;

use crate::{error::ClusterError, point::Point};

pub use self::union_find::ParallelDsu;

/// Computes the components of `points` under the inclusive radius predicate.
///
/// `radius_sq` is the squared radius; comparisons are `d² <= radius_sq` in
/// plain IEEE-754 arithmetic with no further tolerance. `workers` is the
/// number of threads to start (chunks beyond the point count are skipped).
/// The returned clusters are grouped by union-find root; their order and the
/// order of indices within them are unspecified.
pub(crate) fn radius_components(
    points: &[Point],
    radius_sq: f64,
    workers: usize,
) -> Result<Vec<Vec<usize>>, ClusterError> {
    let n = points.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let dsu = ParallelDsu::new(n);

    // The shuffle only spreads expensive low-index rows of the triangular
    // scan across chunks; it cannot affect the final partition.
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut SmallRng::from_entropy());

    let chunk_len = n.div_ceil(workers.max(1));
    debug!(points = n, workers, chunk_len, "starting pair scan");
    scan_pairs(points, radius_sq, &order, chunk_len, &dsu)?;

    Ok(collect_components(n, &dsu))
}

/// Runs the chunked pair scan on scoped worker threads.
///
/// All spawned workers are joined before returning, even when spawning
/// failed part-way or a worker reported a failure; the first failure in
/// spawn order wins.
fn scan_pairs(
    points: &[Point],
    radius_sq: f64,
    order: &[usize],
    chunk_len: usize,
    dsu: &ParallelDsu,
) -> Result<(), ClusterError> {
    thread::scope(|scope| {
        let mut handles = Vec::new();
        let mut first_failure = None;

        for (worker, chunk) in order.chunks(chunk_len).enumerate() {
            let builder = thread::Builder::new().name(format!("kumo-worker-{worker}"));
            match builder.spawn_scoped(scope, move || scan_chunk(points, radius_sq, chunk, dsu)) {
                Ok(handle) => handles.push((worker, handle)),
                Err(err) => {
                    first_failure = Some(ClusterError::WorkerSpawn {
                        worker,
                        message: Arc::from(err.to_string()),
                    });
                    break;
                }
            }
        }

        for (worker, handle) in handles {
            let outcome = match handle.join() {
                Ok(result) => result,
                Err(_) => Err(ClusterError::WorkerPanicked { worker }),
            };
            if let Err(err) = outcome {
                if first_failure.is_none() {
                    first_failure = Some(err);
                }
            }
        }

        first_failure.map_or(Ok(()), Err)
    })
}

/// Scans every pair owned by one chunk of the shuffled index order.
fn scan_chunk(
    points: &[Point],
    radius_sq: f64,
    chunk: &[usize],
    dsu: &ParallelDsu,
) -> Result<(), ClusterError> {
    let n = points.len();
    for &i in chunk {
        for j in (i + 1)..n {
            if points[i].squared_distance(points[j]) <= radius_sq {
                dsu.unite(i, j)?;
            }
        }
    }
    Ok(())
}

/// Buckets every index by its root once the workers have joined.
///
/// The join is the happens-before edge that publishes all worker writes, so
/// the reads here observe the final forest.
fn collect_components(n: usize, dsu: &ParallelDsu) -> Vec<Vec<usize>> {
    let mut groups: HashMap<usize, Vec<usize>> = HashMap::with_capacity(dsu.components());
    for index in 0..n {
        groups.entry(dsu.find(index)).or_default().push(index);
    }
    groups.into_values().collect()
}


#[cfg(test)]
mod property;

//! Sequential all-pairs oracle for radius-clustering property verification.
//!
//! Provides a simple, trusted, single-threaded implementation of the same
//! all-pairs scan for use as a reference in property tests. The distance
//! predicate is byte-for-byte the one the parallel engine uses, so the two
//! must agree exactly, not merely approximately.

use crate::Point;

/// Computes the canonical components of `points` under the inclusive radius
/// predicate with a single-threaded scan and a plain union-find.
pub(super) fn sequential_components(points: &[Point], radius: f64) -> Vec<Vec<usize>> {
    let n = points.len();
    let mut parent: Vec<usize> = (0..n).collect();
    let mut rank: Vec<u8> = vec![0; n];

    let radius_sq = radius * radius;
    for i in 0..n {
        for j in (i + 1)..n {
            if points[i].squared_distance(points[j]) <= radius_sq {
                union(&mut parent, &mut rank, i, j);
            }
        }
    }

    let mut clusters: Vec<Vec<usize>> = Vec::new();
    let mut bucket_of = vec![usize::MAX; n];
    for index in 0..n {
        let root = find(&mut parent, index);
        if bucket_of[root] == usize::MAX {
            bucket_of[root] = clusters.len();
            clusters.push(Vec::new());
        }
        clusters[bucket_of[root]].push(index);
    }

    canonicalize(&mut clusters);
    clusters
}

/// Sorts cluster members ascending and clusters by their minimum index.
pub(super) fn canonicalize(clusters: &mut Vec<Vec<usize>>) {
    for cluster in clusters.iter_mut() {
        cluster.sort_unstable();
    }
    clusters.sort_unstable_by_key(|cluster| cluster.first().copied());
}

fn find(parent: &mut [usize], node: usize) -> usize {
    let mut current = node;
    while parent[current] != current {
        parent[current] = parent[parent[current]];
        current = parent[current];
    }
    current
}

fn union(parent: &mut [usize], rank: &mut [u8], left: usize, right: usize) {
    let mut left_root = find(parent, left);
    let mut right_root = find(parent, right);
    if left_root == right_root {
        return;
    }
    if rank[left_root] < rank[right_root] {
        std::mem::swap(&mut left_root, &mut right_root);
    }
    parent[right_root] = left_root;
    if rank[left_root] == rank[right_root] {
        rank[left_root] = rank[left_root].saturating_add(1);
    }
}

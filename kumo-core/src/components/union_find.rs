//! Concurrent union-find shared by the parallel pair-scan workers.
//!
//! The structure prioritises correctness and deadlock avoidance over maximum
//! throughput. Disjoint unions proceed in parallel while a consistent lock
//! ordering keeps the workers deadlock-free.
//!
//! `find` is lock-free: each iteration reads a node's parent with acquire
//! ordering and, when a grandparent exists, attempts to install it over the
//! parent with a release `compare_exchange_weak`. A losing or spuriously
//! failing exchange is benign because compression only ever shortens a path
//! and never changes a root; the next iteration re-reads. `unite` locks the
//! two root ids as `(min_root, max_root)` and re-validates that those roots
//! are still current after acquiring the locks; if they changed, the attempt
//! is retried.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use crate::error::ClusterError;

/// Disjoint-set union over `0..n` that is safe to share across threads.
///
/// Rank entries are only written while the owning root's lock is held; the
/// atomic type is used so the table can be read without `&mut` access.
///
/// # Examples
/// ```
/// use kumo_core::ParallelDsu;
///
/// let dsu = ParallelDsu::new(3);
/// dsu.unite(0, 2).expect("locks cannot be poisoned here");
/// assert_eq!(dsu.find(0), dsu.find(2));
/// assert_ne!(dsu.find(0), dsu.find(1));
/// assert_eq!(dsu.components(), 2);
/// ```
pub struct ParallelDsu {
    parents: Vec<AtomicUsize>,
    ranks: Vec<AtomicUsize>,
    components: AtomicUsize,
    locks: Vec<Mutex<()>>,
}

impl ParallelDsu {
    /// Creates a structure with `node_count` singleton components.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        let mut parents = Vec::with_capacity(node_count);
        let mut ranks = Vec::with_capacity(node_count);
        for id in 0..node_count {
            parents.push(AtomicUsize::new(id));
            ranks.push(AtomicUsize::new(0));
        }

        let locks = (0..node_count).map(|_| Mutex::new(())).collect();

        Self {
            parents,
            ranks,
            components: AtomicUsize::new(node_count),
            locks,
        }
    }

    /// Returns the number of elements in the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns whether the universe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns the current number of live components.
    #[must_use]
    pub fn components(&self) -> usize {
        self.components.load(Ordering::Acquire)
    }

    /// Returns the root of the component containing `node`.
    ///
    /// The linearisation point is the final acquire load observing a
    /// self-parented node. Along the way the walk compresses the path one
    /// step at a time by swinging each visited node to its grandparent.
    #[must_use]
    pub fn find(&self, node: usize) -> usize {
        let mut current = node;
        loop {
            let parent = self.parents[current].load(Ordering::Acquire);
            if parent == current {
                return current;
            }

            let grandparent = self.parents[parent].load(Ordering::Relaxed);
            if grandparent == parent {
                return parent;
            }

            // A failed exchange means another thread already re-pointed
            // `current`; either way the grandparent is strictly closer to
            // the root, so continue from there.
            let _ = self.parents[current].compare_exchange_weak(
                parent,
                grandparent,
                Ordering::Release,
                Ordering::Relaxed,
            );
            current = grandparent;
        }
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `true` when a merge happened and `false` when the two elements
    /// already shared a root. Roots can stop being roots between the initial
    /// `find` and lock acquisition, so the roots are re-resolved under the
    /// locks and the attempt retried when they moved.
    ///
    /// # Errors
    /// Returns [`ClusterError::LockPoisoned`] when a root lock was poisoned
    /// by a panicking worker.
    pub fn unite(&self, left: usize, right: usize) -> Result<bool, ClusterError> {
        loop {
            let left_root = self.find(left);
            let right_root = self.find(right);

            if left_root == right_root {
                return Ok(false);
            }

            let lock_pair = lock_order(left_root, right_root);
            let (first_lock, second_lock) = lock_pair;
            let _first_guard = self.lock_root(first_lock)?;
            let _second_guard = (second_lock != first_lock)
                .then(|| self.lock_root(second_lock))
                .transpose()?;

            let left_root = self.find(left);
            let right_root = self.find(right);

            if left_root == right_root {
                return Ok(false);
            }

            if lock_order(left_root, right_root) != lock_pair {
                continue;
            }

            if !self.is_root(left_root) || !self.is_root(right_root) {
                continue;
            }

            self.union_roots(left_root, right_root);
            return Ok(true);
        }
    }

    fn lock_root(&self, index: usize) -> Result<std::sync::MutexGuard<'_, ()>, ClusterError> {
        self.locks[index].lock().map_err(|_| ClusterError::LockPoisoned {
            resource: "union-find root lock",
        })
    }

    fn union_roots(&self, left_root: usize, right_root: usize) {
        let left_rank = self.ranks[left_root].load(Ordering::Relaxed);
        let right_rank = self.ranks[right_root].load(Ordering::Relaxed);

        let (parent, child) = choose_parent_child(left_root, right_root, left_rank, right_rank);

        // The release store publishes the new link to subsequent acquire
        // loads in `find`.
        self.parents[child].store(parent, Ordering::Release);

        if left_rank == right_rank {
            self.ranks[parent].fetch_add(1, Ordering::Relaxed);
        }

        self.components.fetch_sub(1, Ordering::AcqRel);
    }

    fn is_root(&self, node: usize) -> bool {
        self.parents[node].load(Ordering::Acquire) == node
    }
}

fn lock_order(first: usize, second: usize) -> (usize, usize) {
    if first <= second {
        (first, second)
    } else {
        (second, first)
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: usize,
    right_rank: usize,
) -> (usize, usize) {
    if left_rank > right_rank {
        return (left_root, right_root);
    }
    if right_rank > left_rank {
        return (right_root, left_root);
    }

    lock_order(left_root, right_root)
}

//! Kumo core library.
//!
//! Groups 2-D points into maximal connected components under an inclusive
//! Euclidean radius predicate: two points are adjacent when their squared
//! distance is at most `radius²`, and clusters are the transitive closure of
//! that adjacency. The pair scan runs across worker threads that share one
//! concurrent union-find, so the result is independent of the worker count
//! and of scheduling.

mod builder;
mod clusterer;
mod components;
mod error;
mod point;
mod result;

pub use crate::{
    builder::ClustererBuilder,
    clusterer::Clusterer,
    components::ParallelDsu,
    error::{ClusterError, ClusterErrorCode, Result},
    point::Point,
    result::{MalformedPartition, Partition},
};

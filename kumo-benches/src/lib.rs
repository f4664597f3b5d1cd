//! Benchmark support crate for kumo.
//!
//! Provides synthetic point generation and parameter types used by the
//! Criterion benchmarks for radius clustering.

pub mod error;
pub mod params;
pub mod source;

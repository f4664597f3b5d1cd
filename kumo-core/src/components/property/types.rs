//! Type definitions for the radius-clustering property tests.
//!
//! Provides the fixture and point-cloud layout types used by the generation
//! strategies and property runners.

use crate::Point;

/// Point-cloud layout for generated fixtures.
///
/// Controls how points are placed during generation, producing inputs that
/// stress different aspects of the parallel pair scan and the shared
/// union-find.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Layout {
    /// Points scattered uniformly; components of varied size and shape.
    Uniform,
    /// A few tight clumps well inside the radius, stressing contended
    /// unions on the same roots.
    TightClumps,
    /// An axis-aligned grid whose spacing sits near the radius, stressing
    /// boundary comparisons.
    Grid,
    /// Points on a line at constant spacing, forming long union chains.
    Collinear,
    /// Many exactly coincident points, stressing zero-distance unions.
    Duplicates,
}

/// Fixture for radius-clustering property tests.
///
/// Captures the generated points, the radius under test, and the layout used
/// during generation, providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct ClusterFixture {
    /// Generated point sequence.
    pub points: Vec<Point>,
    /// Inclusive clustering radius under test.
    pub radius: f64,
    /// Layout used during generation.
    pub layout: Layout,
}

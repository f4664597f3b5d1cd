//! Strategy builders for the radius-clustering property tests.
//!
//! Provides point-cloud generators that produce varied spatial layouts
//! designed to stress the parallel pair scan. Each generator derives its
//! points deterministically from a seeded [`SmallRng`].

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Point;

use super::types::{ClusterFixture, Layout};

/// Minimum point count for generated clouds.
const MIN_POINTS: usize = 4;
/// Maximum point count for generated clouds, bounded to keep the quadratic
/// scans in the property runners fast.
const MAX_POINTS: usize = 48;

/// Generates fixtures covering all five point-cloud layouts.
pub(super) fn cluster_fixture_strategy() -> impl Strategy<Value = ClusterFixture> {
    (layout_strategy(), any::<u64>()).prop_map(|(layout, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(layout, &mut rng)
    })
}

fn layout_strategy() -> impl Strategy<Value = Layout> {
    prop_oneof![
        Just(Layout::Uniform),
        Just(Layout::TightClumps),
        Just(Layout::Grid),
        Just(Layout::Collinear),
        Just(Layout::Duplicates),
    ]
}

/// Generates a fixture for a specific layout.
///
/// Useful for targeted rstest cases where the layout is chosen explicitly
/// rather than sampled by proptest.
pub(super) fn generate_fixture(layout: Layout, rng: &mut SmallRng) -> ClusterFixture {
    match layout {
        Layout::Uniform => generate_uniform(rng),
        Layout::TightClumps => generate_tight_clumps(rng),
        Layout::Grid => generate_grid(rng),
        Layout::Collinear => generate_collinear(rng),
        Layout::Duplicates => generate_duplicates(rng),
    }
}

fn generate_uniform(rng: &mut SmallRng) -> ClusterFixture {
    let count = rng.gen_range(MIN_POINTS..=MAX_POINTS);
    let extent = rng.gen_range(10.0..100.0);
    let points = (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent)))
        .collect();
    ClusterFixture {
        points,
        radius: rng.gen_range(0.5..extent / 2.0),
        layout: Layout::Uniform,
    }
}

fn generate_tight_clumps(rng: &mut SmallRng) -> ClusterFixture {
    let clumps = rng.gen_range(2..=4);
    let radius = rng.gen_range(1.0..3.0);
    let mut points = Vec::new();
    for clump in 0..clumps {
        // Clump centres are spaced far apart relative to the radius, so the
        // expected components are exactly the clumps.
        let cx = f64::from(clump) * radius * 50.0;
        let members = rng.gen_range(2..=MAX_POINTS / 4);
        for _ in 0..members {
            let jitter = radius / 4.0;
            points.push(Point::new(
                cx + rng.gen_range(-jitter..jitter),
                rng.gen_range(-jitter..jitter),
            ));
        }
    }
    ClusterFixture {
        points,
        radius,
        layout: Layout::TightClumps,
    }
}

fn generate_grid(rng: &mut SmallRng) -> ClusterFixture {
    let side = rng.gen_range(2..=6);
    let spacing = rng.gen_range(0.5..2.0);
    let mut points = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            #[expect(
                clippy::cast_precision_loss,
                reason = "grid side is at most 6"
            )]
            points.push(Point::new(col as f64 * spacing, row as f64 * spacing));
        }
    }
    ClusterFixture {
        points,
        // Near the spacing, so some grids connect fully and some not at all.
        radius: spacing * rng.gen_range(0.8..1.2),
        layout: Layout::Grid,
    }
}

fn generate_collinear(rng: &mut SmallRng) -> ClusterFixture {
    let count = rng.gen_range(MIN_POINTS..=MAX_POINTS);
    let spacing = rng.gen_range(0.5..2.0);
    let points = (0..count)
        .map(|index| {
            #[expect(
                clippy::cast_precision_loss,
                reason = "point counts stay far below 2^52"
            )]
            Point::new(index as f64 * spacing, 0.0)
        })
        .collect();
    ClusterFixture {
        points,
        radius: spacing * rng.gen_range(0.9..1.5),
        layout: Layout::Collinear,
    }
}

fn generate_duplicates(rng: &mut SmallRng) -> ClusterFixture {
    let sites = rng.gen_range(1..=4);
    let mut points = Vec::new();
    for _ in 0..sites {
        let site = Point::new(rng.gen_range(0.0..50.0), rng.gen_range(0.0..50.0));
        let copies = rng.gen_range(2..=MAX_POINTS / 4);
        points.extend(std::iter::repeat_n(site, copies));
    }
    ClusterFixture {
        points,
        radius: 0.0,
        layout: Layout::Duplicates,
    }
}

//! Property-based tests for the parallel radius-component engine.
//!
//! Verifies the parallel pair scan against a sequential all-pairs oracle and
//! checks the algebraic properties of the partition: determinism across
//! worker counts, monotonicity in the radius, permutation equivariance, and
//! inclusivity at the radius boundary, across point-cloud layouts chosen to
//! stress contention in the shared union-find.

mod oracle;
mod strategies;
mod types;

use proptest::test_runner::Config as ProptestConfig;

/// Builds the proptest configuration shared by the property suites.
fn suite_proptest_config(cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

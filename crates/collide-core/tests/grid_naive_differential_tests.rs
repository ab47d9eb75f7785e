// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Differential tests: the grid broad phase must produce exactly the pair
//! list of the all-pairs baseline on every input.

use proptest::prelude::*;
use proptest::test_runner::{
    Config as PropConfig, RngAlgorithm, TestCaseError, TestRng, TestRunner,
};

use collide_core::{detect, naive, parse_circles, CollisionPair, GridConfig};

mod common;
use common::{random_buffer, XorShift64};

/// Baseline pair list for a buffer already known to be valid.
fn naive_pairs(buffer: &[f32], stride: usize) -> Vec<CollisionPair> {
    let circles = parse_circles(buffer, stride).expect("valid buffer");
    let mut out = Vec::new();
    naive::detect_into(&circles, &mut out);
    out
}

#[test]
fn grid_matches_baseline_across_sizes_and_densities() {
    let mut rng = XorShift64::new(1);
    // Sizes straddle the grid cutoff; spans/radii vary collision density
    // from sparse to heavily overlapping.
    for n in [0, 1, 2, 63, 64, 65, 200, 500] {
        for (span, max_radius) in [(100.0, 0.1), (20.0, 0.5), (5.0, 2.0)] {
            let buffer = random_buffer(&mut rng, n, 3, span, max_radius);
            let pairs = detect(&buffer, 3).unwrap();
            assert_eq!(pairs, naive_pairs(&buffer, 3), "n={n} span={span}");
        }
    }
}

#[test]
fn coarse_and_fine_grids_match_baseline() {
    let mut rng = XorShift64::new(2);
    let buffer = random_buffer(&mut rng, 300, 3, 10.0, 0.7);
    let expected = naive_pairs(&buffer, 3);
    for cell_scale in [0.25, 1.0, 4.0, 16.0] {
        let mut out = Vec::new();
        collide_core::detect_into_with(&GridConfig { cell_scale }, &buffer, 3, &mut out)
            .unwrap();
        assert_eq!(out, expected, "cell_scale={cell_scale}");
    }
}

#[test]
fn proptest_seed_pinned_grid_equals_baseline() {
    // Pin a seed for deterministic case generation so failures are
    // reproducible across machines and CI.
    const SEED_BYTES: [u8; 32] = [
        0x42, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0,
    ];

    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    let mut runner = TestRunner::new_with_rng(PropConfig::default(), rng);

    // Mixed-sign coordinates and radii spanning zero, so tangency and
    // point-circle cases show up in generated data.
    let record = (-100.0f32..100.0, -100.0f32..100.0, 0.0f32..5.0);
    let records = prop::collection::vec(record, 0..300);

    runner
        .run(&records, |records| {
            let mut buffer = Vec::with_capacity(records.len() * 3);
            for (x, y, radius) in &records {
                buffer.extend_from_slice(&[*x, *y, *radius]);
            }
            let pairs = detect(&buffer, 3).map_err(|e| {
                TestCaseError::fail(format!("valid buffer rejected: {e}"))
            })?;
            prop_assert_eq!(pairs, naive_pairs(&buffer, 3));
            Ok(())
        })
        .expect("grid/baseline differential property should hold");
}

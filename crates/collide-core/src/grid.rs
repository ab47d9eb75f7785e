// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Uniform-grid broad phase.
//!
//! The plane is cut into square cells sized from the largest radius in the
//! input. Each circle is bucketed into every cell its bounding box overlaps,
//! and exact overlap tests run only between circles sharing a bucket. For
//! roughly uniform spatial density this replaces the O(N²) scan with
//! near-linear work.
//!
//! # Pair ownership
//!
//! A pair of nearby circles can share several cells. Instead of a dedup set,
//! every shared pair has exactly one *owner* cell — the component-wise max of
//! the two bounding-box minimum cells — and is only emitted there. Two
//! overlapping circles have overlapping bounding boxes, so their cell ranges
//! intersect and the owner cell is one of the shared cells. This keeps the
//! sweep allocation-free per candidate and the pair set deterministic.

use rustc_hash::FxHashMap;

use crate::circle::Circle;
use crate::pair::CollisionPair;

/// Tuning for the grid broad phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Cell size as a multiple of the largest radius in the input.
    ///
    /// 1.0 buckets each circle into at most a 3×3 cell patch. Smaller values
    /// trade larger buckets for more of them; non-finite or non-positive
    /// values disable the grid and route the call to the all-pairs baseline.
    pub cell_scale: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cell_scale: 1.0 }
    }
}

/// Grid cell coordinate of a world coordinate.
///
/// `f32` to `i64` casts saturate, so extreme coordinate/cell ratios collapse
/// into the boundary cells rather than wrapping; the exact overlap test still
/// decides every candidate pair.
fn cell_coord(v: f32, cell: f32) -> i64 {
    (v / cell).floor() as i64
}

/// Returns the grid cell size for `circles`, or `None` when the grid cannot
/// help (all radii zero, or a degenerate [`GridConfig`]).
pub(crate) fn cell_size(circles: &[Circle], config: &GridConfig) -> Option<f32> {
    let max_radius = circles.iter().fold(0.0_f32, |acc, c| acc.max(c.radius));
    let cell = max_radius * config.cell_scale;
    (cell.is_finite() && cell > 0.0).then_some(cell)
}

/// Per-call spatial bucketing of the input circles.
///
/// Scoped to one detection call; dropped when the call returns.
pub(crate) struct CellGrid {
    /// Minimum bounding-box cell per circle, for pair ownership.
    min_cells: Vec<(i64, i64)>,
    /// Circle indices per occupied cell, ascending by construction.
    buckets: FxHashMap<(i64, i64), Vec<u32>>,
}

impl CellGrid {
    /// Buckets every circle into the cells its bounding box overlaps.
    pub(crate) fn build(circles: &[Circle], cell: f32) -> Self {
        let mut min_cells = Vec::with_capacity(circles.len());
        let mut buckets: FxHashMap<(i64, i64), Vec<u32>> = FxHashMap::default();
        for (index, circle) in circles.iter().enumerate() {
            let (min_x, min_y) = circle.aabb_min();
            let (max_x, max_y) = circle.aabb_max();
            let x0 = cell_coord(min_x, cell);
            let y0 = cell_coord(min_y, cell);
            let x1 = cell_coord(max_x, cell);
            let y1 = cell_coord(max_y, cell);
            min_cells.push((x0, y0));
            for cx in x0..=x1 {
                for cy in y0..=y1 {
                    buckets.entry((cx, cy)).or_default().push(index as u32);
                }
            }
        }
        Self { min_cells, buckets }
    }

    /// Occupied cells and their buckets.
    pub(crate) fn buckets(&self) -> &FxHashMap<(i64, i64), Vec<u32>> {
        &self.buckets
    }

    /// The one cell allowed to emit the pair `(i, j)`.
    fn owner_cell(&self, i: u32, j: u32) -> (i64, i64) {
        let (ax, ay) = self.min_cells[i as usize];
        let (bx, by) = self.min_cells[j as usize];
        (ax.max(bx), ay.max(by))
    }

    /// Exact-tests every index pair in `bucket`, appending pairs owned by
    /// `key` to `out`.
    pub(crate) fn sweep_bucket(
        &self,
        key: (i64, i64),
        bucket: &[u32],
        circles: &[Circle],
        out: &mut Vec<CollisionPair>,
    ) {
        for (n, &i) in bucket.iter().enumerate() {
            for &j in &bucket[n + 1..] {
                // Buckets are filled in index order, so i < j already holds.
                if self.owner_cell(i, j) == key
                    && circles[i as usize].overlaps(&circles[j as usize])
                {
                    out.push(CollisionPair { a: i, b: j });
                }
            }
        }
    }

    /// Serial sweep over every occupied cell.
    ///
    /// Emission order follows bucket iteration and is unsorted; the entry
    /// points canonicalize by sorting.
    pub(crate) fn sweep_into(&self, circles: &[Circle], out: &mut Vec<CollisionPair>) {
        for (key, bucket) in &self.buckets {
            self.sweep_bucket(*key, bucket, circles, out);
        }
    }
}

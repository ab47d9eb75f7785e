// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Parallel grid sweep (feature `parallel`).
//!
//! Occupied cells are independent once the grid is built: pair ownership
//! assigns every candidate pair to exactly one cell, so workers can sweep
//! disjoint cell sets with no shared mutable state. Each worker emits into a
//! thread-local list; the merged list is sorted into the same canonical order
//! the serial path produces. Identical input yields an identical pair list on
//! both paths regardless of thread count.

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::circle::Circle;
use crate::grid::{cell_size, CellGrid, GridConfig};
use crate::input::{parse_circles, InputError};
use crate::naive;
use crate::pair::CollisionPair;

/// Inputs below this size run the serial baseline; fork/join overhead
/// dominates before grid construction even pays for itself.
const PARALLEL_MIN_CIRCLES: usize = 256;

/// Parallel counterpart of [`crate::detect`].
///
/// # Errors
///
/// Returns [`InputError`] without computing anything when the buffer is
/// malformed.
pub fn detect(buffer: &[f32], stride: usize) -> Result<Vec<CollisionPair>, InputError> {
    let mut out = Vec::new();
    detect_into_with(&GridConfig::default(), buffer, stride, &mut out)?;
    Ok(out)
}

/// Parallel counterpart of [`crate::detect_into_with`].
///
/// # Errors
///
/// Returns [`InputError`] when the buffer is malformed; `out` is left
/// cleared.
pub fn detect_into_with(
    config: &GridConfig,
    buffer: &[f32],
    stride: usize,
    out: &mut Vec<CollisionPair>,
) -> Result<(), InputError> {
    out.clear();
    let circles = parse_circles(buffer, stride)?;
    match cell_size(&circles, config) {
        Some(cell) if circles.len() >= PARALLEL_MIN_CIRCLES => {
            sweep_parallel(&circles, cell, out);
        }
        _ => naive::detect_into(&circles, out),
    }
    Ok(())
}

/// Sweeps every occupied cell across the rayon pool and merges the
/// thread-local pair lists.
fn sweep_parallel(circles: &[Circle], cell: f32, out: &mut Vec<CollisionPair>) {
    let grid = CellGrid::build(circles, cell);
    let mut pairs = grid
        .buckets()
        .par_iter()
        .map(|(key, bucket)| {
            let mut local = Vec::new();
            grid.sweep_bucket(*key, bucket, circles, &mut local);
            local
        })
        .reduce(Vec::new, |mut acc, mut chunk| {
            acc.append(&mut chunk);
            acc
        });
    // Merge order depends on work stealing; sorting restores the canonical
    // list the serial path emits.
    pairs.sort_unstable();
    out.append(&mut pairs);
}

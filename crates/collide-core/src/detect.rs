// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Detection entry points over flat buffers.
//!
//! Every entry point validates first and performs no detection work on
//! invalid input. Results are canonical: each overlapping pair appears
//! exactly once as `(a, b)` with `a < b`, ascending.

use crate::circle::Circle;
use crate::grid::{cell_size, CellGrid, GridConfig};
use crate::input::{parse_circles, InputError};
use crate::naive;
use crate::pair::CollisionPair;

/// Below this many circles the all-pairs baseline beats grid construction.
const GRID_MIN_CIRCLES: usize = 64;

/// Detects all overlapping pairs in `buffer` (see the crate docs for the
/// buffer layout).
///
/// # Errors
///
/// Returns [`InputError`] without computing anything when the buffer is
/// malformed.
pub fn detect(buffer: &[f32], stride: usize) -> Result<Vec<CollisionPair>, InputError> {
    let mut out = Vec::new();
    detect_into(buffer, stride, &mut out)?;
    Ok(out)
}

/// Like [`detect`], writing into a caller-owned vector.
///
/// `out` is cleared first and can be reused across calls to amortize its
/// allocation.
///
/// # Errors
///
/// Returns [`InputError`] without touching `out`'s capacity when the buffer
/// is malformed; `out` is left cleared.
pub fn detect_into(
    buffer: &[f32],
    stride: usize,
    out: &mut Vec<CollisionPair>,
) -> Result<(), InputError> {
    detect_into_with(&GridConfig::default(), buffer, stride, out)
}

/// Like [`detect_into`], with explicit grid tuning.
///
/// # Errors
///
/// Returns [`InputError`] when the buffer is malformed.
pub fn detect_into_with(
    config: &GridConfig,
    buffer: &[f32],
    stride: usize,
    out: &mut Vec<CollisionPair>,
) -> Result<(), InputError> {
    out.clear();
    let circles = parse_circles(buffer, stride)?;
    detect_circles_into(config, &circles, out);
    Ok(())
}

/// Counts overlapping pairs without materializing them for the caller.
///
/// # Errors
///
/// Returns [`InputError`] when the buffer is malformed.
pub fn detect_count(buffer: &[f32], stride: usize) -> Result<usize, InputError> {
    detect(buffer, stride).map(|pairs| pairs.len())
}

/// Shared serial path: pick grid or baseline, then canonicalize.
fn detect_circles_into(config: &GridConfig, circles: &[Circle], out: &mut Vec<CollisionPair>) {
    match cell_size(circles, config) {
        Some(cell) if circles.len() >= GRID_MIN_CIRCLES => {
            CellGrid::build(circles, cell).sweep_into(circles, out);
            // The grid emits in bucket order; the baseline is already
            // ascending, so only this arm sorts.
            out.sort_unstable();
        }
        _ => naive::detect_into(circles, out),
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Buffer validation and decoding.
//!
//! Validation is all-or-nothing: the first malformed lane fails the whole
//! call before any detection work happens. A single corrupt record must not
//! silently degrade the pair set, so records are never skipped.

use thiserror::Error;

use crate::circle::Circle;

/// Minimum stride: `x`, `y`, `radius`.
pub const MIN_STRIDE: usize = 3;

/// Rejection reasons for a detection buffer.
///
/// Surfaced synchronously before any computation; no partial results are
/// produced on failure.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum InputError {
    /// The stride cannot hold an `x, y, radius` record.
    #[error("stride {stride} is below the minimum of 3 (x, y, radius)")]
    StrideTooSmall {
        /// Stride requested by the caller.
        stride: usize,
    },
    /// The buffer does not divide into whole records.
    #[error("buffer length {len} is not a multiple of stride {stride}")]
    LengthNotMultiple {
        /// Buffer length in lanes.
        len: usize,
        /// Stride requested by the caller.
        stride: usize,
    },
    /// A coordinate or radius lane holds NaN or an infinity.
    #[error("non-finite value in record {index}, lane {lane}")]
    NonFinite {
        /// Record index of the offending value.
        index: usize,
        /// Lane within the record (0 = x, 1 = y, 2 = radius).
        lane: usize,
    },
    /// A record carries a negative radius.
    #[error("negative radius {radius} in record {index}")]
    NegativeRadius {
        /// Record index of the offending value.
        index: usize,
        /// The rejected radius.
        radius: f32,
    },
}

/// Validates `buffer` and decodes it into circles.
///
/// Lanes `0..3` of each `stride`-sized record are `x`, `y`, `radius`; any
/// remaining lanes are padding and are not inspected.
///
/// # Errors
///
/// Returns [`InputError`] if the stride is below [`MIN_STRIDE`], the length
/// is not a whole number of records, any `x`/`y`/`radius` lane is non-finite,
/// or any radius is negative (`-0.0` is accepted).
pub fn parse_circles(buffer: &[f32], stride: usize) -> Result<Vec<Circle>, InputError> {
    if stride < MIN_STRIDE {
        return Err(InputError::StrideTooSmall { stride });
    }
    if buffer.len() % stride != 0 {
        return Err(InputError::LengthNotMultiple {
            len: buffer.len(),
            stride,
        });
    }

    let mut circles = Vec::with_capacity(buffer.len() / stride);
    for (index, record) in buffer.chunks_exact(stride).enumerate() {
        for (lane, value) in record[..MIN_STRIDE].iter().enumerate() {
            if !value.is_finite() {
                return Err(InputError::NonFinite { index, lane });
            }
        }
        let radius = record[2];
        // Finiteness is checked first, so a NaN radius never reaches the
        // sign test below.
        if radius < 0.0 {
            return Err(InputError::NegativeRadius { index, radius });
        }
        circles.push(Circle::new(record[0], record[1], radius));
    }
    Ok(circles)
}

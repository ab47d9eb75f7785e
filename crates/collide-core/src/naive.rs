// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! All-pairs O(N²) baseline.
//!
//! Why this exists:
//! - Serves as the correctness and determinism reference for the grid broad
//!   phase: on any valid input the two must produce identical pair lists, and
//!   the differential tests hold them to that.
//! - Stays the faster path for small inputs, where grid construction costs
//!   more than the quadratic scan it saves; [`crate::detect`] routes tiny and
//!   degenerate inputs here.

use crate::circle::Circle;
use crate::pair::CollisionPair;

/// Appends every overlapping pair among `circles` to `out`, canonical
/// `(a, b)` with `a < b`, in ascending order.
///
/// `out` is not cleared; the top-level entry points own that decision.
pub fn detect_into(circles: &[Circle], out: &mut Vec<CollisionPair>) {
    for (i, a) in circles.iter().enumerate() {
        for (off, b) in circles[i + 1..].iter().enumerate() {
            if a.overlaps(b) {
                let j = i + 1 + off;
                out.push(CollisionPair::new(i as u32, j as u32));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_pair_once_in_ascending_order() {
        // Three mutually overlapping circles.
        let circles = [
            Circle::new(0.0, 0.0, 1.0),
            Circle::new(1.0, 0.0, 1.0),
            Circle::new(0.5, 0.5, 1.0),
        ];
        let mut out = Vec::new();
        detect_into(&circles, &mut out);
        assert_eq!(
            out,
            vec![
                CollisionPair::new(0, 1),
                CollisionPair::new(0, 2),
                CollisionPair::new(1, 2),
            ]
        );
    }

    #[test]
    fn no_self_pairs_for_coincident_circles() {
        let circles = [Circle::new(1.0, 1.0, 0.5), Circle::new(1.0, 1.0, 0.5)];
        let mut out = Vec::new();
        detect_into(&circles, &mut out);
        assert_eq!(out, vec![CollisionPair::new(0, 1)]);
    }
}

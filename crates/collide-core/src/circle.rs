// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Circle value type and the closed overlap predicate.

/// A circle in the plane: center plus radius, all `f32`.
///
/// Invariants (enforced at the buffer boundary, see [`crate::parse_circles`]):
/// - all components are finite,
/// - `radius >= 0.0`.
///
/// Identity is not part of the value; a circle is identified by its record
/// index in the input buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center x coordinate.
    pub x: f32,
    /// Center y coordinate.
    pub y: f32,
    /// Radius. Non-negative; zero is a point.
    pub radius: f32,
}

impl Circle {
    /// Constructs a circle from its center and radius.
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    /// Returns `true` if this circle overlaps `other` (closed predicate:
    /// tangency counts).
    ///
    /// Evaluated as `dx*dx + dy*dy <= (r_a + r_b)^2` entirely in `f32`.
    /// The squared comparison in storage precision is the contract; it avoids
    /// a square root per pair and keeps tangency decisions stable.
    pub fn overlaps(&self, other: &Self) -> bool {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let reach = self.radius + other.radius;
        dx * dx + dy * dy <= reach * reach
    }

    /// Minimum corner of the circle's axis-aligned bounding box.
    pub(crate) fn aabb_min(&self) -> (f32, f32) {
        (self.x - self.radius, self.y - self.radius)
    }

    /// Maximum corner of the circle's axis-aligned bounding box.
    pub(crate) fn aabb_max(&self) -> (f32, f32) {
        (self.x + self.radius, self.y + self.radius)
    }
}

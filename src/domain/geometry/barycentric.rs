//! Barycentric mapping between triangle points and priority weights.

use serde::{Deserialize, Serialize};

use super::{signed_area2, GeometryError, Point2D, Triangle, VertexOrder, DEGENERATE_AREA_EPSILON};
use crate::domain::foundation::ValidationError;
use crate::domain::weights::{Channel, WeightVector};

/// Default tolerance for treating a point on an edge as inside.
pub const DEFAULT_INSIDE_TOLERANCE: f64 = 1e-4;

/// Signed barycentric coordinates in top/left/right slot order.
///
/// The three components sum to 1 for any point; they are all non-negative
/// only when the point lies inside the triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Barycentric {
    pub top: f64,
    pub left: f64,
    pub right: f64,
}

impl Barycentric {
    pub fn as_array(&self) -> [f64; 3] {
        [self.top, self.left, self.right]
    }

    pub fn sum(&self) -> f64 {
        self.top + self.left + self.right
    }
}

/// Stateless conversions between triangle points and weights.
pub struct BarycentricMapper;

impl BarycentricMapper {
    /// Computes the barycentric coordinates of `point`.
    ///
    /// Each slot weight is the doubled signed area of the sub-triangle
    /// opposite that vertex divided by the doubled signed area of the whole
    /// triangle. The right weight is taken as the complement so the sum is 1
    /// up to floating error, inside or not.
    ///
    /// # Errors
    /// - `DegenerateTriangle` when the triangle has (near) zero area
    /// - `NonFiniteCoordinate` when the point or a vertex is NaN/infinite
    pub fn point_to_weights(point: Point2D, triangle: &Triangle) -> Result<Barycentric, GeometryError> {
        if !point.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate);
        }
        triangle.validate()?;

        let total = triangle.signed_area2();
        if total.abs() <= DEGENERATE_AREA_EPSILON {
            return Err(GeometryError::DegenerateTriangle { area2: total });
        }

        let top = signed_area2(point, triangle.left, triangle.right) / total;
        let left = signed_area2(point, triangle.right, triangle.top) / total;
        let right = 1.0 - top - left;

        Ok(Barycentric { top, left, right })
    }

    /// True when every component is at least `-tolerance`.
    pub fn is_inside(weights: &Barycentric, tolerance: f64) -> bool {
        weights.as_array().iter().all(|w| *w >= -tolerance)
    }

    /// Remaps slot weights onto channels and renormalizes to sum 1.
    ///
    /// Slightly negative components (points on an edge within tolerance)
    /// count as zero.
    pub fn weights_to_channels(
        weights: &Barycentric,
        order: &VertexOrder,
    ) -> Result<WeightVector, ValidationError> {
        let mut by_channel = [0.0; 3];
        for (channel, weight) in order.slots().iter().zip(weights.as_array()) {
            by_channel[channel.index()] = weight;
        }
        WeightVector::normalized(by_channel[0], by_channel[1], by_channel[2])
    }

    /// Inverse mapping: the point whose barycentric coordinates equal the
    /// channel weights placed in slot order.
    pub fn channels_to_point(weights: &WeightVector, order: &VertexOrder, triangle: &Triangle) -> Point2D {
        let slot_weights = Self::channels_to_slots(weights, order);
        let [top, left, right] = triangle.vertices();

        Point2D::new(
            slot_weights[0] * top.x + slot_weights[1] * left.x + slot_weights[2] * right.x,
            slot_weights[0] * top.y + slot_weights[1] * left.y + slot_weights[2] * right.y,
        )
    }

    /// Channel weights rearranged into top/left/right slot order.
    pub fn channels_to_slots(weights: &WeightVector, order: &VertexOrder) -> [f64; 3] {
        order.slots().map(|channel: Channel| weights.get(channel))
    }
}

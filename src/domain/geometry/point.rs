//! Plane points and the selection triangle.

use serde::{Deserialize, Serialize};

use super::GeometryError;

/// Total doubled area at or below which a triangle counts as degenerate.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

/// A point in screen or image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Twice the signed area of triangle `abc`.
///
/// Positive for one winding, negative for the other, zero when collinear.
pub fn signed_area2(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// The selection triangle, vertices in fixed top/left/right order.
///
/// Vertex positions come from an external detector and are fixed for the
/// lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub top: Point2D,
    pub left: Point2D,
    pub right: Point2D,
}

impl Triangle {
    /// Creates a triangle, rejecting non-finite or collinear vertices.
    pub fn new(top: Point2D, left: Point2D, right: Point2D) -> Result<Self, GeometryError> {
        let triangle = Self { top, left, right };
        triangle.validate()?;
        Ok(triangle)
    }

    /// Checks that the vertices are finite and not collinear.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.vertices().iter().all(Point2D::is_finite) {
            return Err(GeometryError::NonFiniteCoordinate);
        }
        let area2 = self.signed_area2();
        if area2.abs() <= DEGENERATE_AREA_EPSILON {
            return Err(GeometryError::DegenerateTriangle { area2 });
        }
        Ok(())
    }

    /// Twice the signed area, in top/left/right winding.
    pub fn signed_area2(&self) -> f64 {
        signed_area2(self.top, self.left, self.right)
    }

    /// Vertices in slot order.
    pub fn vertices(&self) -> [Point2D; 3] {
        [self.top, self.left, self.right]
    }

    /// Arithmetic mean of the vertices.
    pub fn centroid(&self) -> Point2D {
        Point2D::new(
            (self.top.x + self.left.x + self.right.x) / 3.0,
            (self.top.y + self.left.y + self.right.y) / 3.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_area_flips_with_winding() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(4.0, 0.0);
        let c = Point2D::new(0.0, 3.0);
        assert_eq!(signed_area2(a, b, c), 12.0);
        assert_eq!(signed_area2(a, c, b), -12.0);
    }

    #[test]
    fn triangle_new_accepts_screen_triangle() {
        let t = Triangle::new(
            Point2D::new(100.0, 0.0),
            Point2D::new(0.0, 173.0),
            Point2D::new(200.0, 173.0),
        );
        assert!(t.is_ok());
    }

    #[test]
    fn triangle_new_rejects_collinear_vertices() {
        let result = Triangle::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 2.0),
        );
        assert!(matches!(result, Err(GeometryError::DegenerateTriangle { .. })));
    }

    #[test]
    fn triangle_new_rejects_repeated_vertex() {
        let p = Point2D::new(5.0, 5.0);
        let result = Triangle::new(p, p, Point2D::new(9.0, 1.0));
        assert!(matches!(result, Err(GeometryError::DegenerateTriangle { .. })));
    }

    #[test]
    fn triangle_new_rejects_nan_vertex() {
        let result = Triangle::new(
            Point2D::new(f64::NAN, 0.0),
            Point2D::new(0.0, 1.0),
            Point2D::new(1.0, 1.0),
        );
        assert_eq!(result, Err(GeometryError::NonFiniteCoordinate));
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let t = Triangle {
            top: Point2D::new(3.0, 0.0),
            left: Point2D::new(0.0, 6.0),
            right: Point2D::new(6.0, 6.0),
        };
        assert_eq!(t.centroid(), Point2D::new(3.0, 4.0));
    }
}

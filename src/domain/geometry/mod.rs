//! Geometry module - Triangle selection and barycentric weights.
//!
//! A user picks priorities by pointing inside a triangle whose vertices stand
//! for cost, quality and schedule. This module converts between that point
//! and the three channel weights.

mod barycentric;
mod point;
mod vertex_order;

pub use barycentric::{Barycentric, BarycentricMapper, DEFAULT_INSIDE_TOLERANCE};
pub use point::{signed_area2, Point2D, Triangle, DEGENERATE_AREA_EPSILON};
pub use vertex_order::VertexOrder;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Geometry configuration errors.
///
/// These make the mapping undefined and are kept distinct from data errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Triangle is degenerate (doubled area {area2}); vertices must not be collinear")]
    DegenerateTriangle { area2: f64 },

    #[error("Point or vertex has a non-finite coordinate")]
    NonFiniteCoordinate,
}

impl From<GeometryError> for DomainError {
    fn from(err: GeometryError) -> Self {
        let code = match &err {
            GeometryError::DegenerateTriangle { .. } => ErrorCode::DegenerateTriangle,
            GeometryError::NonFiniteCoordinate => ErrorCode::NonFiniteCoordinate,
        };
        DomainError::new(code, err.to_string())
    }
}

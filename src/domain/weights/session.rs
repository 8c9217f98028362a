//! Priority selection session.
//!
//! Holds the state of one user choosing priorities: the fixed triangle, the
//! vertex assignment and the current percent split. It replaces process-wide
//! UI state; the caller owns it and passes it where needed.

use serde::Serialize;
use tracing::{debug, warn};

use super::{Channel, PercentSplit, WeightError, WeightVector};
use crate::domain::geometry::{
    BarycentricMapper, GeometryError, Point2D, Triangle, VertexOrder, DEFAULT_INSIDE_TOLERANCE,
};

/// What a click on the triangle did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClickOutcome {
    /// The click was inside; the split now reflects the clicked point.
    Selected { split: PercentSplit },
    /// The click was outside; the split was reset to the neutral zero state.
    Cleared,
}

/// Interactive priority selection for one user.
#[derive(Debug, Clone)]
pub struct PrioritySession {
    triangle: Triangle,
    vertex_order: VertexOrder,
    inside_tolerance: f64,
    split: PercentSplit,
}

impl PrioritySession {
    /// Starts a session with an even split.
    ///
    /// # Errors
    /// Rejects a degenerate or non-finite triangle up front.
    pub fn new(triangle: Triangle, vertex_order: VertexOrder) -> Result<Self, GeometryError> {
        triangle.validate()?;
        Ok(Self {
            triangle,
            vertex_order,
            inside_tolerance: DEFAULT_INSIDE_TOLERANCE,
            split: PercentSplit::even(),
        })
    }

    /// Overrides the edge tolerance used to accept clicks.
    pub fn with_inside_tolerance(mut self, tolerance: f64) -> Self {
        self.inside_tolerance = tolerance.abs();
        self
    }

    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    pub fn vertex_order(&self) -> &VertexOrder {
        &self.vertex_order
    }

    /// The current percent split.
    pub fn split(&self) -> PercentSplit {
        self.split
    }

    /// Selects priorities from a point on the triangle.
    ///
    /// A point outside the triangle (beyond the tolerance) resets the split
    /// to zero instead of failing; the caller decides whether to prompt again.
    pub fn click(&mut self, point: Point2D) -> Result<ClickOutcome, GeometryError> {
        let slots = BarycentricMapper::point_to_weights(point, &self.triangle)?;

        if !BarycentricMapper::is_inside(&slots, self.inside_tolerance) {
            warn!(x = point.x, y = point.y, "Click outside priority triangle, clearing selection");
            self.split = PercentSplit::cleared();
            return Ok(ClickOutcome::Cleared);
        }

        let Ok(weights) = BarycentricMapper::weights_to_channels(&slots, &self.vertex_order) else {
            self.split = PercentSplit::cleared();
            return Ok(ClickOutcome::Cleared);
        };

        self.split = PercentSplit::from_weights(&weights);
        debug!(%weights, "Priorities selected from triangle");
        Ok(ClickOutcome::Selected { split: self.split })
    }

    /// Edits one percentage field directly, rebalancing the other two.
    pub fn edit(&mut self, channel: Channel, value: f64) -> PercentSplit {
        self.split = self.split.rebalance(channel, value);
        debug!(
            channel = %channel,
            value,
            cost = self.split.cost().value(),
            quality = self.split.quality().value(),
            schedule = self.split.schedule().value(),
            "Priority field edited"
        );
        self.split
    }

    /// Where the current selection should be drawn.
    ///
    /// `None` when the split is cleared.
    pub fn selection_point(&self) -> Option<Point2D> {
        let weights = self.split.to_weights().ok()?;
        Some(BarycentricMapper::channels_to_point(
            &weights,
            &self.vertex_order,
            &self.triangle,
        ))
    }

    /// Human-readable summary shown before the user confirms.
    pub fn confirmation_summary(&self) -> String {
        format!(
            "Your priorities for choosing a solution:\n\n\
             {:.2}% weight on annual cost,\n\
             {:.2}% on quality (fit to your requirements) and\n\
             {:.2}% on schedule.",
            self.split.cost().value(),
            self.split.quality().value(),
            self.split.schedule().value(),
        )
    }

    /// Confirms the current selection as a fractional weight vector.
    pub fn confirm(&self) -> Result<WeightVector, WeightError> {
        self.split.to_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Triangle {
        Triangle::new(
            Point2D::new(100.0, 0.0),
            Point2D::new(0.0, 200.0),
            Point2D::new(200.0, 200.0),
        )
        .unwrap()
    }

    fn session() -> PrioritySession {
        PrioritySession::new(triangle(), VertexOrder::default()).unwrap()
    }

    #[test]
    fn new_session_starts_even() {
        let s = session();
        assert!((s.split().total() - 100.0).abs() < 1e-9);
        assert!((s.split().cost().value() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn new_session_rejects_degenerate_triangle() {
        let flat = Triangle {
            top: Point2D::new(0.0, 0.0),
            left: Point2D::new(1.0, 0.0),
            right: Point2D::new(2.0, 0.0),
        };
        assert!(PrioritySession::new(flat, VertexOrder::default()).is_err());
    }

    #[test]
    fn click_on_vertex_selects_its_channel() {
        let mut s = session();
        // left vertex is cost under the default order
        let outcome = s.click(Point2D::new(0.0, 200.0)).unwrap();

        match outcome {
            ClickOutcome::Selected { split } => {
                assert!((split.cost().value() - 100.0).abs() < 1e-9);
                assert!(split.quality().value() < 1e-9);
                assert!(split.schedule().value() < 1e-9);
            }
            ClickOutcome::Cleared => panic!("Expected selection"),
        }
    }

    #[test]
    fn click_outside_clears_selection() {
        let mut s = session();
        let outcome = s.click(Point2D::new(-50.0, -50.0)).unwrap();

        assert_eq!(outcome, ClickOutcome::Cleared);
        assert!(s.split().is_cleared());
        assert!(s.selection_point().is_none());
        assert_eq!(s.confirm(), Err(WeightError::NoPriorities));
    }

    #[test]
    fn edit_after_clear_recovers() {
        let mut s = session();
        s.click(Point2D::new(-50.0, -50.0)).unwrap();
        let split = s.edit(Channel::Quality, 50.0);

        assert_eq!(split.quality().value(), 50.0);
        assert_eq!(split.cost().value(), 25.0);
        assert!(s.confirm().is_ok());
    }

    #[test]
    fn selection_point_tracks_typed_input() {
        let mut s = session();
        s.edit(Channel::Schedule, 100.0);

        // schedule is the top vertex
        let p = s.selection_point().unwrap();
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn click_then_confirm_roundtrips_through_point() {
        let mut s = session();
        let clicked = Point2D::new(90.0, 120.0);
        s.click(clicked).unwrap();

        let p = s.selection_point().unwrap();
        assert!((p.x - clicked.x).abs() < 1e-6);
        assert!((p.y - clicked.y).abs() < 1e-6);

        let weights = s.confirm().unwrap();
        assert!((weights.as_array().iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn confirmation_summary_lists_percentages() {
        let mut s = session();
        s.edit(Channel::Cost, 50.0);
        let text = s.confirmation_summary();

        assert!(text.contains("50.00% weight on annual cost"));
        assert!(text.contains("25.00% on quality"));
        assert!(text.contains("25.00% on schedule"));
    }
}

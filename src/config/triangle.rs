//! Priority triangle configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::geometry::{VertexOrder, DEFAULT_INSIDE_TOLERANCE};

/// Vertex assignment and click tolerance
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TriangleConfig {
    /// Channels at the top, left and right vertices, comma-separated
    #[serde(default = "default_vertex_order")]
    pub vertex_order: String,

    /// How far outside an edge a click may land and still count
    #[serde(default = "default_inside_tolerance")]
    pub inside_tolerance: f64,
}

impl TriangleConfig {
    /// Parsed vertex assignment
    pub fn vertex_order(&self) -> Result<VertexOrder, ValidationError> {
        self.vertex_order
            .parse()
            .map_err(|e: crate::domain::foundation::ValidationError| {
                ValidationError::InvalidVertexOrder(e.to_string())
            })
    }

    /// Validate triangle configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.vertex_order()?;
        if !(0.0..=0.1).contains(&self.inside_tolerance) {
            return Err(ValidationError::InvalidTolerance);
        }
        Ok(())
    }
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            vertex_order: default_vertex_order(),
            inside_tolerance: default_inside_tolerance(),
        }
    }
}

fn default_vertex_order() -> String {
    VertexOrder::default().to_string()
}

fn default_inside_tolerance() -> f64 {
    DEFAULT_INSIDE_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weights::Channel;

    #[test]
    fn test_triangle_config_defaults() {
        let config = TriangleConfig::default();
        assert_eq!(config.vertex_order, "schedule,cost,quality");
        assert_eq!(config.inside_tolerance, 1e-4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_vertex_order_parses() {
        let config = TriangleConfig {
            vertex_order: "cost, quality, schedule".to_string(),
            ..Default::default()
        };
        assert_eq!(config.vertex_order().unwrap().channel_at(0), Some(Channel::Cost));
    }

    #[test]
    fn test_rejects_repeated_channel() {
        let config = TriangleConfig {
            vertex_order: "cost,cost,quality".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidVertexOrder(_))));
    }

    #[test]
    fn test_rejects_out_of_range_tolerance() {
        let config = TriangleConfig {
            inside_tolerance: 0.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTolerance)));

        let config = TriangleConfig {
            inside_tolerance: -1e-4,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

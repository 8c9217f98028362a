//! Assignment of priority channels to triangle vertices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;
use crate::domain::weights::Channel;

/// Which channel each vertex stands for, in top/left/right slot order.
///
/// Always a permutation of the three channels. The default puts schedule at
/// the top, cost at the bottom left and quality at the bottom right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VertexOrder([Channel; 3]);

impl VertexOrder {
    /// Creates an assignment, rejecting repeated channels.
    pub fn try_new(top: Channel, left: Channel, right: Channel) -> Result<Self, ValidationError> {
        if top == left || top == right || left == right {
            return Err(ValidationError::invalid_format(
                "vertex_order",
                format!("channels must be distinct, got {},{},{}", top, left, right),
            ));
        }
        Ok(Self([top, left, right]))
    }

    /// Channel at a slot (0 = top, 1 = left, 2 = right).
    pub fn channel_at(&self, slot: usize) -> Option<Channel> {
        self.0.get(slot).copied()
    }

    /// Channels in slot order.
    pub fn slots(&self) -> [Channel; 3] {
        self.0
    }
}

impl Default for VertexOrder {
    fn default() -> Self {
        Self([Channel::Schedule, Channel::Cost, Channel::Quality])
    }
}

impl fmt::Display for VertexOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for VertexOrder {
    type Err = ValidationError;

    /// Parses `"top,left,right"`, e.g. `"schedule,cost,quality"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        let [top, left, right] = parts.as_slice() else {
            return Err(ValidationError::invalid_format(
                "vertex_order",
                format!("expected three comma-separated channels, got '{}'", s),
            ));
        };
        Self::try_new(top.parse()?, left.parse()?, right.parse()?)
    }
}

impl TryFrom<String> for VertexOrder {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VertexOrder> for String {
    fn from(order: VertexOrder) -> Self {
        order.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_schedule_cost_quality() {
        assert_eq!(
            VertexOrder::default().slots(),
            [Channel::Schedule, Channel::Cost, Channel::Quality]
        );
    }

    #[test]
    fn parses_comma_separated_channels() {
        let order: VertexOrder = "quality, schedule, cost".parse().unwrap();
        assert_eq!(order.channel_at(0), Some(Channel::Quality));
        assert_eq!(order.channel_at(1), Some(Channel::Schedule));
        assert_eq!(order.channel_at(2), Some(Channel::Cost));
        assert_eq!(order.channel_at(3), None);
    }

    #[test]
    fn rejects_repeated_channel() {
        assert!("cost,cost,quality".parse::<VertexOrder>().is_err());
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!("cost,quality".parse::<VertexOrder>().is_err());
        assert!("cost,quality,schedule,cost".parse::<VertexOrder>().is_err());
    }

    #[test]
    fn serde_uses_display_form() {
        let json = serde_json::to_string(&VertexOrder::default()).unwrap();
        assert_eq!(json, "\"schedule,cost,quality\"");
        let back: VertexOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VertexOrder::default());
    }
}

//! The three priority channels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A priority dimension a user can weight.
///
/// Cost and schedule are penalties (higher Z-score is worse); quality is a
/// reward (higher Z-score is better).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Cost,
    Quality,
    Schedule,
}

impl Channel {
    /// All channels in canonical (cost, quality, schedule) order.
    pub const ALL: [Channel; 3] = [Channel::Cost, Channel::Quality, Channel::Schedule];

    /// Position of this channel in canonical order.
    pub fn index(&self) -> usize {
        match self {
            Channel::Cost => 0,
            Channel::Quality => 1,
            Channel::Schedule => 2,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Cost => "cost",
            Channel::Quality => "quality",
            Channel::Schedule => "schedule",
        }
    }

    /// The two channels other than this one, in canonical order.
    pub fn others(&self) -> [Channel; 2] {
        match self {
            Channel::Cost => [Channel::Quality, Channel::Schedule],
            Channel::Quality => [Channel::Cost, Channel::Schedule],
            Channel::Schedule => [Channel::Cost, Channel::Quality],
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Channel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cost" | "c" => Ok(Channel::Cost),
            "quality" | "q" => Ok(Channel::Quality),
            "schedule" | "s" => Ok(Channel::Schedule),
            other => Err(ValidationError::invalid_format(
                "channel",
                format!("unknown channel '{}'", other),
            )),
        }
    }
}

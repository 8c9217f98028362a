//! Hierarchical `major.minor.leaf` coordinate codes.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::roman::{parse_roman, to_roman};
use crate::domain::foundation::ValidationError;

/// A parsed coordinate such as `II.3.b`.
///
/// Ordering compares the major value, then the minor number, then the leaf
/// letter. The textual form of the major is not kept; `ii.3.B` and `II-3-b`
/// are the same coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    major: u32,
    minor: u32,
    leaf: char,
}

impl Coordinate {
    /// Builds a coordinate from its parts.
    ///
    /// # Errors
    /// - `OutOfRange` when `major` is not a valid numeral value or `minor` is 0
    /// - `InvalidFormat` when `leaf` is not an ASCII letter
    pub fn new(major: u32, minor: u32, leaf: char) -> Result<Self, ValidationError> {
        if to_roman(major).is_none() {
            return Err(ValidationError::out_of_range(
                "coordinate.major",
                1.0,
                f64::from(super::roman::MAX_ROMAN),
                f64::from(major),
            ));
        }
        if minor == 0 {
            return Err(ValidationError::out_of_range(
                "coordinate.minor",
                1.0,
                f64::from(u32::MAX),
                0.0,
            ));
        }
        if !leaf.is_ascii_alphabetic() {
            return Err(ValidationError::invalid_format(
                "coordinate.leaf",
                format!("'{}' is not a letter", leaf),
            ));
        }
        Ok(Self {
            major,
            minor,
            leaf: leaf.to_ascii_lowercase(),
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn leaf(&self) -> char {
        self.leaf
    }

    /// Major value as a canonical numeral.
    pub fn major_numeral(&self) -> String {
        to_roman(self.major).unwrap_or_default()
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.leaf.cmp(&other.leaf))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major_numeral(), self.minor, self.leaf)
    }
}

impl FromStr for Coordinate {
    type Err = ValidationError;

    /// Parses `<roman><sep><digits><sep><letter>` where each separator is
    /// `.` or `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("coordinate"));
        }

        let parts: Vec<&str> = trimmed.split(['.', '-']).collect();
        let [major, minor, leaf] = parts.as_slice() else {
            return Err(ValidationError::invalid_format(
                "coordinate",
                format!("expected major.minor.leaf, got '{}'", trimmed),
            ));
        };

        let major = parse_roman(major)?;

        if minor.is_empty() || !minor.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "coordinate.minor",
                format!("'{}' is not a positive integer", minor),
            ));
        }
        let minor: u32 = minor.parse().map_err(|_| {
            ValidationError::invalid_format("coordinate.minor", format!("'{}' is too large", minor))
        })?;

        let mut letters = leaf.chars();
        let (Some(letter), None) = (letters.next(), letters.next()) else {
            return Err(ValidationError::invalid_format(
                "coordinate.leaf",
                format!("expected a single letter, got '{}'", leaf),
            ));
        };

        Self::new(major, minor, letter)
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

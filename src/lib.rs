//! Priority Triangle - Weighted Ranking of Decision Alternatives
//!
//! A decision maker places a point inside a triangle whose vertices stand for
//! cost, quality and schedule. The point's barycentric weights drive an
//! uncertainty-aware ranking of alternatives read from a table, which is then
//! normalized for display, grouped into tiers and arranged in a coordinate tree.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

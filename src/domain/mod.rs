//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `geometry` - Triangle, points and barycentric mapping
//! - `weights` - Weight vectors, percentage splits and the elicitation session
//! - `analysis` - Decision matrix, ranking, normalization and tier detection
//! - `coordinate` - Hierarchical coordinates and the coordinate tree

pub mod analysis;
pub mod coordinate;
pub mod foundation;
pub mod geometry;
pub mod weights;

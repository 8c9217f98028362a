//! Coordinate codes and the grouping tree built from them.

mod code;
mod roman;
mod tree;

pub use code::Coordinate;
pub use roman::{parse_roman, to_roman, MAX_ROMAN};
pub use tree::{CoordinateTree, MajorGroup, MinorGroup, TreeEntry};

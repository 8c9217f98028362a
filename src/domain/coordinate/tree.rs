//! Major/minor/leaf grouping of ranked alternatives.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::Coordinate;

/// One alternative placed in the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEntry {
    pub coordinate: Coordinate,
    pub id: String,
    pub ranking_score: f64,
    pub display_score: f64,
    pub tier: u32,
}

/// All leaves sharing a major and minor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinorGroup {
    pub minor: u32,
    pub leaves: Vec<TreeEntry>,
}

/// All minors under one major.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MajorGroup {
    pub major: u32,
    pub numeral: String,
    pub minors: Vec<MinorGroup>,
}

/// Alternatives grouped by coordinate, majors and minors ascending.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CoordinateTree {
    pub majors: Vec<MajorGroup>,
}

impl CoordinateTree {
    /// Groups entries by major, then minor.
    ///
    /// Within a minor, leaves follow coordinate order; entries sharing a
    /// coordinate are ordered by descending ranking score.
    pub fn build(entries: impl IntoIterator<Item = TreeEntry>) -> Self {
        let mut grouped: BTreeMap<u32, BTreeMap<u32, Vec<TreeEntry>>> = BTreeMap::new();
        for entry in entries {
            grouped
                .entry(entry.coordinate.major())
                .or_default()
                .entry(entry.coordinate.minor())
                .or_default()
                .push(entry);
        }

        let majors = grouped
            .into_iter()
            .map(|(major, minors)| MajorGroup {
                major,
                numeral: super::to_roman(major).unwrap_or_default(),
                minors: minors
                    .into_iter()
                    .map(|(minor, mut leaves)| {
                        leaves.sort_by(compare_leaves);
                        MinorGroup { minor, leaves }
                    })
                    .collect(),
            })
            .collect();

        Self { majors }
    }

    pub fn is_empty(&self) -> bool {
        self.majors.is_empty()
    }

    /// Number of entries across all groups.
    pub fn len(&self) -> usize {
        self.leaves().count()
    }

    /// Every entry in tree order.
    pub fn leaves(&self) -> impl Iterator<Item = &TreeEntry> {
        self.majors
            .iter()
            .flat_map(|major| major.minors.iter())
            .flat_map(|minor| minor.leaves.iter())
    }
}

fn compare_leaves(a: &TreeEntry, b: &TreeEntry) -> Ordering {
    a.coordinate
        .cmp(&b.coordinate)
        .then_with(|| b.ranking_score.total_cmp(&a.ranking_score))
}

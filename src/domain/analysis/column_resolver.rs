//! Column Resolver - Maps free-form table headers onto decision matrix fields.
//!
//! Headers are matched against a declarative alias table once per table.
//! Scoring then works on the resulting fixed [`ColumnMap`] and never looks at
//! header text again.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode};

/// A semantic column of the decision matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixField {
    ZCost,
    ZQuality,
    ZSchedule,
    SCost,
    SQuality,
    SSchedule,
    Id,
    Name,
    Coordinate,
}

impl MatrixField {
    /// The six numeric columns every table must provide.
    pub const REQUIRED: [MatrixField; 6] = [
        MatrixField::ZCost,
        MatrixField::ZQuality,
        MatrixField::ZSchedule,
        MatrixField::SCost,
        MatrixField::SQuality,
        MatrixField::SSchedule,
    ];

    /// Order in which fields claim headers.
    ///
    /// Error-term columns go first: their aliases contain the Z-score
    /// aliases (`s_zcost` contains `zcost`), so the reverse order would let
    /// a Z-score field steal an error-term header.
    pub const RESOLUTION_ORDER: [MatrixField; 9] = [
        MatrixField::SCost,
        MatrixField::SQuality,
        MatrixField::SSchedule,
        MatrixField::ZCost,
        MatrixField::ZQuality,
        MatrixField::ZSchedule,
        MatrixField::Coordinate,
        MatrixField::Name,
        MatrixField::Id,
    ];

    /// Conventional header name, used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            MatrixField::ZCost => "ZCost",
            MatrixField::ZQuality => "ZQuality",
            MatrixField::ZSchedule => "ZSchedule",
            MatrixField::SCost => "s_ZCost",
            MatrixField::SQuality => "s_ZQuality",
            MatrixField::SSchedule => "s_ZSchedule",
            MatrixField::Id => "id",
            MatrixField::Name => "name",
            MatrixField::Coordinate => "coordinate",
        }
    }

    fn slot(&self) -> usize {
        match self {
            MatrixField::ZCost => 0,
            MatrixField::ZQuality => 1,
            MatrixField::ZSchedule => 2,
            MatrixField::SCost => 3,
            MatrixField::SQuality => 4,
            MatrixField::SSchedule => 5,
            MatrixField::Id => 6,
            MatrixField::Name => 7,
            MatrixField::Coordinate => 8,
        }
    }
}

impl fmt::Display for MatrixField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised while turning a raw table into a decision matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("Missing required columns: {}", join_fields(.missing))]
    MissingColumns { missing: Vec<MatrixField> },

    #[error("Table has no header row")]
    EmptyHeader,
}

fn join_fields(fields: &[MatrixField]) -> String {
    fields
        .iter()
        .map(MatrixField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<MatrixError> for DomainError {
    fn from(err: MatrixError) -> Self {
        match &err {
            MatrixError::MissingColumns { missing } => {
                DomainError::new(ErrorCode::MissingColumns, err.to_string())
                    .with_detail("missing", join_fields(missing))
            }
            MatrixError::EmptyHeader => DomainError::new(ErrorCode::EmptyTable, err.to_string()),
        }
    }
}

/// Lowercases and strips all whitespace, the form headers and aliases are
/// compared in.
pub fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Alias lists per field, in already-normalized form.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnAliases {
    aliases: HashMap<MatrixField, Vec<String>>,
}

impl ColumnAliases {
    /// An alias table with no entries.
    pub fn empty() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Replaces the aliases of one field.
    pub fn with_aliases<I, S>(mut self, field: MatrixField, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = aliases
            .into_iter()
            .map(|a| normalize_header(a.as_ref()))
            .filter(|a| !a.is_empty())
            .collect();
        self.aliases.insert(field, normalized);
        self
    }

    /// Adds one alias to a field, after the existing ones.
    pub fn with_alias(mut self, field: MatrixField, alias: &str) -> Self {
        let alias = normalize_header(alias);
        if !alias.is_empty() {
            self.aliases.entry(field).or_default().push(alias);
        }
        self
    }

    pub fn aliases(&self, field: MatrixField) -> &[String] {
        self.aliases.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for ColumnAliases {
    /// English and Portuguese header names seen in exported decision tables.
    fn default() -> Self {
        Self::empty()
            .with_aliases(MatrixField::ZCost, ["zcusto", "zcost"])
            .with_aliases(MatrixField::ZQuality, ["zqualidade", "zqual", "zquality"])
            .with_aliases(
                MatrixField::ZSchedule,
                ["zprazo", "zdeadline", "ztime", "zschedule"],
            )
            .with_aliases(MatrixField::SCost, ["s_zcusto", "szcusto", "s_zcost"])
            .with_aliases(
                MatrixField::SQuality,
                ["s_zqual", "s_zqualidade", "szqual", "s_zquality"],
            )
            .with_aliases(
                MatrixField::SSchedule,
                ["s_zprazo", "szprazo", "s_ztime", "s_zschedule"],
            )
            .with_aliases(MatrixField::Id, ["id", "alternativa", "opcao", "item"])
            .with_aliases(MatrixField::Name, ["name", "nome"])
            .with_aliases(MatrixField::Coordinate, ["coordinate", "coordenadas"])
    }
}

/// Resolved header positions for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnMap {
    positions: [Option<usize>; 9],
}

impl ColumnMap {
    /// Header index of a field, if resolved.
    pub fn get(&self, field: MatrixField) -> Option<usize> {
        self.positions[field.slot()]
    }

    fn set(&mut self, field: MatrixField, index: usize) {
        self.positions[field.slot()] = Some(index);
    }

    /// Required fields with no resolved column, in declaration order.
    pub fn missing_required(&self) -> Vec<MatrixField> {
        MatrixField::REQUIRED
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }
}

/// Resolves headers to fields using overrides first, then aliases.
///
/// For each field, in [`MatrixField::RESOLUTION_ORDER`]:
/// 1. an override header, compared exactly after trimming;
/// 2. a header whose normalized form equals an alias;
/// 3. the first header whose normalized form contains an alias.
///
/// A header claimed by one field is not offered to later fields.
#[derive(Debug, Clone, Default)]
pub struct ColumnResolver {
    aliases: ColumnAliases,
    overrides: HashMap<MatrixField, String>,
}

impl ColumnResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aliases(mut self, aliases: ColumnAliases) -> Self {
        self.aliases = aliases;
        self
    }

    /// Pins a field to an exact header name.
    ///
    /// A pinned field is never resolved through aliases; if the header is
    /// absent the field stays unresolved.
    pub fn with_override(mut self, field: MatrixField, header: impl Into<String>) -> Self {
        self.overrides.insert(field, header.into().trim().to_string());
        self
    }

    /// Resolves every field against a header row.
    ///
    /// # Errors
    /// - `EmptyHeader` when there are no headers at all
    /// - `MissingColumns` listing every required field left unresolved
    pub fn resolve(&self, headers: &[String]) -> Result<ColumnMap, MatrixError> {
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(MatrixError::EmptyHeader);
        }

        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        let mut claimed = vec![false; headers.len()];
        let mut map = ColumnMap::default();

        for field in MatrixField::RESOLUTION_ORDER {
            let found = match self.overrides.get(&field) {
                Some(pinned) => headers
                    .iter()
                    .enumerate()
                    .find(|(i, h)| !claimed[*i] && h.trim() == pinned.as_str())
                    .map(|(i, _)| i),
                None => self.match_alias(field, &normalized, &claimed),
            };

            if let Some(index) = found {
                claimed[index] = true;
                map.set(field, index);
                debug!(field = %field, header = %headers[index], index, "Resolved column");
            }
        }

        let missing = map.missing_required();
        if !missing.is_empty() {
            return Err(MatrixError::MissingColumns { missing });
        }
        Ok(map)
    }

    fn match_alias(&self, field: MatrixField, normalized: &[String], claimed: &[bool]) -> Option<usize> {
        let aliases = self.aliases.aliases(field);
        let open = || normalized.iter().enumerate().filter(|(i, _)| !claimed[*i]);

        open()
            .find(|(_, h)| aliases.iter().any(|a| *h == a))
            .or_else(|| open().find(|(_, h)| aliases.iter().any(|a| h.contains(a.as_str()))))
            .map(|(i, _)| i)
    }
}

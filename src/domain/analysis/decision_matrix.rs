//! Decision Matrix - Strongly-typed alternative rows built from a raw table.

use serde::{Deserialize, Serialize};

use super::{ColumnMap, ColumnResolver, MatrixError, MatrixField};

/// A table of text cells with a header row.
///
/// This is what any table source hands to the domain: the header and the
/// data rows in file order. Rows may be shorter than the header; missing
/// cells read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Creates a table with a header and no rows.
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a data row.
    pub fn with_row<I, S>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Cell text, empty when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parses a numeric cell leniently.
///
/// Surrounding whitespace is ignored and a decimal comma is read as a
/// period. Anything that does not parse to a finite number is 0.
pub fn parse_number(text: &str) -> f64 {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// One alternative with its standardized scores and their errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRow {
    /// Position in the source table, 0-based.
    pub index: usize,
    pub id: String,
    pub name: Option<String>,
    pub coordinate: Option<String>,
    pub z_cost: f64,
    pub z_quality: f64,
    pub z_schedule: f64,
    pub s_cost: f64,
    pub s_quality: f64,
    pub s_schedule: f64,
}

impl AlternativeRow {
    /// A row with all scores zero.
    pub fn new(index: usize, id: impl Into<String>) -> Self {
        Self {
            index,
            id: id.into(),
            name: None,
            coordinate: None,
            z_cost: 0.0,
            z_quality: 0.0,
            z_schedule: 0.0,
            s_cost: 0.0,
            s_quality: 0.0,
            s_schedule: 0.0,
        }
    }

    /// Sets the Z-scores for cost, quality and schedule.
    pub fn with_z(mut self, cost: f64, quality: f64, schedule: f64) -> Self {
        self.z_cost = cost;
        self.z_quality = quality;
        self.z_schedule = schedule;
        self
    }

    /// Sets the standard errors for cost, quality and schedule.
    pub fn with_errors(mut self, cost: f64, quality: f64, schedule: f64) -> Self {
        self.s_cost = cost;
        self.s_quality = quality;
        self.s_schedule = schedule;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_coordinate(mut self, coordinate: impl Into<String>) -> Self {
        self.coordinate = Some(coordinate.into());
        self
    }
}

/// The alternatives of one table, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    pub rows: Vec<AlternativeRow>,
}

impl DecisionMatrix {
    pub fn new(rows: Vec<AlternativeRow>) -> Self {
        Self { rows }
    }

    /// Resolves columns and converts every row.
    ///
    /// Column resolution happens first; if any required column is missing no
    /// row is converted. Each row's id comes from the id column, else the
    /// name column, else its 1-based position; an empty cell falls through
    /// to the next source.
    ///
    /// # Errors
    /// Whatever [`ColumnResolver::resolve`] reports for the header.
    pub fn from_table(table: &RawTable, resolver: &ColumnResolver) -> Result<Self, MatrixError> {
        let columns = resolver.resolve(&table.header)?;

        let rows = (0..table.row_count())
            .map(|index| Self::convert_row(table, &columns, index))
            .collect();

        Ok(Self { rows })
    }

    fn convert_row(table: &RawTable, columns: &ColumnMap, index: usize) -> AlternativeRow {
        let text = |field: MatrixField| {
            columns
                .get(field)
                .map(|col| table.cell(index, col).trim())
                .filter(|s| !s.is_empty())
        };
        let number = |field: MatrixField| text(field).map(parse_number).unwrap_or(0.0);

        let name = text(MatrixField::Name).map(str::to_string);
        let id = text(MatrixField::Id)
            .map(str::to_string)
            .or_else(|| name.clone())
            .unwrap_or_else(|| (index + 1).to_string());

        AlternativeRow {
            index,
            id,
            name,
            coordinate: text(MatrixField::Coordinate).map(str::to_string),
            z_cost: number(MatrixField::ZCost),
            z_quality: number(MatrixField::ZQuality),
            z_schedule: number(MatrixField::ZSchedule),
            s_cost: number(MatrixField::SCost),
            s_quality: number(MatrixField::SQuality),
            s_schedule: number(MatrixField::SSchedule),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

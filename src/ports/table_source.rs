//! Table Source Port - Where decision tables come from.
//!
//! The domain only ever sees a `RawTable`. Adapters decide whether that
//! table was read from disk, pasted text or built in memory.

use thiserror::Error;

use crate::domain::analysis::RawTable;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur while loading a table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableSourceError {
    #[error("Table not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Table is not valid text: {0}")]
    InvalidEncoding(String),
}

impl From<TableSourceError> for DomainError {
    fn from(err: TableSourceError) -> Self {
        DomainError::new(ErrorCode::TableUnavailable, err.to_string())
    }
}

/// Port for loading the decision table of a scoring pass.
///
/// # Contract
///
/// Implementations must:
/// - Return the header as the first row and data rows in source order
/// - Leave numeric interpretation to the domain (cells are plain text)
/// - Be repeatable: loading twice yields the same table unless the
///   underlying source changed
pub trait TableSource: Send + Sync {
    /// Loads the table.
    ///
    /// # Errors
    ///
    /// Returns `TableSourceError::NotFound` if the source does not exist.
    fn load(&self) -> Result<RawTable, TableSourceError>;

    /// Short description for logs, e.g. a file path.
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn TableSource) {}

    #[test]
    fn errors_map_to_table_unavailable() {
        let err: DomainError = TableSourceError::NotFound("alts.csv".to_string()).into();
        assert_eq!(err.code, ErrorCode::TableUnavailable);
        assert_eq!(err.message, "Table not found: alts.csv");
    }
}

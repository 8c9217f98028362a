//! In-memory table source for tests and pasted text.

use super::DelimitedTableParser;
use crate::domain::analysis::RawTable;
use crate::ports::{TableSource, TableSourceError};

/// Serves a fixed table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableSource {
    table: RawTable,
}

impl InMemoryTableSource {
    pub fn new(table: RawTable) -> Self {
        Self { table }
    }

    /// Parses delimited text once up front.
    pub fn from_text(text: &str) -> Self {
        Self::new(DelimitedTableParser::new().parse(text))
    }
}

impl TableSource for InMemoryTableSource {
    fn load(&self) -> Result<RawTable, TableSourceError> {
        Ok(self.table.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory table ({} rows)", self.table.row_count())
    }
}

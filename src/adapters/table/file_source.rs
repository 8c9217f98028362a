//! Filesystem table source reading delimited text files.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::DelimitedTableParser;
use crate::domain::analysis::RawTable;
use crate::ports::{TableSource, TableSourceError};

/// Reads a CSV (or semicolon separated) file on every load.
#[derive(Debug, Clone)]
pub struct FileTableSource {
    path: PathBuf,
    parser: DelimitedTableParser,
}

impl FileTableSource {
    /// Create a source for `path` with delimiter detection.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            parser: DelimitedTableParser::new(),
        }
    }

    /// Use a specific parser, e.g. one with a fixed delimiter.
    pub fn with_parser(mut self, parser: DelimitedTableParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSource for FileTableSource {
    fn load(&self) -> Result<RawTable, TableSourceError> {
        let text = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TableSourceError::NotFound(self.path.display().to_string()),
            ErrorKind::InvalidData => TableSourceError::InvalidEncoding(format!(
                "{} is not UTF-8",
                self.path.display()
            )),
            _ => TableSourceError::IoError(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            )),
        })?;

        let table = self.parser.parse(&text);
        debug!(
            path = %self.path.display(),
            columns = table.header.len(),
            rows = table.row_count(),
            "Loaded table file"
        );
        Ok(table)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

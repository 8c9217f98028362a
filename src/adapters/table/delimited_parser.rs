//! Delimited text parser producing raw tables.
//!
//! Handles the plain exports spreadsheet tools produce: comma or semicolon
//! separated, no quoting, first line is the header.

use crate::domain::analysis::RawTable;

const BOM: char = '\u{feff}';

/// Splits delimited text into a header and rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelimitedTableParser {
    delimiter: Option<char>,
}

impl DelimitedTableParser {
    /// A parser that detects the delimiter per input.
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser that always splits on `delimiter`.
    pub fn with_delimiter(delimiter: char) -> Self {
        Self {
            delimiter: Some(delimiter),
        }
    }

    /// Semicolon when the text has semicolons and no commas, else comma.
    ///
    /// Locales that write decimal commas export with semicolons, so a comma
    /// anywhere means the file is comma separated.
    pub fn detect_delimiter(text: &str) -> char {
        if text.contains(';') && !text.contains(',') {
            ';'
        } else {
            ','
        }
    }

    /// Parses `text` into a table.
    ///
    /// Carriage returns and blank lines are dropped and every cell is
    /// trimmed. Rows are padded with empty cells or cut to the header width.
    /// Empty input gives a table with no header.
    pub fn parse(&self, text: &str) -> RawTable {
        let text = text.strip_prefix(BOM).unwrap_or(text);
        let delimiter = self
            .delimiter
            .unwrap_or_else(|| Self::detect_delimiter(text));

        let mut lines = text
            .split('\n')
            .map(|line| line.replace('\r', ""))
            .filter(|line| !line.trim().is_empty());

        let Some(header_line) = lines.next() else {
            return RawTable::default();
        };
        let header = split_cells(&header_line, delimiter);
        let width = header.len();

        let rows = lines
            .map(|line| {
                let mut cells = split_cells(&line, delimiter);
                cells.resize(width, String::new());
                cells
            })
            .collect();

        RawTable { header, rows }
    }
}

fn split_cells(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(|c| c.trim().to_string()).collect()
}

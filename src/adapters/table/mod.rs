//! Table Adapters
//!
//! Implementations of the TableSource port.
//!
//! - **FileTableSource** - Reads delimited text files from disk
//! - **InMemoryTableSource** - Serves a fixed table (tests, pasted text)
//!
//! Both parse text with `DelimitedTableParser`.

mod delimited_parser;
mod file_source;
mod in_memory;

pub use delimited_parser::DelimitedTableParser;
pub use file_source::FileTableSource;
pub use in_memory::InMemoryTableSource;

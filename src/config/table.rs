//! Decision table configuration

use serde::Deserialize;
use std::collections::HashMap;

use super::error::ValidationError;
use crate::domain::analysis::{ColumnResolver, MatrixField};

/// How input tables are split and how their headers are matched
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TableConfig {
    /// Fixed cell delimiter; detected per file when unset
    pub delimiter: Option<String>,

    /// Exact header pinned per field, e.g. `z_cost = "Custo Ajustado"`
    #[serde(default)]
    pub overrides: HashMap<MatrixField, String>,
}

impl TableConfig {
    /// The configured delimiter character, if any
    pub fn delimiter(&self) -> Result<Option<char>, ValidationError> {
        let Some(text) = self.delimiter.as_deref() else {
            return Ok(None);
        };
        // "\t" is accepted so tab-separated files can be configured from env
        if text == "\\t" {
            return Ok(Some('\t'));
        }
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Some(c)),
            _ => Err(ValidationError::InvalidDelimiter(text.to_string())),
        }
    }

    /// Column resolver with the default aliases and the configured overrides
    pub fn resolver(&self) -> ColumnResolver {
        self.overrides
            .iter()
            .fold(ColumnResolver::new(), |resolver, (field, header)| {
                resolver.with_override(*field, header.clone())
            })
    }

    /// Validate table configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.delimiter()?;
        Ok(())
    }
}

//! Raw table access: whole-file reads and `;`-separated row splitting.

use crate::error::{CatalogueError, Result, RowError};
use std::path::Path;
use std::str::FromStr;

/// Field separator of both reference tables
pub const FIELD_SEPARATOR: char = ';';

/// One record of a reference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    /// 1-based line number in the source text
    pub line: usize,
    pub fields: Vec<&'a str>,
}

impl<'a> Row<'a> {
    pub fn parse(line: usize, text: &'a str) -> Self {
        Self {
            line,
            fields: text.split(FIELD_SEPARATOR).collect(),
        }
    }

    /// Fail unless the row has at least `expected` fields
    pub fn require(&self, expected: usize) -> std::result::Result<(), RowError> {
        if self.fields.len() < expected {
            return Err(RowError::TooFewFields {
                line: self.line,
                expected,
                found: self.fields.len(),
            });
        }
        Ok(())
    }

    /// Field at `index`, empty when the row is shorter
    pub fn field(&self, index: usize) -> &'a str {
        self.fields.get(index).copied().unwrap_or_default()
    }

    /// Parse the field at `index` as an integer
    pub fn int<T>(&self, index: usize, field: &'static str) -> std::result::Result<T, RowError>
    where
        T: FromStr<Err = std::num::ParseIntError>,
    {
        let value = self.field(index);
        value.parse().map_err(|source| RowError::InvalidNumber {
            line: self.line,
            field,
            value: value.to_string(),
            source,
        })
    }
}

/// Split table text into rows; every line is a record, no header is skipped
pub fn split_rows(text: &str) -> impl Iterator<Item = Row<'_>> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| Row::parse(idx + 1, line))
}

/// Read a table file fully into memory
pub fn read_table(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CatalogueError::Io {
        path: path.to_path_buf(),
        source,
    })
}

use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalogue operations
pub type Result<T> = std::result::Result<T, CatalogueError>;

/// A single input row that cannot be turned into a record.
///
/// Row errors abort the whole file: no partial catalogue survives them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// Row has fewer `;`-separated fields than the table requires
    #[error("line {line}: expected at least {expected} fields, found {found}")]
    TooFewFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A numeric field does not hold an integer
    #[error("line {line}: field `{field}` is not an integer: {value:?} ({source})")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl RowError {
    /// 1-based line number of the offending row
    pub fn line(&self) -> usize {
        match self {
            Self::TooFewFields { line, .. } | Self::InvalidNumber { line, .. } => *line,
        }
    }
}

/// Which of the two tables a row error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Codes,
    Subsets,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codes => write!(f, "code"),
            Self::Subsets => write!(f, "subset"),
        }
    }
}

/// Errors surfaced when loading a catalogue
#[derive(Error, Debug)]
pub enum CatalogueError {
    /// Input file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file contains a malformed row
    #[error("malformed row in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: RowError,
    },

    /// Table text (not read from a file) contains a malformed row
    #[error("malformed row in {table} table: {source}")]
    Table {
        table: TableKind,
        #[source]
        source: RowError,
    },

    /// Configuration rejected by validation or deserialization
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CatalogueError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub(crate) fn table(table: TableKind) -> impl FnOnce(RowError) -> Self {
        move |source| Self::Table { table, source }
    }
}

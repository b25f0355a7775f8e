use crate::error::{CatalogueError, Result};
use crate::types::CodeId;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Offset that moves raw row ids into the reserved SysCode id space
pub const DEFAULT_ID_OFFSET: CodeId = 0x1051_0000_0000_0000;

/// Smallest ascending id gap that starts a new group
pub const DEFAULT_GROUP_GAP_MIN: i64 = 0x900;

/// Ascending gaps at or above this bound stay in the current group
pub const DEFAULT_GROUP_GAP_MAX: i64 = 0x10000;

/// Number of children / subset entries listed before truncating
pub const DEFAULT_LISTING_LIMIT: usize = 10;

/// Configuration for building and presenting a catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogueConfig {
    /// Added to every raw id read from the code table
    pub id_offset: CodeId,

    /// Inclusive lower bound of the ascending gap that opens a new group
    pub group_gap_min: i64,

    /// Exclusive upper bound of the ascending gap that opens a new group
    pub group_gap_max: i64,

    /// Maximum number of listed members per section in rendered output
    pub listing_limit: usize,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            id_offset: DEFAULT_ID_OFFSET,
            group_gap_min: DEFAULT_GROUP_GAP_MIN,
            group_gap_max: DEFAULT_GROUP_GAP_MAX,
            listing_limit: DEFAULT_LISTING_LIMIT,
        }
    }
}

impl CatalogueConfig {
    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| CatalogueError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.group_gap_min < 0 {
            return Err(CatalogueError::invalid_config(format!(
                "group_gap_min ({}) must not be negative",
                self.group_gap_min
            )));
        }

        if self.group_gap_min >= self.group_gap_max {
            return Err(CatalogueError::invalid_config(format!(
                "group_gap_min ({:#x}) must be below group_gap_max ({:#x})",
                self.group_gap_min, self.group_gap_max
            )));
        }

        Ok(())
    }
}

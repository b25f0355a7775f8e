//! # SysCode Catalogue
//!
//! In-memory index over the SysCode reference tables: a flat code table and
//! a subset table naming ordered selections of codes.
//!
//! ## Architecture
//!
//! ```text
//! codes table (id;_;code;name;de short;de medium;en short;en medium)
//!     │
//!     ├──> Catalogue Builder
//!     │      ├─ Shift raw ids into the reserved id space
//!     │      ├─ Infer groups from id gaps (GroupTracker)
//!     │      └─ Fill id and name indexes, append children
//!     │
//! subsets table (subset name;entry name;sort number;default flag)
//!     │
//!     ├──> Subset Linker
//!     │      └─ Resolve names, append subset entries
//!     │
//!     └──> Catalogue
//!            ├─ get_by_id / get_by_name / search / translations
//!            └─ render / reference_line (presenter)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use syscode_catalogue::{Catalogue, CatalogueConfig};
//!
//! let codes = "\
//! 0;x;CUR;CURRENCY;Waehrung;Waehrung;Currency;Currency
//! 1;x;CHF;CURRENCY_CHF;CHF;Schweizer Franken;CHF;Swiss franc";
//!
//! let catalogue = Catalogue::from_tables(codes, "", CatalogueConfig::default()).unwrap();
//! for code in catalogue.search("CHF") {
//!     println!("{}", catalogue.render(code));
//! }
//! ```

mod builder;
mod catalogue;
mod config;
mod error;
mod index;
mod linker;
mod presenter;
mod rows;
mod types;

pub use builder::{CatalogueBuilder, GroupTracker, CODE_ROW_FIELDS};
pub use catalogue::{Catalogue, TranslationPair};
pub use config::{
    CatalogueConfig, DEFAULT_GROUP_GAP_MAX, DEFAULT_GROUP_GAP_MIN, DEFAULT_ID_OFFSET,
    DEFAULT_LISTING_LIMIT,
};
pub use error::{CatalogueError, Result, RowError, TableKind};
pub use index::CodeIndex;
pub use linker::{link, LinkStats, SUBSET_ROW_FIELDS};
pub use presenter::{format_hex, parse_id, reference_line, render};
pub use rows::{read_table, split_rows, Row, FIELD_SEPARATOR};
pub use types::{Code, CodeId, SubsetEntry, Translations};

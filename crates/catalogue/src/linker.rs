use crate::error::RowError;
use crate::index::CodeIndex;
use crate::rows::Row;
use crate::types::SubsetEntry;

/// Minimum field count of a subset table row
pub const SUBSET_ROW_FIELDS: usize = 4;

/// Outcome of linking a subset table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Entries appended to subset codes
    pub linked: usize,

    /// Rows whose subset or entry name did not resolve
    pub skipped: usize,
}

/// Attach subset table rows to the codes they name.
///
/// Numeric fields are parsed before names are resolved, so a bad number
/// aborts the link even on a row that would have been skipped.
pub fn link<'a>(
    rows: impl IntoIterator<Item = Row<'a>>,
    index: &mut CodeIndex,
) -> std::result::Result<LinkStats, RowError> {
    let mut stats = LinkStats::default();

    for row in rows {
        row.require(SUBSET_ROW_FIELDS)?;
        let subset_name = row.field(0);
        let entry_name = row.field(1);
        let sort_number: i32 = row.int(2, "sort_number")?;
        let default_flag: i32 = row.int(3, "default_entry")?;

        let (Some(_), Some(entry_code)) =
            (index.get_by_name(subset_name), index.get_by_name(entry_name))
        else {
            log::debug!(
                "line {}: skipping subset row {subset_name:?} -> {entry_name:?} (unresolved name)",
                row.line
            );
            stats.skipped += 1;
            continue;
        };

        let entry = SubsetEntry {
            id: entry_code.id(),
            sort_number,
            default_entry: default_flag != 0,
        };
        if index.add_subset_entry(subset_name, entry) {
            stats.linked += 1;
        } else {
            stats.skipped += 1;
        }
    }

    log::info!(
        "Linked subsets: {} entries, {} rows skipped",
        stats.linked,
        stats.skipped
    );

    Ok(stats)
}

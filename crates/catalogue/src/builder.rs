use crate::config::CatalogueConfig;
use crate::error::RowError;
use crate::index::CodeIndex;
use crate::rows::Row;
use crate::types::{Code, CodeId, Translations};

/// Minimum field count of a code table row
pub const CODE_ROW_FIELDS: usize = 8;

/// Single-pass state machine that infers group membership from id order.
///
/// The code table carries no parent pointers. Rows of one group follow each
/// other with small ascending id steps; a new group starts when the id drops
/// or jumps by a gap in `[gap_min, gap_max)`. Only the previous id is
/// consulted, so an out-of-order row with a small positive step stays in the
/// current group.
#[derive(Debug, Clone)]
pub struct GroupTracker {
    last_id: CodeId,
    current_group: CodeId,
    gap_min: i64,
    gap_max: i64,
}

impl GroupTracker {
    pub fn new(gap_min: i64, gap_max: i64) -> Self {
        Self {
            last_id: CodeId::MAX,
            current_group: 0,
            gap_min,
            gap_max,
        }
    }

    /// Whether `id`, following `last_id`, opens a new group
    pub fn is_group_header(&self, id: CodeId) -> bool {
        let delta = id.wrapping_sub(self.last_id);
        delta < 0 || (delta >= self.gap_min && delta < self.gap_max)
    }

    /// Feed the next id and return the group it belongs to
    pub fn observe(&mut self, id: CodeId) -> CodeId {
        if self.is_group_header(id) {
            self.current_group = id;
        }
        self.last_id = id;
        self.current_group
    }

    pub fn current_group(&self) -> CodeId {
        self.current_group
    }
}

/// Build the code index from code table rows
pub struct CatalogueBuilder {
    config: CatalogueConfig,
}

impl CatalogueBuilder {
    pub fn new(config: CatalogueConfig) -> Self {
        Self { config }
    }

    /// Build the id and name indexes.
    ///
    /// The first malformed row aborts the build; no partial index is returned.
    pub fn build<'a>(
        &self,
        rows: impl IntoIterator<Item = Row<'a>>,
    ) -> std::result::Result<CodeIndex, RowError> {
        let mut index = CodeIndex::new();
        let mut groups = GroupTracker::new(self.config.group_gap_min, self.config.group_gap_max);

        for row in rows {
            row.require(CODE_ROW_FIELDS)?;
            let raw_id: i64 = row.int(0, "id")?;
            let id = raw_id.wrapping_add(self.config.id_offset);
            let group_id = groups.observe(id);

            let code = Code::new(
                id,
                group_id,
                row.field(2),
                row.field(3),
                Translations {
                    german_short: row.field(4).to_string(),
                    german_medium: row.field(5).to_string(),
                    english_short: row.field(6).to_string(),
                    english_medium: row.field(7).to_string(),
                },
            );
            index.insert(code);

            // A group never lists itself
            if group_id != id {
                index.add_child(group_id, id);
            }
        }

        log::info!(
            "Built code index: {} codes, {} names",
            index.len(),
            index.name_count()
        );

        Ok(index)
    }
}

impl Default for CatalogueBuilder {
    fn default() -> Self {
        Self::new(CatalogueConfig::default())
    }
}

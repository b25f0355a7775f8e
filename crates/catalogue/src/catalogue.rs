use crate::builder::CatalogueBuilder;
use crate::config::CatalogueConfig;
use crate::error::{CatalogueError, Result, TableKind};
use crate::index::CodeIndex;
use crate::linker;
use crate::presenter;
use crate::rows::{read_table, split_rows};
use crate::types::{Code, CodeId};
use std::collections::BTreeSet;
use std::path::Path;

/// (english, german) medium-verbosity translation pair
pub type TranslationPair = (String, String);

/// Queryable SysCode catalogue built from a code table and a subset table.
///
/// A catalogue is built in one go and never patched: [`Catalogue::reload`]
/// builds a fresh structure and swaps it in.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    config: CatalogueConfig,
    index: CodeIndex,
}

impl Catalogue {
    /// Empty catalogue that answers every lookup with nothing
    pub fn empty(config: CatalogueConfig) -> Self {
        Self {
            config,
            index: CodeIndex::new(),
        }
    }

    /// Build a catalogue from already-loaded table text.
    ///
    /// The config is validated first, as in [`Catalogue::load`].
    pub fn from_tables(codes: &str, subsets: &str, config: CatalogueConfig) -> Result<Self> {
        config.validate()?;
        let mut index = CatalogueBuilder::new(config.clone())
            .build(split_rows(codes))
            .map_err(CatalogueError::table(TableKind::Codes))?;
        linker::link(split_rows(subsets), &mut index)
            .map_err(CatalogueError::table(TableKind::Subsets))?;
        Ok(Self { config, index })
    }

    /// Read both tables and build a catalogue
    pub fn load(
        codes_path: impl AsRef<Path>,
        subsets_path: impl AsRef<Path>,
        config: CatalogueConfig,
    ) -> Result<Self> {
        config.validate()?;
        let codes_path = codes_path.as_ref();
        let subsets_path = subsets_path.as_ref();

        let codes_text = read_table(codes_path)?;
        let subsets_text = read_table(subsets_path)?;

        let catalogue =
            Self::from_tables(&codes_text, &subsets_text, config).map_err(|err| match err {
                CatalogueError::Table { table, source } => {
                    let path = match table {
                        TableKind::Codes => codes_path,
                        TableKind::Subsets => subsets_path,
                    };
                    CatalogueError::Malformed {
                        path: path.to_path_buf(),
                        source,
                    }
                }
                other => other,
            })?;

        log::info!(
            "Loaded catalogue from {} and {}: {} codes",
            codes_path.display(),
            subsets_path.display(),
            catalogue.len()
        );

        Ok(catalogue)
    }

    /// Replace the contents with a fresh load of both tables.
    ///
    /// On failure the catalogue is left empty so no stale or partial data
    /// stays reachable.
    pub fn reload(
        &mut self,
        codes_path: impl AsRef<Path>,
        subsets_path: impl AsRef<Path>,
    ) -> Result<()> {
        match Self::load(codes_path, subsets_path, self.config.clone()) {
            Ok(fresh) => {
                *self = fresh;
                Ok(())
            }
            Err(err) => {
                log::warn!("Catalogue reload failed, clearing catalogue: {err}");
                self.index = CodeIndex::new();
                Err(err)
            }
        }
    }

    pub fn config(&self) -> &CatalogueConfig {
        &self.config
    }

    pub fn get_by_id(&self, id: CodeId) -> Option<&Code> {
        self.index.get(id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Code> {
        self.index.get_by_name(name)
    }

    /// Codes whose `code` equals `text` or whose name contains it (case-sensitive)
    pub fn search(&self, text: &str) -> Vec<&Code> {
        self.index
            .codes()
            .filter(|code| code.code() == text || code.name().contains(text))
            .collect()
    }

    /// Distinct (english, german) medium translations.
    ///
    /// Pairs where either side has no lowercase letter are left out; this
    /// drops abbreviations and empty texts.
    pub fn translations(&self) -> BTreeSet<TranslationPair> {
        self.index
            .codes()
            .filter(|code| {
                !is_all_uppercase(code.english_medium()) && !is_all_uppercase(code.german_medium())
            })
            .map(|code| {
                (
                    code.english_medium().to_string(),
                    code.german_medium().to_string(),
                )
            })
            .collect()
    }

    /// Multi-line description of `code`
    pub fn render(&self, code: &Code) -> String {
        presenter::render(self, code)
    }

    /// "hexId `name`" fragment for `id`; the name is empty when unresolved
    pub fn reference_line(&self, id: CodeId) -> String {
        presenter::reference_line(self, id)
    }

    /// All codes in first-insertion order
    pub fn codes(&self) -> impl Iterator<Item = &Code> {
        self.index.codes()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn is_all_uppercase(text: &str) -> bool {
    !text.chars().any(char::is_lowercase)
}

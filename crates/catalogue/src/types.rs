use serde::Serialize;

/// Numeric key of a [`Code`], already shifted into the reserved id space
pub type CodeId = i64;

/// One row of the reference catalogue.
///
/// A code is either a leaf classification value or a group header. Scalar
/// fields are fixed at construction; only the membership lists grow, and only
/// while the catalogue is being built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Code {
    id: CodeId,

    /// Id of the inferred group (may not resolve to any code)
    group_id: CodeId,

    /// Short symbolic value (e.g., "EUR"), not unique
    code: String,

    /// Human-oriented key, unique within the name index
    name: String,

    german_short: String,
    german_medium: String,
    english_short: String,
    english_medium: String,

    /// Ids of codes grouped under this one, in file order
    children: Vec<CodeId>,

    /// Members of the subset named by this code, in file order
    subset_entries: Vec<SubsetEntry>,
}

/// Membership of a code in a subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubsetEntry {
    /// Id of the member code
    pub id: CodeId,

    /// Position hint from the subset table (storage order is file order)
    pub sort_number: i32,

    /// Whether the member is the subset's default value
    pub default_entry: bool,
}

/// Display texts of a code: German and English, short and medium verbosity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    pub german_short: String,
    pub german_medium: String,
    pub english_short: String,
    pub english_medium: String,
}

impl Code {
    pub fn new(
        id: CodeId,
        group_id: CodeId,
        code: impl Into<String>,
        name: impl Into<String>,
        translations: Translations,
    ) -> Self {
        Self {
            id,
            group_id,
            code: code.into(),
            name: name.into(),
            german_short: translations.german_short,
            german_medium: translations.german_medium,
            english_short: translations.english_short,
            english_medium: translations.english_medium,
            children: Vec::new(),
            subset_entries: Vec::new(),
        }
    }

    pub fn id(&self) -> CodeId {
        self.id
    }

    pub fn group_id(&self) -> CodeId {
        self.group_id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn german_short(&self) -> &str {
        &self.german_short
    }

    pub fn german_medium(&self) -> &str {
        &self.german_medium
    }

    pub fn english_short(&self) -> &str {
        &self.english_short
    }

    pub fn english_medium(&self) -> &str {
        &self.english_medium
    }

    pub fn children(&self) -> &[CodeId] {
        &self.children
    }

    pub fn subset_entries(&self) -> &[SubsetEntry] {
        &self.subset_entries
    }

    /// Whether this code heads its own group
    pub fn is_group_header(&self) -> bool {
        self.id == self.group_id
    }

    pub(crate) fn push_child(&mut self, child: CodeId) {
        self.children.push(child);
    }

    pub(crate) fn push_subset_entry(&mut self, entry: SubsetEntry) {
        self.subset_entries.push(entry);
    }
}

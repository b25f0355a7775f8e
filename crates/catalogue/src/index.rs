use crate::types::{Code, CodeId, SubsetEntry};
use std::collections::HashMap;

/// Arena of codes with id and name lookup tables.
///
/// Every inserted code keeps its arena slot for the life of the index. The
/// id table only reaches the latest code per id; a code replaced by a later
/// row with the same id stays reachable through its own name.
#[derive(Debug, Clone, Default)]
pub struct CodeIndex {
    arena: Vec<Code>,

    /// Arena slots of the live codes, in first-seen id order
    order: Vec<usize>,

    /// Code id -> position in `order`
    id_index: HashMap<CodeId, usize>,

    /// Code name -> arena slot (last row with a name wins)
    name_index: HashMap<String, usize>,
}

impl CodeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a code, replacing any code under the same id or name.
    ///
    /// A replaced id keeps its position, so iteration order stays the order
    /// in which ids were first seen.
    pub fn insert(&mut self, code: Code) {
        let id = code.id();
        let slot = self.arena.len();
        self.name_index.insert(code.name().to_string(), slot);
        self.arena.push(code);

        match self.id_index.get(&id) {
            Some(&position) => self.order[position] = slot,
            None => {
                self.id_index.insert(id, self.order.len());
                self.order.push(slot);
            }
        }
    }

    pub fn get(&self, id: CodeId) -> Option<&Code> {
        let slot = self.id_slot(id)?;
        self.arena.get(slot)
    }

    /// Look up by name. May return a code whose id was since taken over.
    pub fn get_by_name(&self, name: &str) -> Option<&Code> {
        let slot = *self.name_index.get(name)?;
        self.arena.get(slot)
    }

    /// Append `child` to the children of `group`; false if the group is unknown
    pub(crate) fn add_child(&mut self, group: CodeId, child: CodeId) -> bool {
        let Some(slot) = self.id_slot(group) else {
            return false;
        };
        match self.arena.get_mut(slot) {
            Some(code) => {
                code.push_child(child);
                true
            }
            None => false,
        }
    }

    /// Append an entry to the code named `subset`; false if the name is unknown
    pub(crate) fn add_subset_entry(&mut self, subset: &str, entry: SubsetEntry) -> bool {
        let Some(&slot) = self.name_index.get(subset) else {
            return false;
        };
        match self.arena.get_mut(slot) {
            Some(code) => {
                code.push_subset_entry(entry);
                true
            }
            None => false,
        }
    }

    fn id_slot(&self, id: CodeId) -> Option<usize> {
        let position = *self.id_index.get(&id)?;
        self.order.get(position).copied()
    }

    /// Live codes in first-seen id order
    pub fn codes(&self) -> impl Iterator<Item = &Code> {
        self.order.iter().filter_map(|&slot| self.arena.get(slot))
    }

    /// Number of distinct ids
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of distinct names
    pub fn name_count(&self) -> usize {
        self.name_index.len()
    }
}

/*!
# Label Index

Two-way mapping between labels and the dense ids a store assigns to them.
Ids are handed out in registration order starting at `0` and are never recycled,
so they can be used as permanent slot identifiers (e.g. rows of a matrix).
*/

use fxhash::FxHashMap;

use crate::label::*;

/// Stores the mapping `label <-> id` for all registered labels.
///
/// # Example
/// ```
/// use lgraphs::utils::LabelIndex;
///
/// let mut index = LabelIndex::new();
/// assert_eq!(index.get_or_insert("a"), (0, true));
/// assert_eq!(index.get_or_insert("b"), (1, true));
/// assert_eq!(index.get_or_insert("a"), (0, false));
///
/// assert_eq!(index.id_of("b"), Some(1));
/// assert_eq!(index.label_of(0), "a");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    ids: FxHashMap<Label, NodeId>,
    labels: Vec<Label>,
}

impl LabelIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns *true* if no label is registered
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the id of `label` if it is registered
    pub fn id_of(&self, label: &str) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    /// Returns *true* if `label` is registered
    pub fn contains(&self, label: &str) -> bool {
        self.ids.contains_key(label)
    }

    /// Returns the label of a given id.
    /// ** Panics if `id` was not handed out by this index **
    pub fn label_of(&self, id: NodeId) -> &str {
        &self.labels[id as usize]
    }

    /// Registers `label` under the next free id and returns it.
    /// The caller has to ensure that `label` is not registered yet.
    pub fn insert(&mut self, label: &str) -> NodeId {
        debug_assert!(!self.contains(label));
        let id = self.labels.len() as NodeId;
        self.ids.insert(label.to_owned(), id);
        self.labels.push(label.to_owned());
        id
    }

    /// Returns the id of `label`, registering it first if necessary.
    /// The second entry is *true* iff the label was newly registered.
    pub fn get_or_insert(&mut self, label: &str) -> (NodeId, bool) {
        match self.id_of(label) {
            Some(id) => (id, false),
            None => (self.insert(label), true),
        }
    }

    /// Returns an iterator over all labels ordered by their id
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }
}

/*!
# Generalized Label Sets

This module provides an abstraction over read-only set data structures of labels,
allowing callers to hand in whatever set type they already use.

Examples:
- Hashed sets -> `HashSet<Label>`, `FxHashSet<Label>`, `HashSet<&str>`
- Ordered sets -> `BTreeSet<Label>`
*/

use std::{
    collections::{BTreeSet, HashSet},
    hash::BuildHasher,
};

use crate::label::Label;

/// Minimalist trait for a set of labels.
///
/// Supports membership queries, iteration and size queries.
pub trait LabelSet {
    /// Returns `true` if the set contains `label`.
    fn contains_label(&self, label: &str) -> bool;

    /// Returns an iterator over all labels in the set.
    fn labels(&self) -> impl Iterator<Item = &str> + '_;

    /// Returns the number of labels in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> LabelSet for HashSet<Label, S>
where
    S: BuildHasher,
{
    fn contains_label(&self, label: &str) -> bool {
        self.contains(label)
    }

    fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(String::as_str)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<S> LabelSet for HashSet<&str, S>
where
    S: BuildHasher,
{
    fn contains_label(&self, label: &str) -> bool {
        self.contains(label)
    }

    fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().copied()
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl LabelSet for BTreeSet<Label> {
    fn contains_label(&self, label: &str) -> bool {
        self.contains(label)
    }

    fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(String::as_str)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

//! Persistent entry lists with structural sharing.
//!
//! A thin wrapper around `im::Vector` so that pools, session sequences,
//! failed lists, and recap lists can be handed from one quiz state to the
//! next without copying the entries.

use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entry::VocabularyEntry;

/// Ordered, persistent list of vocabulary entries.
///
/// Cloning is O(1). Modifications return a new list sharing structure
/// with the original.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntryList(im::Vector<VocabularyEntry>);

impl EntryList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an entry by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&VocabularyEntry> {
        self.0.get(index)
    }

    /// Returns the first entry.
    #[must_use]
    pub fn first(&self) -> Option<&VocabularyEntry> {
        self.0.front()
    }

    /// Returns the last entry.
    #[must_use]
    pub fn last(&self) -> Option<&VocabularyEntry> {
        self.0.back()
    }

    /// Returns true if an equal entry is already in the list.
    #[must_use]
    pub fn contains(&self, entry: &VocabularyEntry) -> bool {
        self.0.contains(entry)
    }

    /// Returns a new list with the entry appended.
    #[must_use]
    pub fn push_back(&self, entry: VocabularyEntry) -> Self {
        let mut new = self.0.clone();
        new.push_back(entry);
        Self(new)
    }

    /// Returns a new list with the entry appended unless an equal entry is
    /// already present, in which case the list is returned unchanged.
    ///
    /// The first occurrence keeps its position.
    #[must_use]
    pub fn push_unique(&self, entry: VocabularyEntry) -> Self {
        if self.contains(&entry) {
            return self.clone();
        }
        self.push_back(entry)
    }

    /// Returns a new list holding the entries at `indices`, in that order.
    ///
    /// Indices out of bounds are skipped.
    #[must_use]
    pub fn pick(&self, indices: &[usize]) -> Self {
        indices
            .iter()
            .filter_map(|&i| self.0.get(i).cloned())
            .collect()
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.0.iter()
    }

    /// Copies the entries into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<VocabularyEntry> {
        self.0.iter().cloned().collect()
    }
}

impl fmt::Debug for EntryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<VocabularyEntry> for EntryList {
    fn from_iter<I: IntoIterator<Item = VocabularyEntry>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl From<Vec<VocabularyEntry>> for EntryList {
    fn from(entries: Vec<VocabularyEntry>) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for EntryList {
    type Item = VocabularyEntry;
    type IntoIter = im::vector::ConsumingIter<VocabularyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a VocabularyEntry;
    type IntoIter = im::vector::Iter<'a, VocabularyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

//! The dynamic tech stack list.
//!
//! The list always holds at least one entry. The first entry is the one the
//! form shows without a remove button, and removing the last remaining entry
//! is refused rather than collapsing the list.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::TechStackError;
use crate::profile::TechStackEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TechStackEntry>", into = "Vec<TechStackEntry>")]
pub struct TechStack {
    entries: Vec<TechStackEntry>,
}

impl Default for TechStack {
    fn default() -> Self {
        Self {
            entries: vec![TechStackEntry::empty()],
        }
    }
}

impl TechStack {
    /// Build from existing entries; an empty list is rejected
    pub fn from_entries(entries: Vec<TechStackEntry>) -> Result<Self, TechStackError> {
        if entries.is_empty() {
            return Err(TechStackError::LastEntry);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[TechStackEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TechStackEntry> {
        self.entries.iter()
    }

    pub fn append(&mut self, entry: TechStackEntry) {
        self.entries.push(entry);
        debug!("tech stack append -> {} entries", self.entries.len());
    }

    /// Remove the entry at `index`; later entries shift down by one
    pub fn remove(&mut self, index: usize) -> Result<TechStackEntry, TechStackError> {
        let len = self.entries.len();
        if index >= len {
            return Err(TechStackError::IndexOutOfRange { index, len });
        }
        if len == 1 {
            return Err(TechStackError::LastEntry);
        }
        let removed = self.entries.remove(index);
        debug!("tech stack remove {} -> {} entries", index, self.entries.len());
        Ok(removed)
    }

    pub fn set_name(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), TechStackError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(TechStackError::IndexOutOfRange { index, len })?;
        entry.name = name.into();
        Ok(())
    }

    /// Whether the form should render a remove control for `index`
    pub fn can_remove(&self, index: usize) -> bool {
        index != 0 && index < self.entries.len() && self.entries.len() > 1
    }
}

impl TryFrom<Vec<TechStackEntry>> for TechStack {
    type Error = TechStackError;

    fn try_from(entries: Vec<TechStackEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<TechStack> for Vec<TechStackEntry> {
    fn from(stack: TechStack) -> Self {
        stack.entries
    }
}

impl<'a> IntoIterator for &'a TechStack {
    type Item = &'a TechStackEntry;
    type IntoIter = std::slice::Iter<'a, TechStackEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

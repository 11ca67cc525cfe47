//! Generic editing of id-keyed lists.
//!
//! Every repeating section of a template (achievements, sessions,
//! participants, agenda entries...) is a `Vec` of items carrying a
//! locally-unique integer id. [`ListEditor`] is the one place that assigns
//! ids and targets items by id, so edits stay stable while the list changes.

use std::collections::HashSet;

/// An item with a locally-unique id inside its list.
pub trait Identified {
    fn id(&self) -> u64;
}

/// Mutable view over a list of [`Identified`] items.
pub struct ListEditor<'a, T> {
    items: &'a mut Vec<T>,
}

impl<'a, T: Identified> ListEditor<'a, T> {
    pub fn new(items: &'a mut Vec<T>) -> Self {
        Self { items }
    }

    /// The id the next added item receives: highest existing id + 1, or 1
    /// for an empty list. `None` once the highest id is `u64::MAX`.
    pub fn next_id(&self) -> Option<u64> {
        match self.items.iter().map(Identified::id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Append an item built from the freshly assigned id. Returns that id,
    /// or `None` without touching the list when no id is left.
    pub fn add(&mut self, build: impl FnOnce(u64) -> T) -> Option<u64> {
        let id = self.next_id()?;
        self.items.push(build(id));
        Some(id)
    }

    /// Apply `edit` to the item with `id`. Returns `false` if no item matched.
    pub fn update(&mut self, id: u64, edit: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                edit(item);
                true
            }
            None => false,
        }
    }

    /// Remove the item with `id`. Returns `false` if no item matched.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn ids(&self) -> Vec<u64> {
        self.items.iter().map(Identified::id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Whether no two items share an id.
pub fn has_unique_ids<T: Identified>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item.id()))
}

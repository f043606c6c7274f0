//! In-memory list store for one résumé section
//!
//! Every list section (education, experience, awards, ...) is an independent
//! `SectionStore`. Entries are created with a fresh unique id, mutated
//! through tagged single-field updates, and removed by id; insertion order
//! is preserved throughout. All mutation happens synchronously on the UI
//! turn, so there is no locking.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vitae_domain::SectionEntry;

/// An ordered collection of section entries addressed by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionStore<T> {
    entries: Vec<T>,
}

impl<T> Default for SectionStore<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: SectionEntry> SectionStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry with a fresh unique id and default field values.
    /// Returns the generated id.
    pub fn add(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        self.entries.push(T::with_id(id.clone()));
        id
    }

    /// Remove the entry with the given id. Removing an absent id is a no-op,
    /// not an error.
    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|entry| entry.id() != id);
    }

    /// Apply one tagged field update to the matching entry, preserving all
    /// other fields and the overall order. A no-op when the id is absent.
    pub fn update(&mut self, id: &str, field: T::Field) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id() == id) {
            entry.apply(field);
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

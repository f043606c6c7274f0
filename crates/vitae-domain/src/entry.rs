//! Shared contract for list-section entries

/// An entry in one of the list sections, addressable by its generated id.
///
/// Entries are never addressed by index; all mutation goes through the id so
/// that removal and reordering elsewhere in the collection cannot redirect an
/// edit to the wrong entry.
pub trait SectionEntry {
    /// Tagged single-field update for this entry type.
    type Field;

    /// Create an empty entry carrying a freshly generated id.
    fn with_id(id: String) -> Self;

    /// The entry's opaque unique id.
    fn id(&self) -> &str;

    /// Replace one field, preserving all others.
    fn apply(&mut self, field: Self::Field);
}

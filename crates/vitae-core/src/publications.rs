//! Compound store for the two publication entry modes
//!
//! Publications differ from the other sections: the store holds two
//! independent collections (structured and free-text) plus a shared mode
//! flag selecting which one is authoritative for rendering. The mode is a
//! per-section choice, not a per-entry one. Switching modes never touches
//! either collection's data; both persist until explicitly edited.

use serde::{Deserialize, Serialize};
use vitae_domain::{Publication, PublicationField, SimplePublication, SimplePublicationField};

use crate::store::SectionStore;

/// Which publication collection is authoritative for rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicationMode {
    /// Free-text entries, rendered verbatim. The starting mode.
    #[default]
    Simple,
    /// Structured entries, rendered as a formatted citation line.
    Detailed,
}

impl PublicationMode {
    pub fn uses_simple(&self) -> bool {
        matches!(self, PublicationMode::Simple)
    }
}

/// A single combined change to the publications section. One change may
/// touch a collection and the mode flag together (adding an entry also
/// selects its mode, mirroring the entry tabs on the input surface).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PublicationsChange {
    AddDetailed,
    RemoveDetailed(String),
    UpdateDetailed(String, PublicationField),
    AddSimple,
    RemoveSimple(String),
    UpdateSimple(String, SimplePublicationField),
    SetMode(PublicationMode),
}

/// The publications section: two collections and the shared mode flag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationStore {
    detailed: SectionStore<Publication>,
    simple: SectionStore<SimplePublication>,
    mode: PublicationMode,
}

impl PublicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one combined change. Returns the generated id for add changes.
    pub fn apply(&mut self, change: PublicationsChange) -> Option<String> {
        match change {
            PublicationsChange::AddDetailed => Some(self.add_detailed()),
            PublicationsChange::RemoveDetailed(id) => {
                self.detailed.remove(&id);
                None
            }
            PublicationsChange::UpdateDetailed(id, field) => {
                self.detailed.update(&id, field);
                None
            }
            PublicationsChange::AddSimple => Some(self.add_simple()),
            PublicationsChange::RemoveSimple(id) => {
                self.simple.remove(&id);
                None
            }
            PublicationsChange::UpdateSimple(id, field) => {
                self.simple.update(&id, field);
                None
            }
            PublicationsChange::SetMode(mode) => {
                self.mode = mode;
                None
            }
        }
    }

    /// Append a structured entry and make the detailed mode authoritative.
    pub fn add_detailed(&mut self) -> String {
        self.mode = PublicationMode::Detailed;
        self.detailed.add()
    }

    /// Append a free-text entry and make the simple mode authoritative.
    pub fn add_simple(&mut self) -> String {
        self.mode = PublicationMode::Simple;
        self.simple.add()
    }

    pub fn set_mode(&mut self, mode: PublicationMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> PublicationMode {
        self.mode
    }

    pub fn detailed(&self) -> &SectionStore<Publication> {
        &self.detailed
    }

    pub fn detailed_mut(&mut self) -> &mut SectionStore<Publication> {
        &mut self.detailed
    }

    pub fn simple(&self) -> &SectionStore<SimplePublication> {
        &self.simple
    }

    pub fn simple_mut(&mut self) -> &mut SectionStore<SimplePublication> {
        &mut self.simple
    }
}

//! The two publication entry forms
//!
//! Publications can be entered either as structured records ([`Publication`])
//! that the templates format into a citation line, or as free-text items
//! ([`SimplePublication`]) rendered verbatim. Which collection is
//! authoritative for rendering is decided by the section's mode flag, not by
//! the entries themselves; both collections may hold data at the same time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::SectionEntry;

/// A structured publication record. A `None` date renders as "n.d.".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    pub authors: String,
    pub title: String,
    pub journal: String,
    pub date: Option<NaiveDate>,
    pub doi: String,
}

/// Tagged single-field update for a structured publication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PublicationField {
    Authors(String),
    Title(String),
    Journal(String),
    Date(Option<NaiveDate>),
    Doi(String),
}

impl SectionEntry for Publication {
    type Field = PublicationField;

    fn with_id(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, field: PublicationField) {
        match field {
            PublicationField::Authors(v) => self.authors = v,
            PublicationField::Title(v) => self.title = v,
            PublicationField::Journal(v) => self.journal = v,
            PublicationField::Date(v) => self.date = v,
            PublicationField::Doi(v) => self.doi = v,
        }
    }
}

/// A free-text publication, pasted in any standard citation format.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimplePublication {
    pub id: String,
    pub text: String,
}

/// Tagged single-field update for a free-text publication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SimplePublicationField {
    Text(String),
}

impl SectionEntry for SimplePublication {
    type Field = SimplePublicationField;

    fn with_id(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, field: SimplePublicationField) {
        match field {
            SimplePublicationField::Text(v) => self.text = v,
        }
    }
}

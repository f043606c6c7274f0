//! Honors and awards entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::SectionEntry;

/// One award or honor. The date is optional and rendered as a bare year.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub date: Option<NaiveDate>,
    pub description: String,
}

/// Tagged single-field update for an award entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AwardField {
    Title(String),
    Organization(String),
    Date(Option<NaiveDate>),
    Description(String),
}

impl SectionEntry for Award {
    type Field = AwardField;

    fn with_id(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, field: AwardField) {
        match field {
            AwardField::Title(v) => self.title = v,
            AwardField::Organization(v) => self.organization = v,
            AwardField::Date(v) => self.date = v,
            AwardField::Description(v) => self.description = v,
        }
    }
}

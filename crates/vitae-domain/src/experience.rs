//! Professional experience entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::SectionEntry;

/// One experience entry. A `None` end date means the position is current.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub department: String,
    pub organization: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Engagement type (Full-Time, Residency, Locum, ...), from
    /// [`crate::vocab::EXPERIENCE_TYPES`].
    pub kind: String,
    pub description: String,
}

/// Tagged single-field update for an experience entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ExperienceField {
    Role(String),
    Department(String),
    Organization(String),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    Kind(String),
    Description(String),
}

impl SectionEntry for Experience {
    type Field = ExperienceField;

    fn with_id(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, field: ExperienceField) {
        match field {
            ExperienceField::Role(v) => self.role = v,
            ExperienceField::Department(v) => self.department = v,
            ExperienceField::Organization(v) => self.organization = v,
            ExperienceField::StartDate(v) => self.start_date = v,
            ExperienceField::EndDate(v) => self.end_date = v,
            ExperienceField::Kind(v) => self.kind = v,
            ExperienceField::Description(v) => self.description = v,
        }
    }
}

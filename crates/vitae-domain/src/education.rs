//! Education entries for the medical and additional collections

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::SectionEntry;

/// One education entry.
///
/// The same shape backs both the medical and the additional collection; only
/// the degree vocabulary offered by the input surface differs between the
/// two. A `None` end date means the program is still ongoing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub graduation_year: Option<NaiveDate>,
    pub score: String,
    pub remarks: String,
}

/// Tagged single-field update for an education entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EducationField {
    Institution(String),
    Degree(String),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    GraduationYear(Option<NaiveDate>),
    Score(String),
    Remarks(String),
}

impl SectionEntry for Education {
    type Field = EducationField;

    fn with_id(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, field: EducationField) {
        match field {
            EducationField::Institution(v) => self.institution = v,
            EducationField::Degree(v) => self.degree = v,
            EducationField::StartDate(v) => self.start_date = v,
            EducationField::EndDate(v) => self.end_date = v,
            EducationField::GraduationYear(v) => self.graduation_year = v,
            EducationField::Score(v) => self.score = v,
            EducationField::Remarks(v) => self.remarks = v,
        }
    }
}

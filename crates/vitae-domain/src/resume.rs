//! The denormalized résumé snapshot consumed by templates and export

use serde::{Deserialize, Serialize};

use crate::award::Award;
use crate::education::Education;
use crate::experience::Experience;
use crate::language::Language;
use crate::membership::Membership;
use crate::personal::PersonalDetails;
use crate::publication::{Publication, SimplePublication};

/// Identifier of one of the three built-in CV layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Professional,
    Modern,
    Executive,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Professional,
        TemplateKind::Modern,
        TemplateKind::Executive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Professional => "professional",
            TemplateKind::Modern => "modern",
            TemplateKind::Executive => "executive",
        }
    }

    /// Parse a template identifier. Unrecognized or unset identifiers fall
    /// back to the professional layout.
    pub fn parse(identifier: &str) -> Self {
        match identifier {
            "modern" => TemplateKind::Modern,
            "executive" => TemplateKind::Executive,
            _ => TemplateKind::Professional,
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The full, denormalized aggregate of all section values plus the template
/// choice.
///
/// `ResumeData` is recomputed from the current section stores on every read
/// and never persisted or mutated in place; it has no lifecycle of its own.
/// Both publication collections are carried even though only one is
/// authoritative for rendering, so switching the entry mode never loses
/// data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub personal_details: PersonalDetails,
    pub medical_education: Vec<Education>,
    pub additional_education: Vec<Education>,
    pub awards: Vec<Award>,
    pub experiences: Vec<Experience>,
    pub detailed_publications: Vec<Publication>,
    pub simple_publications: Vec<SimplePublication>,
    pub use_simple_publications: bool,
    pub memberships: Vec<Membership>,
    pub hobbies: String,
    pub languages: Vec<Language>,
    pub selected_template: TemplateKind,
}

impl Default for ResumeData {
    fn default() -> Self {
        Self {
            personal_details: PersonalDetails::default(),
            medical_education: Vec::new(),
            additional_education: Vec::new(),
            awards: Vec::new(),
            experiences: Vec::new(),
            detailed_publications: Vec::new(),
            simple_publications: Vec::new(),
            // Simple entry mode is the starting mode for publications.
            use_simple_publications: true,
            memberships: Vec::new(),
            hobbies: String::new(),
            languages: Vec::new(),
            selected_template: TemplateKind::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_template_identifier_defaults_to_professional() {
        assert_eq!(TemplateKind::parse("modern"), TemplateKind::Modern);
        assert_eq!(TemplateKind::parse("executive"), TemplateKind::Executive);
        assert_eq!(TemplateKind::parse("professional"), TemplateKind::Professional);
        assert_eq!(TemplateKind::parse("brutalist"), TemplateKind::Professional);
        assert_eq!(TemplateKind::parse(""), TemplateKind::Professional);
    }

    #[test]
    fn template_identifier_round_trip() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::parse(kind.as_str()), kind);
        }
    }

    #[test]
    fn snapshot_serde_round_trip() {
        let data = ResumeData::default();
        let json = serde_json::to_string(&data).unwrap();
        let back: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(data, back);
        assert!(back.use_simple_publications);
    }
}

//! Spoken language entries

use serde::{Deserialize, Serialize};

use crate::entry::SectionEntry;

/// Proficiency level for a spoken language.
///
/// New entries start at `Intermediate`, matching the input surface default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Native,
    Fluent,
    #[default]
    Intermediate,
    Basic,
}

impl Proficiency {
    pub const ALL: [Proficiency; 4] = [
        Proficiency::Native,
        Proficiency::Fluent,
        Proficiency::Intermediate,
        Proficiency::Basic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Basic => "Basic",
        }
    }

    /// Parse a proficiency label. Returns `None` outside the closed set.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Native" => Some(Proficiency::Native),
            "Fluent" => Some(Proficiency::Fluent),
            "Intermediate" => Some(Proficiency::Intermediate),
            "Basic" => Some(Proficiency::Basic),
            _ => None,
        }
    }
}

impl std::fmt::Display for Proficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One spoken language entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub proficiency: Proficiency,
}

/// Tagged single-field update for a language entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LanguageField {
    Name(String),
    Proficiency(Proficiency),
}

impl SectionEntry for Language {
    type Field = LanguageField;

    fn with_id(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, field: LanguageField) {
        match field {
            LanguageField::Name(v) => self.name = v,
            LanguageField::Proficiency(v) => self.proficiency = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_the_closed_set() {
        for level in Proficiency::ALL {
            assert_eq!(Proficiency::parse(level.as_str()), Some(level));
        }
        assert_eq!(Proficiency::parse("Conversational"), None);
    }

    #[test]
    fn new_entries_default_to_intermediate() {
        let language = Language::with_id("l1".to_string());
        assert_eq!(language.proficiency, Proficiency::Intermediate);
    }
}

//! Personal details shown in every template header

use serde::{Deserialize, Serialize};

/// Identity, registration, and contact details for the résumé owner.
///
/// This is a singleton record, not a list section. The photo field holds an
/// inlineable data-URL reference produced by the photo collaborator; no
/// image validation is performed here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub photo: Option<String>,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub organization: String,
    pub id_type: String,
    pub id_number: String,
    pub is_accredited: bool,
    pub accredited_org: String,
    pub accredited_id: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl PersonalDetails {
    /// Full display name, skipping empty name parts.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Replace one field, preserving all others.
    pub fn apply(&mut self, field: PersonalField) {
        match field {
            PersonalField::Photo(v) => self.photo = v,
            PersonalField::FirstName(v) => self.first_name = v,
            PersonalField::MiddleName(v) => self.middle_name = v,
            PersonalField::LastName(v) => self.last_name = v,
            PersonalField::Organization(v) => self.organization = v,
            PersonalField::IdType(v) => self.id_type = v,
            PersonalField::IdNumber(v) => self.id_number = v,
            PersonalField::IsAccredited(v) => self.is_accredited = v,
            PersonalField::AccreditedOrg(v) => self.accredited_org = v,
            PersonalField::AccreditedId(v) => self.accredited_id = v,
            PersonalField::Address(v) => self.address = v,
            PersonalField::Phone(v) => self.phone = v,
            PersonalField::Email(v) => self.email = v,
        }
    }
}

/// Tagged single-field update for the personal details record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PersonalField {
    Photo(Option<String>),
    FirstName(String),
    MiddleName(String),
    LastName(String),
    Organization(String),
    IdType(String),
    IdNumber(String),
    IsAccredited(bool),
    AccreditedOrg(String),
    AccreditedId(String),
    Address(String),
    Phone(String),
    Email(String),
}

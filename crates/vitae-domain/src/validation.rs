//! Export-readiness validation for the résumé snapshot
//!
//! The export gate only fully checks personal details and the medical
//! education collection. Other sections mark fields as required on the input
//! surface but do not block export; those surface here as warnings only.

use serde::{Deserialize, Serialize};

use crate::resume::ResumeData;

/// Severity of a validation finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    /// Blocks export.
    Error,
    /// Shown to the user but does not block export.
    Warning,
}

/// A validation finding tied to one field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationError {
    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            severity: ValidationSeverity::Error,
        }
    }

    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            severity: ValidationSeverity::Warning,
        }
    }
}

/// Validate a snapshot for export and return all findings.
pub fn export_readiness(data: &ResumeData) -> Vec<ValidationError> {
    let mut findings = Vec::new();
    let details = &data.personal_details;

    let required_details = [
        (details.first_name.as_str(), "first_name", "First name is required"),
        (details.last_name.as_str(), "last_name", "Last name is required"),
        (details.id_type.as_str(), "id_type", "Registration type is required"),
        (details.id_number.as_str(), "id_number", "Registration number is required"),
        (details.address.as_str(), "address", "Address is required"),
        (details.phone.as_str(), "phone", "Phone number is required"),
        (details.email.as_str(), "email", "Email is required"),
    ];
    for (value, field, message) in required_details {
        if value.is_empty() {
            findings.push(ValidationError::error(field, message));
        }
    }

    if data.medical_education.is_empty() {
        findings.push(ValidationError::error(
            "medical_education",
            "At least one medical education entry is required",
        ));
    }
    for (index, education) in data.medical_education.iter().enumerate() {
        let entry = index + 1;
        if education.institution.is_empty() {
            findings.push(ValidationError::error(
                "medical_education.institution",
                format!("Medical education #{entry}: institution is required"),
            ));
        }
        if education.degree.is_empty() {
            findings.push(ValidationError::error(
                "medical_education.degree",
                format!("Medical education #{entry}: degree is required"),
            ));
        }
        if education.start_date.is_none() {
            findings.push(ValidationError::error(
                "medical_education.start_date",
                format!("Medical education #{entry}: start date is required"),
            ));
        }
        if education.graduation_year.is_none() {
            findings.push(ValidationError::error(
                "medical_education.graduation_year",
                format!("Medical education #{entry}: graduation year is required"),
            ));
        }
    }

    // Required-looking fields in other sections do not gate export.
    for (index, experience) in data.experiences.iter().enumerate() {
        if experience.role.is_empty() {
            findings.push(ValidationError::warning(
                "experiences.role",
                format!("Experience #{}: role is empty", index + 1),
            ));
        }
    }
    for (index, award) in data.awards.iter().enumerate() {
        if award.title.is_empty() {
            findings.push(ValidationError::warning(
                "awards.title",
                format!("Award #{}: title is empty", index + 1),
            ));
        }
    }

    findings
}

/// Check whether the snapshot may be exported (no blocking findings).
pub fn is_export_ready(data: &ResumeData) -> bool {
    export_readiness(data)
        .iter()
        .all(|finding| finding.severity != ValidationSeverity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::award::Award;
    use crate::education::Education;
    use crate::entry::SectionEntry;
    use chrono::NaiveDate;

    fn ready_snapshot() -> ResumeData {
        let mut data = ResumeData::default();
        data.personal_details.first_name = "Jane".to_string();
        data.personal_details.last_name = "Doe".to_string();
        data.personal_details.id_type = "GMC".to_string();
        data.personal_details.id_number = "1234567".to_string();
        data.personal_details.address = "1 Harley Street, London".to_string();
        data.personal_details.phone = "+44 20 7000 0000".to_string();
        data.personal_details.email = "jane.doe@example.org".to_string();

        let mut education = Education::with_id("edu-1".to_string());
        education.institution = "Harvard Medical School".to_string();
        education.degree = "MD".to_string();
        education.start_date = NaiveDate::from_ymd_opt(2010, 1, 1);
        education.graduation_year = NaiveDate::from_ymd_opt(2014, 1, 1);
        data.medical_education.push(education);
        data
    }

    #[test]
    fn empty_snapshot_is_not_ready() {
        let data = ResumeData::default();
        assert!(!is_export_ready(&data));

        let findings = export_readiness(&data);
        for field in [
            "first_name",
            "last_name",
            "id_type",
            "id_number",
            "address",
            "phone",
            "email",
            "medical_education",
        ] {
            assert!(
                findings.iter().any(|f| f.field == field),
                "missing finding for {field}"
            );
        }
    }

    #[test]
    fn fully_populated_required_sections_are_ready() {
        // All other sections empty: still exportable.
        assert!(is_export_ready(&ready_snapshot()));
    }

    #[test]
    fn each_personal_field_gates_export() {
        use crate::personal::PersonalField;

        let blank_fields = [
            PersonalField::FirstName(String::new()),
            PersonalField::LastName(String::new()),
            PersonalField::IdType(String::new()),
            PersonalField::IdNumber(String::new()),
            PersonalField::Address(String::new()),
            PersonalField::Phone(String::new()),
            PersonalField::Email(String::new()),
        ];
        for field in blank_fields {
            let mut data = ready_snapshot();
            data.personal_details.apply(field.clone());
            assert!(!is_export_ready(&data), "export allowed with blank {field:?}");
        }
    }

    #[test]
    fn incomplete_medical_entry_gates_export() {
        let mut data = ready_snapshot();
        data.medical_education[0].degree.clear();
        assert!(!is_export_ready(&data));

        let mut data = ready_snapshot();
        data.medical_education[0].start_date = None;
        assert!(!is_export_ready(&data));

        let mut data = ready_snapshot();
        data.medical_education[0].graduation_year = None;
        assert!(!is_export_ready(&data));

        let mut data = ready_snapshot();
        data.medical_education[0].institution.clear();
        assert!(!is_export_ready(&data));
    }

    #[test]
    fn warnings_do_not_gate_export() {
        let mut data = ready_snapshot();
        data.awards.push(Award::with_id("a1".to_string()));
        let findings = export_readiness(&data);
        assert!(findings
            .iter()
            .any(|f| f.severity == ValidationSeverity::Warning));
        assert!(is_export_ready(&data));
    }
}

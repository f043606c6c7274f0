//! Closed vocabularies offered by the input surface
//!
//! The stored fields stay free-form strings; these lists define what the
//! form's select widgets offer. Every list ends in an "Other" escape hatch.

/// Medical qualifications for the medical-education collection.
pub const MEDICAL_DEGREES: &[&str] = &[
    "MBBS", "MD", "MS", "DO", "Ph.D", "DM", "MCh", "DNB", "MRCP", "MRCS", "FRCS", "FRCP", "Other",
];

/// Degrees for the additional-education collection.
pub const ADDITIONAL_DEGREES: &[&str] = &[
    "BS",
    "BA",
    "BBA",
    "MBA",
    "MS",
    "MA",
    "Ph.D",
    "Diploma",
    "Certificate",
    "Other",
];

/// Engagement types for experience entries.
pub const EXPERIENCE_TYPES: &[&str] = &[
    "Full-Time",
    "Part-Time",
    "Fellowship",
    "Residency",
    "Internship",
    "Locum",
    "Volunteer",
    "Consultant",
    "Other",
];

/// Medical registration bodies for the id-type field.
pub const ID_TYPES: &[&str] = &[
    "NMC", "GMC", "IMC", "PMDC", "BMDC", "SLMC", "AMC", "USMLE", "RLMC", "Other",
];

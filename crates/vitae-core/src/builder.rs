//! Top-level coordinator owning the per-session form state
//!
//! `ResumeBuilder` replaces the many independent mutable variables of a
//! form-driven UI with one explicit, serializable state object. Each section
//! is edited through its own store; `snapshot` composes all of them into the
//! `ResumeData` aggregate the templates and the export gate consume.

use serde::{Deserialize, Serialize};
use vitae_domain::{
    Award, Education, Experience, Language, Membership, PersonalDetails, PersonalField,
    ResumeData, TemplateKind,
};

use crate::publications::PublicationStore;
use crate::store::SectionStore;

/// The per-session form state: one store per section plus the scalar
/// hobbies text and the selected template.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeBuilder {
    personal: PersonalDetails,
    medical_education: SectionStore<Education>,
    additional_education: SectionStore<Education>,
    experiences: SectionStore<Experience>,
    awards: SectionStore<Award>,
    publications: PublicationStore,
    memberships: SectionStore<Membership>,
    languages: SectionStore<Language>,
    hobbies: String,
    selected_template: TemplateKind,
}

impl ResumeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn personal(&self) -> &PersonalDetails {
        &self.personal
    }

    /// Apply one tagged field update to the personal details record.
    pub fn update_personal(&mut self, field: PersonalField) {
        self.personal.apply(field);
    }

    pub fn medical_education(&self) -> &SectionStore<Education> {
        &self.medical_education
    }

    pub fn medical_education_mut(&mut self) -> &mut SectionStore<Education> {
        &mut self.medical_education
    }

    pub fn additional_education(&self) -> &SectionStore<Education> {
        &self.additional_education
    }

    pub fn additional_education_mut(&mut self) -> &mut SectionStore<Education> {
        &mut self.additional_education
    }

    pub fn experiences(&self) -> &SectionStore<Experience> {
        &self.experiences
    }

    pub fn experiences_mut(&mut self) -> &mut SectionStore<Experience> {
        &mut self.experiences
    }

    pub fn awards(&self) -> &SectionStore<Award> {
        &self.awards
    }

    pub fn awards_mut(&mut self) -> &mut SectionStore<Award> {
        &mut self.awards
    }

    pub fn publications(&self) -> &PublicationStore {
        &self.publications
    }

    pub fn publications_mut(&mut self) -> &mut PublicationStore {
        &mut self.publications
    }

    pub fn memberships(&self) -> &SectionStore<Membership> {
        &self.memberships
    }

    pub fn memberships_mut(&mut self) -> &mut SectionStore<Membership> {
        &mut self.memberships
    }

    pub fn languages(&self) -> &SectionStore<Language> {
        &self.languages
    }

    pub fn languages_mut(&mut self) -> &mut SectionStore<Language> {
        &mut self.languages
    }

    pub fn hobbies(&self) -> &str {
        &self.hobbies
    }

    pub fn set_hobbies(&mut self, hobbies: impl Into<String>) {
        self.hobbies = hobbies.into();
    }

    pub fn selected_template(&self) -> TemplateKind {
        self.selected_template
    }

    pub fn select_template(&mut self, template: TemplateKind) {
        self.selected_template = template;
    }

    /// Compose the current section values into one denormalized snapshot.
    ///
    /// Pure and idempotent: the result is fully derived from the stores and
    /// carries no state of its own, so it can be recomputed on every read.
    pub fn snapshot(&self) -> ResumeData {
        ResumeData {
            personal_details: self.personal.clone(),
            medical_education: self.medical_education.entries().to_vec(),
            additional_education: self.additional_education.entries().to_vec(),
            awards: self.awards.entries().to_vec(),
            experiences: self.experiences.entries().to_vec(),
            detailed_publications: self.publications.detailed().entries().to_vec(),
            simple_publications: self.publications.simple().entries().to_vec(),
            use_simple_publications: self.publications.mode().uses_simple(),
            memberships: self.memberships.entries().to_vec(),
            hobbies: self.hobbies.clone(),
            languages: self.languages.entries().to_vec(),
            selected_template: self.selected_template,
        }
    }
}

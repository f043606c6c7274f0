//! The three built-in CV layouts
//!
//! Each layout is a strategy mapping the résumé snapshot to a complete Typst
//! document body. All three consume the identical `ResumeData` shape, share
//! the formatting contract from [`crate::format`], and suppress a section
//! entirely when its backing collection is empty; only column structure,
//! color, and typography differ between them.

mod executive;
mod modern;
mod professional;

pub use executive::ExecutiveTemplate;
pub use modern::ModernTemplate;
pub use professional::ProfessionalTemplate;

use vitae_domain::{ResumeData, TemplateKind};

use crate::format::{citation_markup, escape_typst};

/// One CV layout strategy.
pub trait CvTemplate: Send + Sync {
    /// The identifier this strategy renders for.
    fn kind(&self) -> TemplateKind;

    /// Produce the full Typst document body for the snapshot.
    fn render(&self, data: &ResumeData) -> String;
}

/// Select the strategy for a template identifier. The set is closed: every
/// identifier maps to exactly one of the three built-in layouts.
pub fn template_for(kind: TemplateKind) -> &'static dyn CvTemplate {
    match kind {
        TemplateKind::Professional => &ProfessionalTemplate,
        TemplateKind::Modern => &ModernTemplate,
        TemplateKind::Executive => &ExecutiveTemplate,
    }
}

/// Whether the publications section has anything to show in the current
/// entry mode.
pub(crate) fn has_publications(data: &ResumeData) -> bool {
    if data.use_simple_publications {
        !data.simple_publications.is_empty()
    } else {
        !data.detailed_publications.is_empty()
    }
}

/// The publication list items for the current entry mode: free-text entries
/// verbatim, structured entries as the shared citation line.
pub(crate) fn publication_items(data: &ResumeData) -> Vec<String> {
    if data.use_simple_publications {
        data.simple_publications
            .iter()
            .map(|publication| escape_typst(&publication.text))
            .collect()
    } else {
        data.detailed_publications.iter().map(citation_markup).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vitae_domain::{
        Award, Education, Experience, Language, Membership, Publication, SectionEntry,
        SimplePublication,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn populated_snapshot() -> ResumeData {
        let mut data = ResumeData::default();
        data.personal_details.first_name = "Jane".to_string();
        data.personal_details.last_name = "Doe".to_string();
        data.personal_details.organization = "St. Mary's Hospital".to_string();
        data.personal_details.id_type = "GMC".to_string();
        data.personal_details.id_number = "1234567".to_string();
        data.personal_details.address = "1 Harley Street, London".to_string();
        data.personal_details.phone = "+44 20 7000 0000".to_string();
        data.personal_details.email = "jane.doe@example.org".to_string();

        let mut education = Education::with_id("edu-1".to_string());
        education.institution = "Harvard Medical School".to_string();
        education.degree = "MD".to_string();
        education.start_date = Some(date(2010, 1, 1));
        education.graduation_year = Some(date(2014, 1, 1));
        data.medical_education.push(education);

        let mut extra = Education::with_id("edu-2".to_string());
        extra.institution = "London Business School".to_string();
        extra.degree = "MBA".to_string();
        extra.start_date = Some(date(2016, 9, 1));
        extra.end_date = Some(date(2018, 6, 1));
        data.additional_education.push(extra);

        let mut experience = Experience::with_id("exp-1".to_string());
        experience.role = "Consultant Cardiologist".to_string();
        experience.department = "Cardiology".to_string();
        experience.organization = "Royal Free Hospital".to_string();
        experience.start_date = Some(date(2018, 7, 1));
        experience.kind = "Full-Time".to_string();
        experience.description = "Led the catheterization laboratory.".to_string();
        data.experiences.push(experience);

        let mut publication = Publication::with_id("pub-1".to_string());
        publication.authors = "Doe J, Smith A".to_string();
        publication.title = "Outcomes in Interventional Cardiology".to_string();
        publication.journal = "The Lancet".to_string();
        publication.date = Some(date(2021, 2, 1));
        publication.doi = "10.1000".to_string();
        data.detailed_publications.push(publication);
        data.use_simple_publications = false;

        let mut award = Award::with_id("aw-1".to_string());
        award.title = "Young Investigator Award".to_string();
        award.organization = "European Society of Cardiology".to_string();
        award.date = Some(date(2019, 8, 1));
        data.awards.push(award);

        let mut membership = Membership::with_id("mem-1".to_string());
        membership.name = "Royal College of Physicians".to_string();
        membership.issue_date = Some(date(2015, 1, 1));
        data.memberships.push(membership);

        let mut language = Language::with_id("lang-1".to_string());
        language.name = "Nepali".to_string();
        data.languages.push(language);

        data.hobbies = "Hiking, photography".to_string();
        data
    }

    #[test]
    fn dispatch_is_closed_over_the_three_kinds() {
        for kind in TemplateKind::ALL {
            assert_eq!(template_for(kind).kind(), kind);
        }
    }

    #[test]
    fn every_template_renders_all_populated_sections() {
        let data = populated_snapshot();
        for kind in TemplateKind::ALL {
            let doc = template_for(kind).render(&data);
            for expected in [
                "Jane Doe",
                "St. Mary's Hospital",
                "GMC",
                "1234567",
                "Harvard Medical School",
                "London Business School",
                "Consultant Cardiologist",
                "Royal Free Hospital",
                "Outcomes in Interventional Cardiology",
                "Young Investigator Award",
                "Royal College of Physicians",
                "Nepali",
                "Hiking, photography",
            ] {
                assert!(
                    doc.contains(expected),
                    "{kind} template dropped {expected:?}"
                );
            }
        }
    }

    #[test]
    fn empty_sections_are_suppressed_entirely() {
        let mut data = ResumeData::default();
        data.personal_details.first_name = "Jane".to_string();
        data.personal_details.last_name = "Doe".to_string();

        for kind in TemplateKind::ALL {
            let doc = template_for(kind).render(&data);
            for heading in [
                "EDUCATION",
                "EXPERIENCE",
                "PUBLICATIONS",
                "AWARDS",
                "DISTINCTIONS",
                "MEMBERSHIPS",
                "LANGUAGES",
                "INTERESTS",
            ] {
                assert!(
                    !doc.contains(heading),
                    "{kind} template shows empty {heading} section"
                );
            }
        }
    }

    #[test]
    fn publications_follow_the_entry_mode() {
        let mut data = populated_snapshot();
        let mut simple = SimplePublication::with_id("sp-1".to_string());
        simple.text = "Doe J. (2020). A pasted citation.".to_string();
        data.simple_publications.push(simple);

        data.use_simple_publications = true;
        for kind in TemplateKind::ALL {
            let doc = template_for(kind).render(&data);
            assert!(doc.contains("A pasted citation."));
            assert!(!doc.contains("Outcomes in Interventional Cardiology"));
        }

        data.use_simple_publications = false;
        for kind in TemplateKind::ALL {
            let doc = template_for(kind).render(&data);
            assert!(doc.contains("Outcomes in Interventional Cardiology"));
            assert!(!doc.contains("A pasted citation."));
        }
    }

    #[test]
    fn citation_line_is_identical_across_templates() {
        let data = populated_snapshot();
        let citation = citation_markup(&data.detailed_publications[0]);
        for kind in TemplateKind::ALL {
            let doc = template_for(kind).render(&data);
            assert!(
                doc.contains(&citation),
                "{kind} template altered the citation line"
            );
        }
    }

    #[test]
    fn open_ended_ranges_render_present() {
        let data = populated_snapshot();
        // The experience entry has no end date.
        for kind in TemplateKind::ALL {
            let doc = template_for(kind).render(&data);
            assert!(doc.contains("Jul 2018 - Present"));
        }
    }

    #[test]
    fn photo_is_referenced_only_by_layouts_that_show_it() {
        let mut data = populated_snapshot();
        data.personal_details.photo = Some("data:image/png;base64,aGk=".to_string());

        let professional = template_for(TemplateKind::Professional).render(&data);
        assert!(!professional.contains("photo.png"));

        for kind in [TemplateKind::Modern, TemplateKind::Executive] {
            let doc = template_for(kind).render(&data);
            assert!(doc.contains("photo.png"), "{kind} template dropped the photo");
        }
    }
}

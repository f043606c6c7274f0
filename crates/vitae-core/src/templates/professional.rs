//! Single-column layout with understated section rules

use vitae_domain::{Award, Education, Experience, ResumeData, TemplateKind};

use crate::format::{
    date_range, escape_typst, membership_range, registration_line, year,
};

use super::{has_publications, publication_items, CvTemplate};

/// The default layout: one column, grey section rules, no photo.
pub struct ProfessionalTemplate;

const PREAMBLE: &str = r##"#set par(leading: 0.5em)
#show heading.where(level: 2): it => {
  v(0.8em)
  text(size: 11pt, weight: "bold", it.body)
  v(-0.5em)
  line(length: 100%, stroke: 0.5pt + gray)
  v(0.2em)
}
"##;

impl CvTemplate for ProfessionalTemplate {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Professional
    }

    fn render(&self, data: &ResumeData) -> String {
        let details = &data.personal_details;
        let mut doc = String::from(PREAMBLE);

        doc.push_str(&format!(
            "#text(size: 17pt, weight: \"bold\")[{}]\n\n",
            escape_typst(&details.full_name())
        ));
        if !details.organization.is_empty() {
            doc.push_str(&format!(
                "#text(size: 12pt)[{}]\n\n",
                escape_typst(&details.organization)
            ));
        }
        doc.push_str(&format!("{}\\\n", escape_typst(&details.address)));
        doc.push_str(&format!(
            "{} | {}\\\n",
            escape_typst(&details.phone),
            escape_typst(&details.email)
        ));
        doc.push_str(&registration_line(details));
        doc.push_str("\n\n");

        if !data.medical_education.is_empty() || !data.additional_education.is_empty() {
            doc.push_str("== EDUCATION\n\n");
            for education in data
                .medical_education
                .iter()
                .chain(data.additional_education.iter())
            {
                push_education(&mut doc, education);
            }
        }

        if !data.experiences.is_empty() {
            doc.push_str("== EXPERIENCE\n\n");
            for experience in &data.experiences {
                push_experience(&mut doc, experience);
            }
        }

        if has_publications(data) {
            doc.push_str("== PUBLICATIONS\n\n");
            for item in publication_items(data) {
                doc.push_str(&format!("- {item}\n"));
            }
            doc.push('\n');
        }

        if !data.awards.is_empty() {
            doc.push_str("== HONORS & AWARDS\n\n");
            for award in &data.awards {
                push_award(&mut doc, award);
            }
        }

        if !data.memberships.is_empty() {
            doc.push_str("== PROFESSIONAL MEMBERSHIPS\n\n");
            for membership in &data.memberships {
                doc.push_str(&format!(
                    "#grid(columns: (1fr, auto), [*{}*], [{}])\n",
                    escape_typst(&membership.name),
                    membership_range(membership)
                ));
                if !membership.remarks.is_empty() {
                    doc.push_str(&format!("_{}_\n", escape_typst(&membership.remarks)));
                }
                doc.push('\n');
            }
        }

        // Languages and interests share a row at the bottom of the page.
        let languages = languages_block(data);
        let interests = interests_block(data);
        match (languages, interests) {
            (Some(languages), Some(interests)) => {
                doc.push_str(&format!(
                    "#grid(columns: (1fr, 1fr), gutter: 16pt,\n[\n{languages}],\n[\n{interests}],\n)\n"
                ));
            }
            (Some(block), None) | (None, Some(block)) => doc.push_str(&block),
            (None, None) => {}
        }

        doc
    }
}

fn push_education(doc: &mut String, education: &Education) {
    doc.push_str(&format!(
        "#grid(columns: (1fr, auto), [*{}*], [{}])\n",
        escape_typst(&education.degree),
        date_range(education.start_date, education.end_date)
    ));
    doc.push_str(&format!("{}\n", escape_typst(&education.institution)));
    if !education.score.is_empty() {
        doc.push_str(&format!("\\\nScore: {}\n", escape_typst(&education.score)));
    }
    if !education.remarks.is_empty() {
        doc.push_str(&format!("\\\n_{}_\n", escape_typst(&education.remarks)));
    }
    doc.push('\n');
}

fn push_experience(doc: &mut String, experience: &Experience) {
    doc.push_str(&format!(
        "#grid(columns: (1fr, auto), [*{}, {}*], [{}])\n",
        escape_typst(&experience.role),
        escape_typst(&experience.department),
        date_range(experience.start_date, experience.end_date)
    ));
    doc.push_str(&format!(
        "{} ({})\n",
        escape_typst(&experience.organization),
        escape_typst(&experience.kind)
    ));
    if !experience.description.is_empty() {
        doc.push_str(&format!("\\\n{}\n", escape_typst(&experience.description)));
    }
    doc.push('\n');
}

fn push_award(doc: &mut String, award: &Award) {
    let dated = match year(award.date) {
        Some(year) => format!(
            "#grid(columns: (1fr, auto), [*{}*], [{}])\n",
            escape_typst(&award.title),
            year
        ),
        None => format!("*{}*\n", escape_typst(&award.title)),
    };
    doc.push_str(&dated);
    doc.push_str(&format!("{}\n", escape_typst(&award.organization)));
    if !award.description.is_empty() {
        doc.push_str(&format!("\\\n_{}_\n", escape_typst(&award.description)));
    }
    doc.push('\n');
}

fn languages_block(data: &ResumeData) -> Option<String> {
    if data.languages.is_empty() {
        return None;
    }
    let mut block = String::from("== LANGUAGES\n\n");
    for language in &data.languages {
        block.push_str(&format!(
            "*{}:* {}\\\n",
            escape_typst(&language.name),
            language.proficiency
        ));
    }
    block.push('\n');
    Some(block)
}

fn interests_block(data: &ResumeData) -> Option<String> {
    if data.hobbies.is_empty() {
        return None;
    }
    Some(format!(
        "== INTERESTS\n\n{}\n",
        escape_typst(&data.hobbies)
    ))
}

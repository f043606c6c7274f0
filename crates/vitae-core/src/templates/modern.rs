//! Two-column layout with a colored header band and sidebar

use vitae_domain::{ResumeData, TemplateKind};

use crate::format::{date_range, escape_typst, membership_range, year};
use crate::photo;

use super::{has_publications, publication_items, CvTemplate};

/// Blue header band with the photo, sidebar for contact details, main
/// column for the chronological sections.
pub struct ModernTemplate;

const ACCENT: &str = "#1d4ed8";
const ACCENT_LIGHT: &str = "#bfdbfe";

const PREAMBLE: &str = r##"#set par(leading: 0.5em)
#show heading.where(level: 2): it => {
  v(0.7em)
  text(size: 12pt, weight: "bold", fill: rgb("#1d4ed8"), it.body)
  v(-0.4em)
  line(length: 100%, stroke: 0.5pt + rgb("#bfdbfe"))
  v(0.2em)
}
#show heading.where(level: 3): it => {
  v(0.7em)
  text(size: 11pt, weight: "bold", fill: rgb("#1d4ed8"), it.body)
  v(0.2em)
}
"##;

impl CvTemplate for ModernTemplate {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Modern
    }

    fn render(&self, data: &ResumeData) -> String {
        let mut doc = String::from(PREAMBLE);
        doc.push_str(&header_band(data));
        doc.push_str(&format!(
            "#grid(columns: (1fr, 2fr), gutter: 18pt,\n[\n{}],\n[\n{}],\n)\n",
            sidebar(data),
            main_column(data)
        ));
        doc
    }
}

fn header_band(data: &ResumeData) -> String {
    let details = &data.personal_details;
    let mut name_block = format!(
        "#text(size: 20pt, weight: \"bold\", fill: white)[{}]",
        escape_typst(&details.full_name())
    );
    if !details.organization.is_empty() {
        name_block.push_str(&format!(
            " \\\n#text(size: 13pt, fill: rgb(\"{ACCENT_LIGHT}\"))[{}]",
            escape_typst(&details.organization)
        ));
    }

    let inner = match &details.photo {
        Some(reference) => format!(
            "#grid(columns: (auto, 1fr), gutter: 14pt,\nimage(\"{}\", width: 64pt),\n[{name_block}],\n)",
            photo::asset_path(reference)
        ),
        None => name_block,
    };

    format!("#block(width: 100%, fill: rgb(\"{ACCENT}\"), inset: 16pt)[\n{inner}\n]\n")
}

fn sidebar(data: &ResumeData) -> String {
    let details = &data.personal_details;
    let mut side = String::from("=== CONTACT\n\n");
    side.push_str(&format!(
        "*Address*\\\n{}\n\n",
        escape_typst(&details.address)
    ));
    side.push_str(&format!("*Phone*\\\n{}\n\n", escape_typst(&details.phone)));
    side.push_str(&format!("*Email*\\\n{}\n\n", escape_typst(&details.email)));
    side.push_str(&format!(
        "*{}*\\\n{}\n\n",
        escape_typst(&details.id_type),
        escape_typst(&details.id_number)
    ));
    if details.is_accredited && !details.accredited_org.is_empty() {
        side.push_str(&format!(
            "*{}*\\\n{}\n\n",
            escape_typst(&details.accredited_org),
            escape_typst(&details.accredited_id)
        ));
    }

    if !data.languages.is_empty() {
        side.push_str("=== LANGUAGES\n\n");
        for language in &data.languages {
            side.push_str(&format!(
                "*{}*\\\n{}\n\n",
                escape_typst(&language.name),
                language.proficiency
            ));
        }
    }

    if !data.hobbies.is_empty() {
        side.push_str(&format!(
            "=== INTERESTS\n\n{}\n\n",
            escape_typst(&data.hobbies)
        ));
    }

    if !data.memberships.is_empty() {
        side.push_str("=== MEMBERSHIPS\n\n");
        for membership in &data.memberships {
            side.push_str(&format!("*{}*\\\n", escape_typst(&membership.name)));
            side.push_str(&format!(
                "#text(size: 8pt)[{}]\n",
                membership_range(membership)
            ));
            if !membership.remarks.is_empty() {
                side.push_str(&format!(
                    "\\\n#text(size: 8pt)[{}]\n",
                    escape_typst(&membership.remarks)
                ));
            }
            side.push('\n');
        }
    }

    side
}

fn main_column(data: &ResumeData) -> String {
    let mut main = String::new();

    if !data.medical_education.is_empty() || !data.additional_education.is_empty() {
        main.push_str("== EDUCATION\n\n");
        for education in data
            .medical_education
            .iter()
            .chain(data.additional_education.iter())
        {
            let mut left = format!(
                "*{}* \\\n{}",
                escape_typst(&education.degree),
                escape_typst(&education.institution)
            );
            if !education.score.is_empty() {
                left.push_str(&format!(" \\\nScore: {}", escape_typst(&education.score)));
            }
            if !education.remarks.is_empty() {
                left.push_str(&format!(" \\\n_{}_", escape_typst(&education.remarks)));
            }

            let mut right = date_range(education.start_date, education.end_date);
            if let Some(graduated) = year(education.graduation_year) {
                right.push_str(&format!(" \\\nGraduation: {graduated}"));
            }

            main.push_str(&format!(
                "#grid(columns: (1fr, auto), gutter: 10pt, [{left}], align(right)[#text(fill: gray)[{right}]])\n\n"
            ));
        }
    }

    if !data.experiences.is_empty() {
        main.push_str("== EXPERIENCE\n\n");
        for experience in &data.experiences {
            let mut left = format!(
                "*{}* \\\n{} \\\n{} ({})",
                escape_typst(&experience.role),
                escape_typst(&experience.organization),
                escape_typst(&experience.department),
                escape_typst(&experience.kind)
            );
            if !experience.description.is_empty() {
                left.push_str(&format!(
                    " \\\n{}",
                    escape_typst(&experience.description)
                ));
            }
            let right = date_range(experience.start_date, experience.end_date);
            main.push_str(&format!(
                "#grid(columns: (1fr, auto), gutter: 10pt, [{left}], align(right)[#text(fill: gray)[{right}]])\n\n"
            ));
        }
    }

    if !data.awards.is_empty() {
        main.push_str("== HONORS & AWARDS\n\n");
        for award in &data.awards {
            let mut left = format!(
                "*{}* \\\n{}",
                escape_typst(&award.title),
                escape_typst(&award.organization)
            );
            if !award.description.is_empty() {
                left.push_str(&format!(" \\\n_{}_", escape_typst(&award.description)));
            }
            match year(award.date) {
                Some(dated) => main.push_str(&format!(
                    "#grid(columns: (1fr, auto), gutter: 10pt, [{left}], align(right)[#text(fill: gray)[{dated}]])\n\n"
                )),
                None => main.push_str(&format!("{left}\n\n")),
            }
        }
    }

    if has_publications(data) {
        main.push_str("== PUBLICATIONS\n\n");
        for item in publication_items(data) {
            main.push_str(&format!("- {item}\n"));
        }
        main.push('\n');
    }

    main
}

//! Centered-header layout with amber accents, experience first

use vitae_domain::{ResumeData, TemplateKind};

use crate::format::{
    date_range, escape_typst, membership_range, registration_line, year,
};
use crate::photo;

use super::{has_publications, publication_items, CvTemplate};

/// Formal layout: centered header, professional experience leading, awards
/// and the closing sections in two-column grids.
pub struct ExecutiveTemplate;

const ACCENT: &str = "#b45309";

const PREAMBLE: &str = r##"#set par(leading: 0.5em)
#show heading.where(level: 2): it => {
  v(0.8em)
  text(size: 12pt, weight: "bold", tracking: 1pt, it.body)
  v(-0.4em)
  line(length: 100%, stroke: 1pt + rgb("#b45309"))
  v(0.2em)
}
"##;

impl CvTemplate for ExecutiveTemplate {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Executive
    }

    fn render(&self, data: &ResumeData) -> String {
        let details = &data.personal_details;
        let mut doc = String::from(PREAMBLE);

        // Centered header, name in caps.
        doc.push_str("#align(center)[\n");
        if let Some(reference) = &details.photo {
            doc.push_str(&format!(
                "#image(\"{}\", width: 72pt)\n",
                photo::asset_path(reference)
            ));
        }
        doc.push_str(&format!(
            "#text(size: 20pt, weight: \"bold\", tracking: 1.5pt)[{}]\n",
            escape_typst(&details.full_name().to_uppercase())
        ));
        if !details.organization.is_empty() {
            doc.push_str(&format!(
                " \\\n#text(size: 13pt)[{}]\n",
                escape_typst(&details.organization)
            ));
        }
        doc.push_str(&format!(
            " \\\n#text(size: 9pt)[{} \\\n{} | {} \\\n{}]\n",
            escape_typst(&details.address),
            escape_typst(&details.phone),
            escape_typst(&details.email),
            registration_line(details)
        ));
        doc.push_str("]\n\n");

        if !data.experiences.is_empty() {
            doc.push_str("== PROFESSIONAL EXPERIENCE\n\n");
            for experience in &data.experiences {
                doc.push_str(&format!(
                    "#grid(columns: (1fr, auto), [*{}*], [#text(fill: rgb(\"{ACCENT}\"), weight: \"semibold\")[{}]])\n",
                    escape_typst(&experience.role),
                    date_range(experience.start_date, experience.end_date)
                ));
                doc.push_str(&format!(
                    "#grid(columns: (1fr, auto), [_{}, {}_], [#text(size: 8pt)[{}]])\n",
                    escape_typst(&experience.organization),
                    escape_typst(&experience.department),
                    escape_typst(&experience.kind)
                ));
                if !experience.description.is_empty() {
                    doc.push_str(&format!(
                        "#par(justify: true)[{}]\n",
                        escape_typst(&experience.description)
                    ));
                }
                doc.push('\n');
            }
        }

        if !data.medical_education.is_empty() || !data.additional_education.is_empty() {
            doc.push_str("== EDUCATION\n\n");
            for education in data
                .medical_education
                .iter()
                .chain(data.additional_education.iter())
            {
                let graduated = year(education.graduation_year).unwrap_or_default();
                doc.push_str(&format!(
                    "#grid(columns: (1fr, auto), [*{}*], [#text(fill: rgb(\"{ACCENT}\"), weight: \"semibold\")[{graduated}]])\n",
                    escape_typst(&education.degree)
                ));
                doc.push_str(&format!("_{}_\n", escape_typst(&education.institution)));
                let mut detail = format!(
                    " \\\n#text(size: 9pt)[{}",
                    date_range(education.start_date, education.end_date)
                );
                if !education.score.is_empty() {
                    detail.push_str(&format!(
                        " #h(1fr) Score: {}",
                        escape_typst(&education.score)
                    ));
                }
                detail.push_str("]\n");
                doc.push_str(&detail);
                if !education.remarks.is_empty() {
                    doc.push_str(&format!(
                        " \\\n#text(size: 9pt)[{}]\n",
                        escape_typst(&education.remarks)
                    ));
                }
                doc.push('\n');
            }
        }

        if !data.awards.is_empty() {
            doc.push_str("== HONORS & DISTINCTIONS\n\n");
            let cells: Vec<String> = data
                .awards
                .iter()
                .map(|award| {
                    let mut cell = match year(award.date) {
                        Some(dated) => format!(
                            "*{}* #h(1fr) #text(fill: rgb(\"{ACCENT}\"))[{dated}] \\\n",
                            escape_typst(&award.title)
                        ),
                        None => format!("*{}* \\\n", escape_typst(&award.title)),
                    };
                    cell.push_str(&format!("_{}_", escape_typst(&award.organization)));
                    if !award.description.is_empty() {
                        cell.push_str(&format!(
                            " \\\n#text(size: 9pt)[{}]",
                            escape_typst(&award.description)
                        ));
                    }
                    format!("[{cell}]")
                })
                .collect();
            doc.push_str(&format!(
                "#grid(columns: (1fr, 1fr), gutter: 12pt,\n{},\n)\n\n",
                cells.join(",\n")
            ));
        }

        if has_publications(data) {
            doc.push_str("== PUBLICATIONS\n\n");
            for item in publication_items(data) {
                doc.push_str(&format!("- #par(justify: true)[{item}]\n"));
            }
            doc.push('\n');
        }

        // Memberships sit beside languages and interests at the foot.
        let memberships = memberships_block(data);
        let closing = closing_block(data);
        match (memberships, closing) {
            (Some(memberships), Some(closing)) => doc.push_str(&format!(
                "#grid(columns: (1fr, 1fr), gutter: 20pt,\n[\n{memberships}],\n[\n{closing}],\n)\n"
            )),
            (Some(block), None) | (None, Some(block)) => doc.push_str(&block),
            (None, None) => {}
        }

        doc
    }
}

fn memberships_block(data: &ResumeData) -> Option<String> {
    if data.memberships.is_empty() {
        return None;
    }
    let mut block = String::from("== PROFESSIONAL MEMBERSHIPS\n\n");
    for membership in &data.memberships {
        block.push_str(&format!("*{}*\\\n", escape_typst(&membership.name)));
        block.push_str(&format!(
            "#text(size: 9pt, fill: rgb(\"{ACCENT}\"))[{}]\n",
            membership_range(membership)
        ));
        if !membership.remarks.is_empty() {
            block.push_str(&format!(
                "\\\n#text(size: 9pt)[{}]\n",
                escape_typst(&membership.remarks)
            ));
        }
        block.push('\n');
    }
    Some(block)
}

fn closing_block(data: &ResumeData) -> Option<String> {
    let mut block = String::new();
    if !data.languages.is_empty() {
        block.push_str("== LANGUAGES\n\n");
        for language in &data.languages {
            block.push_str(&format!(
                "*{}*: {}\\\n",
                escape_typst(&language.name),
                language.proficiency
            ));
        }
        block.push('\n');
    }
    if !data.hobbies.is_empty() {
        block.push_str(&format!(
            "== INTERESTS\n\n#par(justify: true)[{}]\n",
            escape_typst(&data.hobbies)
        ));
    }
    if block.is_empty() {
        None
    } else {
        Some(block)
    }
}

//! Shared text formatting used identically by all templates
//!
//! The three layouts differ in typography and column structure only; date
//! ranges, bare years, and the detailed citation line must come out the same
//! everywhere, so they live here rather than in the template strategies.

use chrono::NaiveDate;
use vitae_domain::{Membership, PersonalDetails, Publication};

/// "MMM yyyy", e.g. "Jan 2010".
pub fn month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Four-digit year when a date is present.
pub fn year(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y").to_string())
}

/// Four-digit year, or the literal "n.d." for an undated publication.
pub fn year_or_nd(date: Option<NaiveDate>) -> String {
    year(date).unwrap_or_else(|| "n.d.".to_string())
}

/// "{start} - {end}", where a missing end renders as "Present".
pub fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    let started = start.map(month_year).unwrap_or_default();
    let ended = end.map(month_year).unwrap_or_else(|| "Present".to_string());
    format!("{started} - {ended}")
}

/// Membership validity: issue date alone for non-expiring memberships,
/// "{issue} - {expiry}" otherwise.
pub fn membership_range(membership: &Membership) -> String {
    let mut range = membership.issue_date.map(month_year).unwrap_or_default();
    if let Some(expiry) = membership.expiry_date {
        range.push_str(" - ");
        range.push_str(&month_year(expiry));
    }
    range
}

/// Escape characters that are markup-significant in Typst so user text
/// interpolates verbatim.
pub fn escape_typst(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '#' | '$' | '*' | '_' | '`' | '@' | '<' | '>' | '[' | ']' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The citation line for a structured publication, as Typst markup:
/// `{authors}. ({year|n.d.}). {title}. {journal}. DOI: {doi}` with the
/// title italicized and the DOI segment omitted when empty.
pub fn citation_markup(publication: &Publication) -> String {
    let mut line = format!(
        "{}. ({}). _{}_. {}.",
        escape_typst(&publication.authors),
        year_or_nd(publication.date),
        escape_typst(&publication.title),
        escape_typst(&publication.journal),
    );
    if !publication.doi.is_empty() {
        line.push_str(" DOI: ");
        line.push_str(&escape_typst(&publication.doi));
    }
    line
}

/// The registration line for the header: "{idType}: {idNumber}", extended
/// with the accreditation pair when the accredited flag is set.
pub fn registration_line(details: &PersonalDetails) -> String {
    let mut line = format!(
        "{}: {}",
        escape_typst(&details.id_type),
        escape_typst(&details.id_number)
    );
    if details.is_accredited && !details.accredited_org.is_empty() {
        line.push_str(&format!(
            " | {}: {}",
            escape_typst(&details.accredited_org),
            escape_typst(&details.accredited_id)
        ));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_domain::SectionEntry;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_year_matches_display_contract() {
        assert_eq!(month_year(date(2010, 1, 1)), "Jan 2010");
        assert_eq!(month_year(date(2023, 11, 30)), "Nov 2023");
    }

    #[test]
    fn open_ended_range_renders_present() {
        assert_eq!(
            date_range(Some(date(2015, 6, 1)), None),
            "Jun 2015 - Present"
        );
        assert_eq!(
            date_range(Some(date(2015, 6, 1)), Some(date(2018, 9, 1))),
            "Jun 2015 - Sep 2018"
        );
    }

    #[test]
    fn undated_publication_year_is_nd() {
        assert_eq!(year_or_nd(None), "n.d.");
        assert_eq!(year_or_nd(Some(date(2023, 4, 2))), "2023");
    }

    #[test]
    fn membership_range_omits_missing_expiry() {
        let mut membership = vitae_domain::Membership::with_id("m1".to_string());
        membership.issue_date = Some(date(2020, 3, 1));
        assert_eq!(membership_range(&membership), "Mar 2020");

        membership.expiry_date = Some(date(2025, 3, 1));
        assert_eq!(membership_range(&membership), "Mar 2020 - Mar 2025");
    }

    #[test]
    fn citation_line_formats_all_fields() {
        let mut publication = vitae_domain::Publication::with_id("p1".to_string());
        publication.authors = "Smith J, Jones A, et al".to_string();
        publication.title = "Advances in Medical Research".to_string();
        publication.journal = "Journal of Medical Sciences".to_string();
        publication.date = Some(date(2023, 5, 10));
        publication.doi = "10.1000".to_string();

        assert_eq!(
            citation_markup(&publication),
            "Smith J, Jones A, et al. (2023). _Advances in Medical Research_. \
             Journal of Medical Sciences. DOI: 10.1000"
        );
    }

    #[test]
    fn citation_line_handles_missing_date_and_doi() {
        let mut publication = vitae_domain::Publication::with_id("p1".to_string());
        publication.authors = "Smith J".to_string();
        publication.title = "A Note".to_string();
        publication.journal = "The Lancet".to_string();

        assert_eq!(
            citation_markup(&publication),
            "Smith J. (n.d.). _A Note_. The Lancet."
        );
    }

    #[test]
    fn escape_neutralizes_markup_characters() {
        assert_eq!(escape_typst("a*b_c#d"), "a\\*b\\_c\\#d");
        assert_eq!(escape_typst("plain text"), "plain text");
        assert_eq!(escape_typst("x[y]@z"), "x\\[y\\]\\@z");
    }

    #[test]
    fn registration_line_includes_accreditation_when_set() {
        let mut details = PersonalDetails::default();
        details.id_type = "GMC".to_string();
        details.id_number = "1234567".to_string();
        assert_eq!(registration_line(&details), "GMC: 1234567");

        details.is_accredited = true;
        details.accredited_org = "RCP".to_string();
        details.accredited_id = "998877".to_string();
        assert_eq!(registration_line(&details), "GMC: 1234567 | RCP: 998877");

        // The accreditation pair is only shown when an organization is named.
        details.accredited_org.clear();
        assert_eq!(registration_line(&details), "GMC: 1234567");
    }
}

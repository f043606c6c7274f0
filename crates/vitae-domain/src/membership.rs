//! Professional membership entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::SectionEntry;

/// One professional membership. A `None` expiry date means the membership
/// does not expire; the rendered range then stops at the issue date.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub id: String,
    pub name: String,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub remarks: String,
}

/// Tagged single-field update for a membership entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MembershipField {
    Name(String),
    IssueDate(Option<NaiveDate>),
    ExpiryDate(Option<NaiveDate>),
    Remarks(String),
}

impl SectionEntry for Membership {
    type Field = MembershipField;

    fn with_id(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, field: MembershipField) {
        match field {
            MembershipField::Name(v) => self.name = v,
            MembershipField::IssueDate(v) => self.issue_date = v,
            MembershipField::ExpiryDate(v) => self.expiry_date = v,
            MembershipField::Remarks(v) => self.remarks = v,
        }
    }
}

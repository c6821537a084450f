//! Data models for roster processing
//!
//! This module contains the core data structures: one parsed roster row
//! ([`Member`]), the validated aggregate of members sharing a household
//! number ([`Household`]) and the selection enums driven by the command line.

pub mod household;

pub use household::Household;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// =============================================================================
// Member Record
// =============================================================================

/// One parsed roster row
///
/// Members are produced by the record parser and never mutated afterwards;
/// a [`Household`] takes ownership of its members on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Grouping key shared by everyone in the same household
    pub household_no: u32,

    pub first_name: String,

    pub surname: String,

    /// Canonical membership type label (e.g. "Familj", "Hedersmedlem")
    pub membership_type: String,

    /// Street part of the postal address (may be blank)
    pub street: String,

    /// Postcode and city part of the postal address (may be blank)
    pub address: String,

    pub telephone: String,

    pub mobile: String,

    /// At most one email address; blank when the member has none
    pub email: String,

    pub has_paid: bool,
}

impl Member {
    /// Whether the member has an email address
    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }

    /// First name and surname joined by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }
}

// =============================================================================
// Member Properties
// =============================================================================

/// Named member property checked by the household invariants
///
/// Each variant pairs an accessor with the label used in error messages,
/// so the generic checks in [`household`] can iterate over a fixed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    HouseholdNo,
    MembershipType,
    Paid,
    Street,
    Address,
    FirstName,
    Surname,
}

impl MemberField {
    /// Label used in validation messages
    pub fn label(self) -> &'static str {
        match self {
            Self::HouseholdNo => "householdNo",
            Self::MembershipType => "membership type",
            Self::Paid => "paid",
            Self::Street => "street",
            Self::Address => "address",
            Self::FirstName => "first name",
            Self::Surname => "surname",
        }
    }

    /// Value of this property for the given member, as text
    pub fn value(self, member: &Member) -> Cow<'_, str> {
        match self {
            Self::HouseholdNo => Cow::Owned(member.household_no.to_string()),
            Self::MembershipType => Cow::Borrowed(&member.membership_type),
            Self::Paid => Cow::Borrowed(if member.has_paid { "true" } else { "false" }),
            Self::Street => Cow::Borrowed(&member.street),
            Self::Address => Cow::Borrowed(&member.address),
            Self::FirstName => Cow::Borrowed(&member.first_name),
            Self::Surname => Cow::Borrowed(&member.surname),
        }
    }
}

// =============================================================================
// Selection Enums
// =============================================================================

/// Which households to consider, based on email presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MemberFilter {
    /// Every household
    #[default]
    All,
    /// Only households that have an email address
    WithEmails,
    /// Only households without an email address
    WithoutEmails,
}

impl MemberFilter {
    /// Whether a household with or without email passes the filter
    pub fn accepts(self, has_email: bool) -> bool {
        match self {
            Self::All => true,
            Self::WithEmails => has_email,
            Self::WithoutEmails => !has_email,
        }
    }
}

/// Which output channels households receive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelPolicy {
    /// A letter for every household, plus email where an address exists
    #[default]
    PdfAndEmail,
    /// Email where an address exists, a letter otherwise
    EmailOverPdf,
    /// Letters only, no email
    PdfOnly,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> Member {
        Member {
            household_no: 7,
            first_name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            membership_type: "Hedersmedlem".to_string(),
            street: "Streetname 71".to_string(),
            address: "123 City".to_string(),
            telephone: String::new(),
            mobile: "4321".to_string(),
            email: "ada@lovelace.com".to_string(),
            has_paid: true,
        }
    }

    #[test]
    fn test_member_field_values() {
        let member = member();
        assert_eq!(MemberField::HouseholdNo.value(&member), "7");
        assert_eq!(MemberField::Paid.value(&member), "true");
        assert_eq!(MemberField::Street.value(&member), "Streetname 71");
        assert_eq!(MemberField::MembershipType.label(), "membership type");
    }

    #[test]
    fn test_member_helpers() {
        let member = member();
        assert!(member.has_email());
        assert_eq!(member.full_name(), "Ada Lovelace");

        let without_email = Member {
            email: String::new(),
            ..member
        };
        assert!(!without_email.has_email());
    }

    #[test]
    fn test_member_filter_accepts() {
        assert!(MemberFilter::All.accepts(true));
        assert!(MemberFilter::All.accepts(false));
        assert!(MemberFilter::WithEmails.accepts(true));
        assert!(!MemberFilter::WithEmails.accepts(false));
        assert!(!MemberFilter::WithoutEmails.accepts(true));
        assert!(MemberFilter::WithoutEmails.accepts(false));
    }
}

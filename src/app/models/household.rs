//! Household aggregate and its construction-time invariants
//!
//! A [`Household`] is either fully valid or never exists: [`Household::new`]
//! runs every check once and returns the first violation as a
//! [`HouseholdError`]. After construction the aggregate is read-only.

use super::{Member, MemberField};
use crate::constants::membership_labels;
use crate::error::HouseholdError;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

/// Properties that must carry exactly one distinct non-blank value
const EXACTLY_ONE_VALUE: &[MemberField] = &[
    MemberField::HouseholdNo,
    MemberField::MembershipType,
    MemberField::Paid,
];

/// Properties that may carry at most one distinct non-blank value
const AT_MOST_ONE_VALUE: &[MemberField] = &[MemberField::Street, MemberField::Address];

/// Properties that must be non-blank for every member
const NOT_BLANK: &[MemberField] = &[
    MemberField::FirstName,
    MemberField::Surname,
    MemberField::MembershipType,
];

/// Dot-atom local part, `@`, hostname-style domain labels
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Validated, immutable group of members sharing one household number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Household {
    members: Vec<Member>,
}

impl Household {
    /// Create a household, enforcing all invariants in order
    ///
    /// The checks run as: non-empty, exactly-one values, at-most-one values,
    /// non-blank values, the family rule and finally email validation. The
    /// first violated rule is returned.
    pub fn new(members: Vec<Member>) -> Result<Self, HouseholdError> {
        if members.is_empty() {
            return Err(HouseholdError::Empty);
        }

        let household = Self { members };
        household.validate()?;
        Ok(household)
    }

    fn validate(&self) -> Result<(), HouseholdError> {
        let household_no = self.household_number();

        for &field in EXACTLY_ONE_VALUE {
            match self.distinct_non_blank_values(field) {
                0 => {
                    return Err(HouseholdError::NoValues {
                        household_no,
                        property: field.label(),
                    });
                }
                1 => {}
                _ => {
                    return Err(HouseholdError::DifferentValues {
                        household_no,
                        property: field.label(),
                    });
                }
            }
        }

        for &field in AT_MOST_ONE_VALUE {
            if self.distinct_non_blank_values(field) > 1 {
                return Err(HouseholdError::DifferentValues {
                    household_no,
                    property: field.label(),
                });
            }
        }

        for &field in NOT_BLANK {
            if self
                .members
                .iter()
                .any(|member| field.value(member).is_empty())
            {
                return Err(HouseholdError::BlankValues {
                    household_no,
                    property: field.label(),
                });
            }
        }

        if self.has_several_members()
            && self
                .members
                .iter()
                .any(|member| member.membership_type != membership_labels::FAMILY)
        {
            return Err(HouseholdError::NotAllFamily {
                household_no,
                family_label: membership_labels::FAMILY,
            });
        }

        let email = self.first_email();
        if !email.is_empty() && !is_valid_email(email) {
            return Err(HouseholdError::InvalidEmail {
                household_no,
                email: email.to_string(),
            });
        }

        Ok(())
    }

    fn distinct_non_blank_values(&self, field: MemberField) -> usize {
        self.members
            .iter()
            .map(|member| field.value(member))
            .filter(|value| !value.is_empty())
            .collect::<HashSet<_>>()
            .len()
    }

    /// First non-blank value of a text property, or "" when no member has one
    fn first_non_blank(&self, value: impl Fn(&Member) -> &str) -> &str {
        self.members
            .iter()
            .map(value)
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    /// Members in roster order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for a constructed household
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn has_several_members(&self) -> bool {
        self.members.len() >= 2
    }

    pub fn has_paid(&self) -> bool {
        self.members[0].has_paid
    }

    pub fn household_number(&self) -> u32 {
        self.members[0].household_no
    }

    pub fn membership_type(&self) -> &str {
        self.first_non_blank(|member| member.membership_type.as_str())
    }

    pub fn street(&self) -> &str {
        self.first_non_blank(|member| member.street.as_str())
    }

    pub fn address(&self) -> &str {
        self.first_non_blank(|member| member.address.as_str())
    }

    pub fn first_email(&self) -> &str {
        self.first_non_blank(|member| member.email.as_str())
    }

    pub fn first_mobile(&self) -> &str {
        self.first_non_blank(|member| member.mobile.as_str())
    }

    pub fn first_telephone(&self) -> &str {
        self.first_non_blank(|member| member.telephone.as_str())
    }

    pub fn has_email(&self) -> bool {
        !self.first_email().is_empty()
    }

    /// One first name per member, duplicates preserved
    pub fn all_first_names(&self) -> Vec<&str> {
        self.members
            .iter()
            .map(|member| member.first_name.as_str())
            .collect()
    }

    /// Every surname word across all members, deduplicated in first-seen order
    pub fn all_surnames(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.members
            .iter()
            .flat_map(|member| member.surname.split(' '))
            .filter(|surname| seen.insert(*surname))
            .collect()
    }

    /// Name used to address the household
    ///
    /// `"Surnames (First names)"` for several members, otherwise
    /// `"First name Surname"`.
    pub fn recipient_name(&self) -> String {
        let first_names = self.all_first_names().join(", ");
        let surnames = self.all_surnames().join(", ");
        if self.has_several_members() {
            format!("{} ({})", surnames, first_names)
        } else {
            format!("{} {}", first_names, surnames)
        }
    }
}

impl fmt::Display for Household {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.members.iter().map(Member::full_name).collect();
        write!(f, "{}: {}", self.members.len(), names.join(", "))
    }
}

/// Structural address check plus a dot in the domain part
fn is_valid_email(email: &str) -> bool {
    if !EMAIL_PATTERN.is_match(email) {
        return false;
    }
    email
        .split_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'))
}

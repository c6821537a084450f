//! Membership type vocabulary
//!
//! Roster files carry short, case-insensitive type codes. This module maps
//! them to the canonical labels stored on members.

use crate::constants::membership_labels;
use std::fmt;

/// Closed set of membership categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipType {
    Student,
    Youth,
    Honorary,
    Family,
    LegalEntity,
    Individual,
}

impl MembershipType {
    /// Resolve a raw type code, returning `None` for unknown codes
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "stu" => Some(Self::Student),
            "ung" => Some(Self::Youth),
            "hed" => Some(Self::Honorary),
            "f" | "fh" => Some(Self::Family),
            "jur.per." => Some(Self::LegalEntity),
            "" => Some(Self::Individual),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Student => membership_labels::STUDENT,
            Self::Youth => membership_labels::YOUTH,
            Self::Honorary => membership_labels::HONORARY,
            Self::Family => membership_labels::FAMILY,
            Self::LegalEntity => membership_labels::LEGAL_ENTITY,
            Self::Individual => membership_labels::INDIVIDUAL,
        }
    }
}

impl fmt::Display for MembershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of translating a type code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    /// Canonical label, the default label when the code was not recognised
    pub label: &'static str,

    /// Whether the code was part of the vocabulary
    pub recognized: bool,
}

/// Translate a type code into its canonical label
///
/// Unknown codes fall back to the individual-member label with
/// `recognized == false`; the caller is responsible for warning about it.
pub fn translate(code: &str) -> Translation {
    match MembershipType::from_code(code) {
        Some(membership_type) => Translation {
            label: membership_type.label(),
            recognized: true,
        },
        None => Translation {
            label: MembershipType::Individual.label(),
            recognized: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_of_all_codes() {
        let cases = [
            ("stu", "Student"),
            ("ung", "Ungdom"),
            ("hed", "Hedersmedlem"),
            ("f", "Familj"),
            ("fh", "Familj"),
            ("jur.per.", "Juridisk person"),
            ("", "Enskild medlem"),
        ];

        for (code, label) in cases {
            let translation = translate(code);
            assert_eq!(translation.label, label, "code {code:?}");
            assert!(translation.recognized, "code {code:?}");
        }
    }

    #[test]
    fn test_codes_are_case_insensitive() {
        assert_eq!(translate("HED").label, "Hedersmedlem");
        assert_eq!(translate("Fh").label, "Familj");
        assert_eq!(translate("JUR.PER.").label, "Juridisk person");
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let translation = translate("Illegal type");
        assert_eq!(translation.label, "Enskild medlem");
        assert!(!translation.recognized);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(MembershipType::LegalEntity.to_string(), "Juridisk person");
    }
}

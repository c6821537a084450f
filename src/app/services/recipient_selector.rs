//! Household filtering and recipient list selection
//!
//! Applies the payment, household-number and email-presence filters, then
//! splits the remaining households into email and letter recipients
//! according to the channel policy. The two lists may overlap.

use crate::app::models::{ChannelPolicy, Household, MemberFilter};
use tracing::{debug, info};

/// Filters applied to the grouped households
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientFilter {
    /// Keep only households that have not paid
    pub only_non_payers: bool,

    /// Keep only these household numbers; empty means no restriction
    pub household_numbers: Vec<u32>,

    pub member_filter: MemberFilter,
}

impl RecipientFilter {
    /// Whether a household passes every filter
    pub fn accepts(&self, household: &Household) -> bool {
        if self.only_non_payers && household.has_paid() {
            return false;
        }
        if !self.household_numbers.is_empty()
            && !self
                .household_numbers
                .contains(&household.household_number())
        {
            return false;
        }
        self.member_filter.accepts(household.has_email())
    }

    /// Keep the households that pass every filter, in their original order
    pub fn apply(&self, households: Vec<Household>) -> Vec<Household> {
        let before = households.len();
        let kept: Vec<Household> = households
            .into_iter()
            .filter(|household| self.accepts(household))
            .collect();

        debug!(
            "Filters kept {} of {} households (only non-payers: {}, allowlist: {:?}, {:?})",
            kept.len(),
            before,
            self.only_non_payers,
            self.household_numbers,
            self.member_filter
        );
        kept
    }
}

/// Households selected for each output channel
#[derive(Debug, Clone, Default)]
pub struct Recipients<'a> {
    pub email: Vec<&'a Household>,
    pub letter: Vec<&'a Household>,
}

impl<'a> Recipients<'a> {
    /// Split households into email and letter recipients
    ///
    /// Email: the household has an address and the policy is not letters only.
    /// Letter: the household has no address or the policy is not email-first.
    pub fn select(households: &'a [Household], policy: ChannelPolicy) -> Self {
        let email = households
            .iter()
            .filter(|household| household.has_email() && policy != ChannelPolicy::PdfOnly)
            .collect();
        let letter = households
            .iter()
            .filter(|household| !household.has_email() || policy != ChannelPolicy::EmailOverPdf)
            .collect();

        let recipients = Self { email, letter };
        info!(
            "Selected {} email recipients and {} letter recipients ({:?})",
            recipients.email.len(),
            recipients.letter.len(),
            policy
        );
        recipients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Member;

    fn household(household_no: u32, email: &str, has_paid: bool) -> Household {
        Household::new(vec![Member {
            household_no,
            first_name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            membership_type: "Enskild medlem".to_string(),
            street: String::new(),
            address: String::new(),
            telephone: String::new(),
            mobile: String::new(),
            email: email.to_string(),
            has_paid,
        }])
        .unwrap()
    }

    fn households() -> Vec<Household> {
        vec![
            household(1, "ada@lovelace.com", true),
            household(2, "", false),
            household(3, "bo@example.se", false),
            household(4, "", true),
        ]
    }

    fn numbers(households: &[&Household]) -> Vec<u32> {
        households.iter().map(|h| h.household_number()).collect()
    }

    fn kept(filter: RecipientFilter) -> Vec<u32> {
        filter
            .apply(households())
            .iter()
            .map(Household::household_number)
            .collect()
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        assert_eq!(kept(RecipientFilter::default()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_only_non_payers() {
        let filter = RecipientFilter {
            only_non_payers: true,
            ..RecipientFilter::default()
        };
        assert_eq!(kept(filter), vec![2, 3]);
    }

    #[test]
    fn test_household_allowlist_keeps_roster_order() {
        let filter = RecipientFilter {
            household_numbers: vec![4, 1, 71],
            ..RecipientFilter::default()
        };
        assert_eq!(kept(filter), vec![1, 4]);
    }

    #[test]
    fn test_member_filters() {
        let with_emails = RecipientFilter {
            member_filter: MemberFilter::WithEmails,
            ..RecipientFilter::default()
        };
        assert_eq!(kept(with_emails), vec![1, 3]);

        let without_emails = RecipientFilter {
            member_filter: MemberFilter::WithoutEmails,
            ..RecipientFilter::default()
        };
        assert_eq!(kept(without_emails), vec![2, 4]);
    }

    #[test]
    fn test_filters_combine() {
        let filter = RecipientFilter {
            only_non_payers: true,
            household_numbers: vec![1, 2, 3],
            member_filter: MemberFilter::WithEmails,
        };
        assert_eq!(kept(filter), vec![3]);
    }

    #[test]
    fn test_pdf_and_email_policy() {
        let households = households();
        let recipients = Recipients::select(&households, ChannelPolicy::PdfAndEmail);
        assert_eq!(numbers(&recipients.email), vec![1, 3]);
        assert_eq!(numbers(&recipients.letter), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_email_over_pdf_policy() {
        let households = households();
        let recipients = Recipients::select(&households, ChannelPolicy::EmailOverPdf);
        assert_eq!(numbers(&recipients.email), vec![1, 3]);
        assert_eq!(numbers(&recipients.letter), vec![2, 4]);
    }

    #[test]
    fn test_pdf_only_policy() {
        let households = households();
        let recipients = Recipients::select(&households, ChannelPolicy::PdfOnly);
        assert!(recipients.email.is_empty());
        assert_eq!(numbers(&recipients.letter), vec![1, 2, 3, 4]);
    }
}

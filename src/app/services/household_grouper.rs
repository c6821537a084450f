//! Grouping of parsed members into households
//!
//! Members are partitioned by household number. Households come out in
//! ascending household-number order and members keep their roster order
//! within each household. Unlike record parsing, grouping is not fault
//! tolerant: the first household that fails validation aborts the grouping.

use crate::app::models::{Household, Member};
use crate::error::HouseholdError;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Group members into validated households
///
/// An empty member list yields no households.
pub fn group_households(members: Vec<Member>) -> Result<Vec<Household>, HouseholdError> {
    if members.is_empty() {
        info!("No members to group into households");
        return Ok(Vec::new());
    }

    let member_count = members.len();
    let mut groups: BTreeMap<u32, Vec<Member>> = BTreeMap::new();
    for member in members {
        groups.entry(member.household_no).or_default().push(member);
    }

    let households = groups
        .into_values()
        .map(Household::new)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Grouped {} members into {} households",
        member_count,
        households.len()
    );
    Ok(households)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(household_no: u32, first_name: &str) -> Member {
        Member {
            household_no,
            first_name: first_name.to_string(),
            surname: "Lovelace".to_string(),
            membership_type: "Familj".to_string(),
            street: "Streetname 71".to_string(),
            address: "123 City".to_string(),
            telephone: String::new(),
            mobile: String::new(),
            email: String::new(),
            has_paid: true,
        }
    }

    fn first_names(household: &Household) -> Vec<&str> {
        household.all_first_names()
    }

    #[test]
    fn test_households_in_ascending_order() {
        let members = vec![
            member(9, "Ida"),
            member(2, "Bo"),
            member(7, "Gun"),
            member(2, "Berit"),
            member(0, "Noll"),
        ];

        let households = group_households(members).unwrap();
        let numbers: Vec<u32> = households.iter().map(Household::household_number).collect();
        assert_eq!(numbers, vec![0, 2, 7, 9]);
    }

    #[test]
    fn test_member_order_preserved_within_household() {
        let members = vec![
            member(3, "Cilla"),
            member(1, "Anna"),
            member(3, "Carl"),
            member(1, "Axel"),
            member(3, "Cecilia"),
        ];

        let households = group_households(members).unwrap();
        assert_eq!(first_names(&households[0]), vec!["Anna", "Axel"]);
        assert_eq!(
            first_names(&households[1]),
            vec!["Cilla", "Carl", "Cecilia"]
        );
    }

    #[test]
    fn test_empty_input_yields_no_households() {
        assert!(group_households(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_sparse_household_numbers() {
        let households = group_households(vec![member(5000, "Stor")]).unwrap();
        assert_eq!(households.len(), 1);
        assert_eq!(households[0].household_number(), 5000);
    }

    #[test]
    fn test_invalid_household_aborts_grouping() {
        let members = vec![
            member(1, "Anna"),
            member(2, "Bo"),
            Member {
                street: "Other road 2".to_string(),
                ..member(2, "Berit")
            },
            member(3, "Cilla"),
        ];

        assert_eq!(
            group_households(members),
            Err(HouseholdError::DifferentValues {
                household_no: 2,
                property: "street"
            })
        );
    }
}

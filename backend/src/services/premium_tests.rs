use super::*;
use crate::models::{DataCell, FamilyMakeup, PremiumColumn, PremiumSet};
use proptest::prelude::*;

fn individual(values: [Option<DataCell>; 4]) -> PremiumSet {
    let mut set = PremiumSet::default();
    for (column, value) in FamilyMakeup::Individual
        .listing_columns()
        .iter()
        .zip(values)
    {
        set.set(*column, value);
    }
    set
}

#[test]
fn test_mixed_cells_average_valid_ones() {
    let set = individual([
        Some(DataCell::Number(300.0)),
        None,
        Some(DataCell::from("abc")),
        Some(DataCell::Number(500.0)),
    ]);
    let columns = premium_columns_for(Some("adult_individual"));
    assert_eq!(average_premium(&set, columns), Some(400.0));
}

#[test]
fn test_numeric_text_counts() {
    let set = individual([
        Some(DataCell::from("250.5")),
        Some(DataCell::Number(249.5)),
        None,
        None,
    ]);
    assert_eq!(
        average_premium(&set, FamilyMakeup::Individual.listing_columns()),
        Some(250.0)
    );
}

#[test]
fn test_no_valid_values_is_none_not_zero() {
    let set = individual([None, Some(DataCell::from("N/A")), None, None]);
    assert_eq!(
        average_premium(&set, FamilyMakeup::Individual.listing_columns()),
        None
    );
}

#[test]
fn test_empty_column_list_is_none() {
    let set = individual([Some(DataCell::Number(1.0)), None, None, None]);
    assert_eq!(average_premium(&set, &[]), None);
}

#[test]
fn test_resolver_listing_keys() {
    assert_eq!(
        premium_columns_for(Some("couple")),
        &[
            PremiumColumn::CoupleAge21,
            PremiumColumn::CoupleAge30,
            PremiumColumn::CoupleAge40,
            PremiumColumn::CoupleAge50,
        ]
    );
    assert_eq!(
        premium_columns_for(Some("individual_three_children"))[0].column_name(),
        "individual_plus_3_or_more_children_age_21"
    );
}

#[test]
fn test_resolver_unknown_or_absent_is_empty() {
    assert!(premium_columns_for(None).is_empty());
    assert!(premium_columns_for(Some("")).is_empty());
    assert!(premium_columns_for(Some("extended_family")).is_empty());
}

#[test]
fn test_resolver_accepts_detail_vocabulary() {
    assert_eq!(
        premium_columns_for(Some("couple_plus_1_child")),
        premium_columns_for(Some("couple_one_child"))
    );
}

proptest! {
    #[test]
    fn prop_average_lies_between_min_and_max(
        values in proptest::collection::vec(proptest::option::of(0.0f64..5000.0), 4)
    ) {
        let set = individual([
            values[0].map(DataCell::Number),
            values[1].map(DataCell::Number),
            values[2].map(DataCell::Number),
            values[3].map(DataCell::Number),
        ]);
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        let average = average_premium(&set, FamilyMakeup::Individual.listing_columns());

        if present.is_empty() {
            prop_assert_eq!(average, None);
        } else {
            let average = average.unwrap();
            let min = present.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = present.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(average >= min - 1e-9 && average <= max + 1e-9);
        }
    }

    #[test]
    fn prop_garbage_text_never_changes_the_average(
        base in 1.0f64..2000.0,
        garbage in "[a-zA-Z$ ]{0,8}"
    ) {
        prop_assume!(garbage.trim().parse::<f64>().is_err());
        let clean = individual([Some(DataCell::Number(base)), None, None, None]);
        let noisy = individual([
            Some(DataCell::Number(base)),
            Some(DataCell::Text(garbage)),
            None,
            None,
        ]);
        let columns = FamilyMakeup::Individual.listing_columns();
        prop_assert_eq!(average_premium(&clean, columns), average_premium(&noisy, columns));
    }
}

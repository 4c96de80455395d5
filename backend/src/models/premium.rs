//! The age-banded premium battery of a marketplace plan.

define_premium_columns! {
    IndividualAge21 => premium_adult_individual_age_21, Individual, 21;
    IndividualAge27 => premium_adult_individual_age_27, Individual, 27;
    IndividualAge30 => premium_adult_individual_age_30, Individual, 30;
    IndividualAge40 => premium_adult_individual_age_40, Individual, 40;
    IndividualAge50 => premium_adult_individual_age_50, Individual, 50;
    IndividualAge60 => premium_adult_individual_age_60, Individual, 60;
    CoupleAge21 => premium_couple_21, Couple, 21;
    CoupleAge30 => premium_couple_30, Couple, 30;
    CoupleAge40 => premium_couple_40, Couple, 40;
    CoupleAge50 => premium_couple_50, Couple, 50;
    CoupleAge60 => premium_couple_60, Couple, 60;
    CouplePlusOneChildAge21 => couple_plus_1_child_age_21, CouplePlusOneChild, 21;
    CouplePlusOneChildAge30 => couple_plus_1_child_age_30, CouplePlusOneChild, 30;
    CouplePlusOneChildAge40 => couple_plus_1_child_age_40, CouplePlusOneChild, 40;
    CouplePlusOneChildAge50 => couple_plus_1_child_age_50, CouplePlusOneChild, 50;
    CouplePlusTwoChildrenAge21 => couple_plus_2_children_age_21, CouplePlusTwoChildren, 21;
    CouplePlusTwoChildrenAge30 => couple_plus_2_children_age_30, CouplePlusTwoChildren, 30;
    CouplePlusTwoChildrenAge40 => couple_plus_2_children_age_40, CouplePlusTwoChildren, 40;
    CouplePlusTwoChildrenAge50 => couple_plus_2_children_age_50, CouplePlusTwoChildren, 50;
    CouplePlusThreeOrMoreChildrenAge21 =>
        couple_plus_3_or_more_children_age_21, CouplePlusThreeOrMoreChildren, 21;
    CouplePlusThreeOrMoreChildrenAge30 =>
        couple_plus_3_or_more_children_age_30, CouplePlusThreeOrMoreChildren, 30;
    CouplePlusThreeOrMoreChildrenAge40 =>
        couple_plus_3_or_more_children_age_40, CouplePlusThreeOrMoreChildren, 40;
    CouplePlusThreeOrMoreChildrenAge50 =>
        couple_plus_3_or_more_children_age_50, CouplePlusThreeOrMoreChildren, 50;
    SingleParentPlusOneChildAge21 => individual_plus_1_child_age_21, SingleParentPlusOneChild, 21;
    SingleParentPlusOneChildAge30 => individual_plus_1_child_age_30, SingleParentPlusOneChild, 30;
    SingleParentPlusOneChildAge40 => individual_plus_1_child_age_40, SingleParentPlusOneChild, 40;
    SingleParentPlusOneChildAge50 => individual_plus_1_child_age_50, SingleParentPlusOneChild, 50;
    SingleParentPlusTwoChildrenAge21 =>
        individual_plus_2_children_age_21, SingleParentPlusTwoChildren, 21;
    SingleParentPlusTwoChildrenAge30 =>
        individual_plus_2_children_age_30, SingleParentPlusTwoChildren, 30;
    SingleParentPlusTwoChildrenAge40 =>
        individual_plus_2_children_age_40, SingleParentPlusTwoChildren, 40;
    SingleParentPlusTwoChildrenAge50 =>
        individual_plus_2_children_age_50, SingleParentPlusTwoChildren, 50;
    SingleParentPlusThreeOrMoreChildrenAge21 =>
        individual_plus_3_or_more_children_age_21, SingleParentPlusThreeOrMoreChildren, 21;
    SingleParentPlusThreeOrMoreChildrenAge30 =>
        individual_plus_3_or_more_children_age_30, SingleParentPlusThreeOrMoreChildren, 30;
    SingleParentPlusThreeOrMoreChildrenAge40 =>
        individual_plus_3_or_more_children_age_40, SingleParentPlusThreeOrMoreChildren, 40;
    SingleParentPlusThreeOrMoreChildrenAge50 =>
        individual_plus_3_or_more_children_age_50, SingleParentPlusThreeOrMoreChildren, 50;
}

/// Ages averaged by the listing view, for every family makeup.
pub const LISTING_AGES: [u8; 4] = [21, 30, 40, 50];

impl PremiumSet {
    /// Build a set from `(column, value)` pairs, leaving the rest empty.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (PremiumColumn, crate::models::DataCell)>,
    {
        let mut set = PremiumSet::default();
        for (column, value) in pairs {
            set.set(column, Some(value));
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DataCell, FamilyMakeup};

    #[test]
    fn test_column_names_are_unique() {
        let mut names: Vec<&str> = PremiumColumn::ALL.iter().map(|c| c.column_name()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(total, 35);
    }

    #[test]
    fn test_column_metadata() {
        let column = PremiumColumn::CouplePlusTwoChildrenAge30;
        assert_eq!(column.column_name(), "couple_plus_2_children_age_30");
        assert_eq!(column.age(), 30);
        assert_eq!(column.family(), FamilyMakeup::CouplePlusTwoChildren);
    }

    #[test]
    fn test_get_and_set_round_through_the_same_field() {
        let mut set = PremiumSet::default();
        set.set(PremiumColumn::CoupleAge60, Some(DataCell::Number(910.0)));
        assert_eq!(set.premium_couple_60, Some(DataCell::Number(910.0)));
        assert_eq!(set.get(PremiumColumn::CoupleAge60), Some(&DataCell::Number(910.0)));
        assert_eq!(set.get(PremiumColumn::CoupleAge50), None);
    }

    #[test]
    fn test_serialized_keys_match_column_names() {
        let set = PremiumSet::from_pairs([(
            PremiumColumn::SingleParentPlusThreeOrMoreChildrenAge50,
            DataCell::Number(1.0),
        )]);
        let value = serde_json::to_value(&set).unwrap();
        let object = value.as_object().unwrap();
        for column in PremiumColumn::ALL {
            assert!(object.contains_key(column.column_name()), "missing {}", column);
        }
        assert_eq!(object["individual_plus_3_or_more_children_age_50"], serde_json::json!(1.0));
    }
}

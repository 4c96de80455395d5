//! Household compositions a premium can be quoted for.

use serde::{Deserialize, Serialize};

use super::premium::PremiumColumn;

/// A household composition.
///
/// Two key vocabularies are in circulation: the listing form sends
/// `adult_individual`, `couple_one_child`, ... while plan-detail links carry
/// `individual`, `couple_plus_1_child`, .... [`FamilyMakeup::from_key`]
/// accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyMakeup {
    #[serde(rename = "adult_individual", alias = "individual")]
    Individual,
    Couple,
    #[serde(rename = "couple_one_child", alias = "couple_plus_1_child")]
    CouplePlusOneChild,
    #[serde(rename = "couple_two_children", alias = "couple_plus_2_children")]
    CouplePlusTwoChildren,
    #[serde(
        rename = "couple_three_children",
        alias = "couple_plus_3_or_more_children"
    )]
    CouplePlusThreeOrMoreChildren,
    #[serde(rename = "individual_one_children", alias = "individual_plus_1_child")]
    SingleParentPlusOneChild,
    #[serde(
        rename = "individual_two_children",
        alias = "individual_plus_2_children"
    )]
    SingleParentPlusTwoChildren,
    #[serde(
        rename = "individual_three_children",
        alias = "individual_plus_3_or_more_children"
    )]
    SingleParentPlusThreeOrMoreChildren,
}

// ==================== Column tables ====================

const INDIVIDUAL_DETAIL: &[PremiumColumn] = &[
    PremiumColumn::IndividualAge21,
    PremiumColumn::IndividualAge27,
    PremiumColumn::IndividualAge30,
    PremiumColumn::IndividualAge40,
    PremiumColumn::IndividualAge50,
    PremiumColumn::IndividualAge60,
];
const INDIVIDUAL_LISTING: &[PremiumColumn] = &[
    PremiumColumn::IndividualAge21,
    PremiumColumn::IndividualAge30,
    PremiumColumn::IndividualAge40,
    PremiumColumn::IndividualAge50,
];

const COUPLE_DETAIL: &[PremiumColumn] = &[
    PremiumColumn::CoupleAge21,
    PremiumColumn::CoupleAge30,
    PremiumColumn::CoupleAge40,
    PremiumColumn::CoupleAge50,
    PremiumColumn::CoupleAge60,
];
const COUPLE_LISTING: &[PremiumColumn] = &[
    PremiumColumn::CoupleAge21,
    PremiumColumn::CoupleAge30,
    PremiumColumn::CoupleAge40,
    PremiumColumn::CoupleAge50,
];

const COUPLE_ONE_CHILD: &[PremiumColumn] = &[
    PremiumColumn::CouplePlusOneChildAge21,
    PremiumColumn::CouplePlusOneChildAge30,
    PremiumColumn::CouplePlusOneChildAge40,
    PremiumColumn::CouplePlusOneChildAge50,
];
const COUPLE_TWO_CHILDREN: &[PremiumColumn] = &[
    PremiumColumn::CouplePlusTwoChildrenAge21,
    PremiumColumn::CouplePlusTwoChildrenAge30,
    PremiumColumn::CouplePlusTwoChildrenAge40,
    PremiumColumn::CouplePlusTwoChildrenAge50,
];
const COUPLE_THREE_CHILDREN: &[PremiumColumn] = &[
    PremiumColumn::CouplePlusThreeOrMoreChildrenAge21,
    PremiumColumn::CouplePlusThreeOrMoreChildrenAge30,
    PremiumColumn::CouplePlusThreeOrMoreChildrenAge40,
    PremiumColumn::CouplePlusThreeOrMoreChildrenAge50,
];
const SINGLE_ONE_CHILD: &[PremiumColumn] = &[
    PremiumColumn::SingleParentPlusOneChildAge21,
    PremiumColumn::SingleParentPlusOneChildAge30,
    PremiumColumn::SingleParentPlusOneChildAge40,
    PremiumColumn::SingleParentPlusOneChildAge50,
];
const SINGLE_TWO_CHILDREN: &[PremiumColumn] = &[
    PremiumColumn::SingleParentPlusTwoChildrenAge21,
    PremiumColumn::SingleParentPlusTwoChildrenAge30,
    PremiumColumn::SingleParentPlusTwoChildrenAge40,
    PremiumColumn::SingleParentPlusTwoChildrenAge50,
];
const SINGLE_THREE_CHILDREN: &[PremiumColumn] = &[
    PremiumColumn::SingleParentPlusThreeOrMoreChildrenAge21,
    PremiumColumn::SingleParentPlusThreeOrMoreChildrenAge30,
    PremiumColumn::SingleParentPlusThreeOrMoreChildrenAge40,
    PremiumColumn::SingleParentPlusThreeOrMoreChildrenAge50,
];

impl FamilyMakeup {
    /// Every family makeup, in form order.
    pub const ALL: [FamilyMakeup; 8] = [
        FamilyMakeup::Individual,
        FamilyMakeup::Couple,
        FamilyMakeup::CouplePlusOneChild,
        FamilyMakeup::CouplePlusTwoChildren,
        FamilyMakeup::CouplePlusThreeOrMoreChildren,
        FamilyMakeup::SingleParentPlusOneChild,
        FamilyMakeup::SingleParentPlusTwoChildren,
        FamilyMakeup::SingleParentPlusThreeOrMoreChildren,
    ];

    /// Resolve a key from either vocabulary. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|family| family.listing_key() == key || family.detail_key() == key)
    }

    /// Key sent by the listing form.
    pub fn listing_key(self) -> &'static str {
        match self {
            FamilyMakeup::Individual => "adult_individual",
            FamilyMakeup::Couple => "couple",
            FamilyMakeup::CouplePlusOneChild => "couple_one_child",
            FamilyMakeup::CouplePlusTwoChildren => "couple_two_children",
            FamilyMakeup::CouplePlusThreeOrMoreChildren => "couple_three_children",
            FamilyMakeup::SingleParentPlusOneChild => "individual_one_children",
            FamilyMakeup::SingleParentPlusTwoChildren => "individual_two_children",
            FamilyMakeup::SingleParentPlusThreeOrMoreChildren => "individual_three_children",
        }
    }

    /// Key carried by plan-detail links.
    pub fn detail_key(self) -> &'static str {
        match self {
            FamilyMakeup::Individual => "individual",
            FamilyMakeup::Couple => "couple",
            FamilyMakeup::CouplePlusOneChild => "couple_plus_1_child",
            FamilyMakeup::CouplePlusTwoChildren => "couple_plus_2_children",
            FamilyMakeup::CouplePlusThreeOrMoreChildren => "couple_plus_3_or_more_children",
            FamilyMakeup::SingleParentPlusOneChild => "individual_plus_1_child",
            FamilyMakeup::SingleParentPlusTwoChildren => "individual_plus_2_children",
            FamilyMakeup::SingleParentPlusThreeOrMoreChildren => {
                "individual_plus_3_or_more_children"
            }
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            FamilyMakeup::Individual => "Individual Coverage",
            FamilyMakeup::Couple => "Couple Coverage",
            FamilyMakeup::CouplePlusOneChild => "Couple + 1 Child",
            FamilyMakeup::CouplePlusTwoChildren => "Couple + 2 Children",
            FamilyMakeup::CouplePlusThreeOrMoreChildren => "Couple + 3+ Children",
            FamilyMakeup::SingleParentPlusOneChild => "Single Parent + 1 Child",
            FamilyMakeup::SingleParentPlusTwoChildren => "Single Parent + 2 Children",
            FamilyMakeup::SingleParentPlusThreeOrMoreChildren => "Single Parent + 3+ Children",
        }
    }

    /// Columns averaged into the listing premium (ages 21, 30, 40, 50).
    pub fn listing_columns(self) -> &'static [PremiumColumn] {
        match self {
            FamilyMakeup::Individual => INDIVIDUAL_LISTING,
            FamilyMakeup::Couple => COUPLE_LISTING,
            other => other.detail_columns(),
        }
    }

    /// Every column the detail breakdown shows, in age order.
    pub fn detail_columns(self) -> &'static [PremiumColumn] {
        match self {
            FamilyMakeup::Individual => INDIVIDUAL_DETAIL,
            FamilyMakeup::Couple => COUPLE_DETAIL,
            FamilyMakeup::CouplePlusOneChild => COUPLE_ONE_CHILD,
            FamilyMakeup::CouplePlusTwoChildren => COUPLE_TWO_CHILDREN,
            FamilyMakeup::CouplePlusThreeOrMoreChildren => COUPLE_THREE_CHILDREN,
            FamilyMakeup::SingleParentPlusOneChild => SINGLE_ONE_CHILD,
            FamilyMakeup::SingleParentPlusTwoChildren => SINGLE_TWO_CHILDREN,
            FamilyMakeup::SingleParentPlusThreeOrMoreChildren => SINGLE_THREE_CHILDREN,
        }
    }
}

impl std::fmt::Display for FamilyMakeup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

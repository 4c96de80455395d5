//! Full marketplace plan record.

use serde::{Deserialize, Serialize};

use super::cell::DataCell;
use super::premium::PremiumSet;

define_text_id!(PlanId);

/// One marketplace product offering in one county.
///
/// Plans are read-only reference data. Nearly every column is nullable in
/// the source filings, so nearly every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    #[serde(default)]
    pub id: PlanId,

    // ==================== Geography ====================
    #[serde(default)]
    pub state_code: Option<String>,
    #[serde(default)]
    pub fips_county_code: Option<i64>,
    #[serde(default)]
    pub county_name: Option<String>,
    #[serde(default)]
    pub rating_area: Option<String>,

    // ==================== Product ====================
    #[serde(default)]
    pub metal_level: Option<String>,
    #[serde(default)]
    pub issuer_name: Option<String>,
    #[serde(default)]
    pub hios_issuer_id: Option<i64>,
    #[serde(default)]
    pub plan_id_standard_component: Option<String>,
    #[serde(default)]
    pub plan_marketing_name: Option<String>,
    #[serde(default)]
    pub standardized_plan_option: Option<String>,
    #[serde(default)]
    pub plan_type: Option<String>,
    #[serde(default)]
    pub child_only_offering: Option<String>,
    #[serde(default)]
    pub source: Option<String>,

    // ==================== Contact & documents ====================
    #[serde(default)]
    pub customer_service_phone_number_local: Option<String>,
    #[serde(default)]
    pub customer_service_phone_number_toll_free: Option<String>,
    #[serde(default)]
    pub customer_service_phone_number_tty: Option<String>,
    #[serde(default)]
    pub network_url: Option<String>,
    #[serde(default)]
    pub plan_brochure_url: Option<String>,
    #[serde(default)]
    pub summary_of_benefits_url: Option<String>,
    #[serde(default)]
    pub drug_formulary_url: Option<String>,

    // ==================== Benefits ====================
    #[serde(default)]
    pub adult_dental: Option<String>,
    #[serde(default)]
    pub child_dental: Option<String>,
    #[serde(default)]
    pub ehb_percent_of_total_premium: Option<String>,

    // ==================== Premiums ====================
    #[serde(default)]
    pub premium_child_age_0_14: Option<DataCell>,
    #[serde(default)]
    pub premium_child_age_18: Option<DataCell>,
    #[serde(flatten)]
    pub premiums: PremiumSet,

    #[serde(flatten)]
    pub cost_sharing: CostSharing,
}

impl PlanRecord {
    pub fn new(id: impl Into<PlanId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Whether every column a listing row needs is present and non-empty.
    pub fn is_listable(&self) -> bool {
        fn filled(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|s| !s.trim().is_empty())
        }

        !self.id.is_blank()
            && filled(&self.metal_level)
            && filled(&self.issuer_name)
            && filled(&self.plan_id_standard_component)
            && filled(&self.plan_marketing_name)
            && filled(&self.plan_type)
    }
}

/// Standard cost-sharing figures of a plan (no cost-sharing-reduction
/// variants).
///
/// Deductibles and out-of-pocket maxima are usually dollar amounts but may
/// carry text such as "Not Applicable". Copay fields are always descriptive
/// text ("$30 Copay after deductible").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSharing {
    pub medical_deductible_individual_standard: Option<DataCell>,
    pub medical_deductible_family_standard: Option<DataCell>,
    pub medical_deductible_family_per_person_standard: Option<DataCell>,
    pub medical_maximum_out_of_pocket_individual_standard: Option<DataCell>,
    pub medical_maximum_out_of_pocket_family_standard: Option<DataCell>,
    pub medical_maximum_out_of_pocket_family_per_person_standard: Option<DataCell>,
    pub drug_deductible_individual_standard: Option<DataCell>,
    pub drug_deductible_family_standard: Option<DataCell>,
    pub drug_deductible_family_per_person_standard: Option<DataCell>,
    pub drug_maximum_out_of_pocket_individual_standard: Option<DataCell>,
    pub drug_maximum_out_of_pocket_family_standard: Option<DataCell>,
    pub drug_maximum_out_of_pocket_family_per_person_standard: Option<DataCell>,

    pub primary_care_physician_standard: Option<String>,
    pub specialist_standard: Option<String>,
    pub emergency_room_standard: Option<String>,
    pub inpatient_facility_standard: Option<String>,
    pub inpatient_physician_standard: Option<String>,
    pub generic_drugs_standard: Option<String>,
    pub preferred_brand_drugs_standard: Option<String>,
    pub non_preferred_brand_drugs_standard: Option<String>,
    pub specialty_drugs_standard: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PremiumColumn;

    fn listable() -> PlanRecord {
        PlanRecord {
            metal_level: Some("Silver".into()),
            issuer_name: Some("Ambetter".into()),
            plan_id_standard_component: Some("29418TX0140001".into()),
            plan_marketing_name: Some("Clear Silver".into()),
            plan_type: Some("EPO".into()),
            ..PlanRecord::new("p-1")
        }
    }

    #[test]
    fn test_listable_requires_every_base_column() {
        assert!(listable().is_listable());

        let mut no_type = listable();
        no_type.plan_type = None;
        assert!(!no_type.is_listable());

        let mut blank_issuer = listable();
        blank_issuer.issuer_name = Some("  ".into());
        assert!(!blank_issuer.is_listable());

        let mut blank_id = listable();
        blank_id.id = PlanId::default();
        assert!(!blank_id.is_listable());
    }

    #[test]
    fn test_flattened_row_deserializes() {
        let json = serde_json::json!({
            "id": "p-9",
            "issuer_name": "Oscar",
            "premium_adult_individual_age_30": 412.5,
            "premium_couple_30": "825.00",
            "medical_deductible_individual_standard": 7500,
            "primary_care_physician_standard": "$40 Copay",
            "hios_issuer_id": 40220
        });
        let plan: PlanRecord = serde_json::from_value(json).unwrap();
        assert_eq!(plan.id.as_str(), "p-9");
        assert_eq!(plan.hios_issuer_id, Some(40220));
        assert_eq!(
            plan.premiums.get(PremiumColumn::IndividualAge30).and_then(DataCell::as_amount),
            Some(412.5)
        );
        assert_eq!(
            plan.premiums.get(PremiumColumn::CoupleAge30).and_then(DataCell::as_amount),
            Some(825.0)
        );
        assert_eq!(
            plan.cost_sharing.primary_care_physician_standard.as_deref(),
            Some("$40 Copay")
        );
    }
}

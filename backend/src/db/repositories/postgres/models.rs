use diesel::prelude::*;

use super::schema::marketplace_plans;
use crate::models::{CostSharing, DataCell, PlanId, PlanRecord, PremiumSet};

/// Full `marketplace_plans` row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = marketplace_plans)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MarketplacePlanRow {
    pub id: String,
    pub state_code: Option<String>,
    pub fips_county_code: Option<i64>,
    pub county_name: Option<String>,
    pub rating_area: Option<String>,
    pub metal_level: Option<String>,
    pub issuer_name: Option<String>,
    pub hios_issuer_id: Option<i64>,
    pub plan_id_standard_component: Option<String>,
    pub plan_marketing_name: Option<String>,
    pub standardized_plan_option: Option<String>,
    pub plan_type: Option<String>,
    pub child_only_offering: Option<String>,
    pub source: Option<String>,
    pub customer_service_phone_number_local: Option<String>,
    pub customer_service_phone_number_toll_free: Option<String>,
    pub customer_service_phone_number_tty: Option<String>,
    pub network_url: Option<String>,
    pub plan_brochure_url: Option<String>,
    pub summary_of_benefits_url: Option<String>,
    pub drug_formulary_url: Option<String>,
    pub adult_dental: Option<String>,
    pub child_dental: Option<String>,
    pub ehb_percent_of_total_premium: Option<String>,
    pub premium_child_age_0_14: Option<f64>,
    pub premium_child_age_18: Option<f64>,
    pub premium_adult_individual_age_21: Option<f64>,
    pub premium_adult_individual_age_27: Option<f64>,
    pub premium_adult_individual_age_30: Option<f64>,
    pub premium_adult_individual_age_40: Option<f64>,
    pub premium_adult_individual_age_50: Option<f64>,
    pub premium_adult_individual_age_60: Option<f64>,
    pub premium_couple_21: Option<f64>,
    pub premium_couple_30: Option<f64>,
    pub premium_couple_40: Option<f64>,
    pub premium_couple_50: Option<f64>,
    pub premium_couple_60: Option<f64>,
    pub couple_plus_1_child_age_21: Option<f64>,
    pub couple_plus_1_child_age_30: Option<f64>,
    pub couple_plus_1_child_age_40: Option<f64>,
    pub couple_plus_1_child_age_50: Option<f64>,
    pub couple_plus_2_children_age_21: Option<f64>,
    pub couple_plus_2_children_age_30: Option<f64>,
    pub couple_plus_2_children_age_40: Option<f64>,
    pub couple_plus_2_children_age_50: Option<f64>,
    pub couple_plus_3_or_more_children_age_21: Option<f64>,
    pub couple_plus_3_or_more_children_age_30: Option<f64>,
    pub couple_plus_3_or_more_children_age_40: Option<f64>,
    pub couple_plus_3_or_more_children_age_50: Option<f64>,
    pub individual_plus_1_child_age_21: Option<f64>,
    pub individual_plus_1_child_age_30: Option<f64>,
    pub individual_plus_1_child_age_40: Option<f64>,
    pub individual_plus_1_child_age_50: Option<f64>,
    pub individual_plus_2_children_age_21: Option<f64>,
    pub individual_plus_2_children_age_30: Option<f64>,
    pub individual_plus_2_children_age_40: Option<f64>,
    pub individual_plus_2_children_age_50: Option<f64>,
    pub individual_plus_3_or_more_children_age_21: Option<f64>,
    pub individual_plus_3_or_more_children_age_30: Option<f64>,
    pub individual_plus_3_or_more_children_age_40: Option<f64>,
    pub individual_plus_3_or_more_children_age_50: Option<f64>,
    pub medical_deductible_individual_standard: Option<f64>,
    pub medical_deductible_family_standard: Option<f64>,
    pub medical_deductible_family_per_person_standard: Option<String>,
    pub medical_maximum_out_of_pocket_individual_standard: Option<f64>,
    pub medical_maximum_out_of_pocket_family_standard: Option<f64>,
    pub medical_maximum_out_of_pocket_family_per_person_standard: Option<f64>,
    pub drug_deductible_individual_standard: Option<String>,
    pub drug_deductible_family_standard: Option<String>,
    pub drug_deductible_family_per_person_standard: Option<String>,
    pub drug_maximum_out_of_pocket_individual_standard: Option<String>,
    pub drug_maximum_out_of_pocket_family_standard: Option<String>,
    pub drug_maximum_out_of_pocket_family_per_person_standard: Option<String>,
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

/// One county lookup entry, read through `sql_query`.
#[derive(Debug, Clone, QueryableByName)]
pub struct CountyNameRow {
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
    pub county_name: Option<String>,
}

fn number(value: Option<f64>) -> Option<DataCell> {
    value.map(DataCell::Number)
}

fn text(value: Option<String>) -> Option<DataCell> {
    value.map(DataCell::Text)
}

impl From<MarketplacePlanRow> for PlanRecord {
    fn from(row: MarketplacePlanRow) -> Self {
        let premiums = PremiumSet {
            premium_adult_individual_age_21: number(row.premium_adult_individual_age_21),
            premium_adult_individual_age_27: number(row.premium_adult_individual_age_27),
            premium_adult_individual_age_30: number(row.premium_adult_individual_age_30),
            premium_adult_individual_age_40: number(row.premium_adult_individual_age_40),
            premium_adult_individual_age_50: number(row.premium_adult_individual_age_50),
            premium_adult_individual_age_60: number(row.premium_adult_individual_age_60),
            premium_couple_21: number(row.premium_couple_21),
            premium_couple_30: number(row.premium_couple_30),
            premium_couple_40: number(row.premium_couple_40),
            premium_couple_50: number(row.premium_couple_50),
            premium_couple_60: number(row.premium_couple_60),
            couple_plus_1_child_age_21: number(row.couple_plus_1_child_age_21),
            couple_plus_1_child_age_30: number(row.couple_plus_1_child_age_30),
            couple_plus_1_child_age_40: number(row.couple_plus_1_child_age_40),
            couple_plus_1_child_age_50: number(row.couple_plus_1_child_age_50),
            couple_plus_2_children_age_21: number(row.couple_plus_2_children_age_21),
            couple_plus_2_children_age_30: number(row.couple_plus_2_children_age_30),
            couple_plus_2_children_age_40: number(row.couple_plus_2_children_age_40),
            couple_plus_2_children_age_50: number(row.couple_plus_2_children_age_50),
            couple_plus_3_or_more_children_age_21:
                number(row.couple_plus_3_or_more_children_age_21),
            couple_plus_3_or_more_children_age_30:
                number(row.couple_plus_3_or_more_children_age_30),
            couple_plus_3_or_more_children_age_40:
                number(row.couple_plus_3_or_more_children_age_40),
            couple_plus_3_or_more_children_age_50:
                number(row.couple_plus_3_or_more_children_age_50),
            individual_plus_1_child_age_21: number(row.individual_plus_1_child_age_21),
            individual_plus_1_child_age_30: number(row.individual_plus_1_child_age_30),
            individual_plus_1_child_age_40: number(row.individual_plus_1_child_age_40),
            individual_plus_1_child_age_50: number(row.individual_plus_1_child_age_50),
            individual_plus_2_children_age_21: number(row.individual_plus_2_children_age_21),
            individual_plus_2_children_age_30: number(row.individual_plus_2_children_age_30),
            individual_plus_2_children_age_40: number(row.individual_plus_2_children_age_40),
            individual_plus_2_children_age_50: number(row.individual_plus_2_children_age_50),
            individual_plus_3_or_more_children_age_21:
                number(row.individual_plus_3_or_more_children_age_21),
            individual_plus_3_or_more_children_age_30:
                number(row.individual_plus_3_or_more_children_age_30),
            individual_plus_3_or_more_children_age_40:
                number(row.individual_plus_3_or_more_children_age_40),
            individual_plus_3_or_more_children_age_50:
                number(row.individual_plus_3_or_more_children_age_50),
        };

        let cost_sharing = CostSharing {
            medical_deductible_individual_standard:
                number(row.medical_deductible_individual_standard),
            medical_deductible_family_standard: number(row.medical_deductible_family_standard),
            medical_deductible_family_per_person_standard:
                text(row.medical_deductible_family_per_person_standard),
            medical_maximum_out_of_pocket_individual_standard:
                number(row.medical_maximum_out_of_pocket_individual_standard),
            medical_maximum_out_of_pocket_family_standard:
                number(row.medical_maximum_out_of_pocket_family_standard),
            medical_maximum_out_of_pocket_family_per_person_standard:
                number(row.medical_maximum_out_of_pocket_family_per_person_standard),
            drug_deductible_individual_standard: text(row.drug_deductible_individual_standard),
            drug_deductible_family_standard: text(row.drug_deductible_family_standard),
            drug_deductible_family_per_person_standard:
                text(row.drug_deductible_family_per_person_standard),
            drug_maximum_out_of_pocket_individual_standard:
                text(row.drug_maximum_out_of_pocket_individual_standard),
            drug_maximum_out_of_pocket_family_standard:
                text(row.drug_maximum_out_of_pocket_family_standard),
            drug_maximum_out_of_pocket_family_per_person_standard:
                text(row.drug_maximum_out_of_pocket_family_per_person_standard),
            primary_care_physician_standard: row.primary_care_physician_standard,
            specialist_standard: row.specialist_standard,
            emergency_room_standard: row.emergency_room_standard,
            inpatient_facility_standard: row.inpatient_facility_standard,
            inpatient_physician_standard: row.inpatient_physician_standard,
            generic_drugs_standard: row.generic_drugs_standard,
            preferred_brand_drugs_standard: row.preferred_brand_drugs_standard,
            non_preferred_brand_drugs_standard: row.non_preferred_brand_drugs_standard,
            specialty_drugs_standard: row.specialty_drugs_standard,
        };

        PlanRecord {
            id: PlanId::from(row.id),
            state_code: row.state_code,
            fips_county_code: row.fips_county_code,
            county_name: row.county_name,
            rating_area: row.rating_area,
            metal_level: row.metal_level,
            issuer_name: row.issuer_name,
            hios_issuer_id: row.hios_issuer_id,
            plan_id_standard_component: row.plan_id_standard_component,
            plan_marketing_name: row.plan_marketing_name,
            standardized_plan_option: row.standardized_plan_option,
            plan_type: row.plan_type,
            child_only_offering: row.child_only_offering,
            source: row.source,
            customer_service_phone_number_local: row.customer_service_phone_number_local,
            customer_service_phone_number_toll_free: row.customer_service_phone_number_toll_free,
            customer_service_phone_number_tty: row.customer_service_phone_number_tty,
            network_url: row.network_url,
            plan_brochure_url: row.plan_brochure_url,
            summary_of_benefits_url: row.summary_of_benefits_url,
            drug_formulary_url: row.drug_formulary_url,
            adult_dental: row.adult_dental,
            child_dental: row.child_dental,
            ehb_percent_of_total_premium: row.ehb_percent_of_total_premium,
            premium_child_age_0_14: number(row.premium_child_age_0_14),
            premium_child_age_18: number(row.premium_child_age_18),
            premiums,
            cost_sharing,
        }
    }
}

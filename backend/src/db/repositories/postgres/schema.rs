// Mirrors the externally managed marketplace dataset. Read-only.

diesel::table! {
    marketplace_plans (id) {
        id -> Text,
        state_code -> Nullable<Text>,
        fips_county_code -> Nullable<Int8>,
        county_name -> Nullable<Text>,
        rating_area -> Nullable<Text>,
        metal_level -> Nullable<Text>,
        issuer_name -> Nullable<Text>,
        hios_issuer_id -> Nullable<Int8>,
        plan_id_standard_component -> Nullable<Text>,
        plan_marketing_name -> Nullable<Text>,
        standardized_plan_option -> Nullable<Text>,
        plan_type -> Nullable<Text>,
        child_only_offering -> Nullable<Text>,
        source -> Nullable<Text>,
        customer_service_phone_number_local -> Nullable<Text>,
        customer_service_phone_number_toll_free -> Nullable<Text>,
        customer_service_phone_number_tty -> Nullable<Text>,
        network_url -> Nullable<Text>,
        plan_brochure_url -> Nullable<Text>,
        summary_of_benefits_url -> Nullable<Text>,
        drug_formulary_url -> Nullable<Text>,
        adult_dental -> Nullable<Text>,
        child_dental -> Nullable<Text>,
        ehb_percent_of_total_premium -> Nullable<Text>,
        premium_child_age_0_14 -> Nullable<Float8>,
        premium_child_age_18 -> Nullable<Float8>,
        premium_adult_individual_age_21 -> Nullable<Float8>,
        premium_adult_individual_age_27 -> Nullable<Float8>,
        premium_adult_individual_age_30 -> Nullable<Float8>,
        premium_adult_individual_age_40 -> Nullable<Float8>,
        premium_adult_individual_age_50 -> Nullable<Float8>,
        premium_adult_individual_age_60 -> Nullable<Float8>,
        premium_couple_21 -> Nullable<Float8>,
        premium_couple_30 -> Nullable<Float8>,
        premium_couple_40 -> Nullable<Float8>,
        premium_couple_50 -> Nullable<Float8>,
        premium_couple_60 -> Nullable<Float8>,
        couple_plus_1_child_age_21 -> Nullable<Float8>,
        couple_plus_1_child_age_30 -> Nullable<Float8>,
        couple_plus_1_child_age_40 -> Nullable<Float8>,
        couple_plus_1_child_age_50 -> Nullable<Float8>,
        couple_plus_2_children_age_21 -> Nullable<Float8>,
        couple_plus_2_children_age_30 -> Nullable<Float8>,
        couple_plus_2_children_age_40 -> Nullable<Float8>,
        couple_plus_2_children_age_50 -> Nullable<Float8>,
        couple_plus_3_or_more_children_age_21 -> Nullable<Float8>,
        couple_plus_3_or_more_children_age_30 -> Nullable<Float8>,
        couple_plus_3_or_more_children_age_40 -> Nullable<Float8>,
        couple_plus_3_or_more_children_age_50 -> Nullable<Float8>,
        individual_plus_1_child_age_21 -> Nullable<Float8>,
        individual_plus_1_child_age_30 -> Nullable<Float8>,
        individual_plus_1_child_age_40 -> Nullable<Float8>,
        individual_plus_1_child_age_50 -> Nullable<Float8>,
        individual_plus_2_children_age_21 -> Nullable<Float8>,
        individual_plus_2_children_age_30 -> Nullable<Float8>,
        individual_plus_2_children_age_40 -> Nullable<Float8>,
        individual_plus_2_children_age_50 -> Nullable<Float8>,
        individual_plus_3_or_more_children_age_21 -> Nullable<Float8>,
        individual_plus_3_or_more_children_age_30 -> Nullable<Float8>,
        individual_plus_3_or_more_children_age_40 -> Nullable<Float8>,
        individual_plus_3_or_more_children_age_50 -> Nullable<Float8>,
        medical_deductible_individual_standard -> Nullable<Float8>,
        medical_deductible_family_standard -> Nullable<Float8>,
        medical_deductible_family_per_person_standard -> Nullable<Text>,
        medical_maximum_out_of_pocket_individual_standard -> Nullable<Float8>,
        medical_maximum_out_of_pocket_family_standard -> Nullable<Float8>,
        medical_maximum_out_of_pocket_family_per_person_standard -> Nullable<Float8>,
        drug_deductible_individual_standard -> Nullable<Text>,
        drug_deductible_family_standard -> Nullable<Text>,
        drug_deductible_family_per_person_standard -> Nullable<Text>,
        drug_maximum_out_of_pocket_individual_standard -> Nullable<Text>,
        drug_maximum_out_of_pocket_family_standard -> Nullable<Text>,
        drug_maximum_out_of_pocket_family_per_person_standard -> Nullable<Text>,
        primary_care_physician_standard -> Nullable<Text>,
        specialist_standard -> Nullable<Text>,
        emergency_room_standard -> Nullable<Text>,
        inpatient_facility_standard -> Nullable<Text>,
        inpatient_physician_standard -> Nullable<Text>,
        generic_drugs_standard -> Nullable<Text>,
        preferred_brand_drugs_standard -> Nullable<Text>,
        non_preferred_brand_drugs_standard -> Nullable<Text>,
        specialty_drugs_standard -> Nullable<Text>,
    }
}

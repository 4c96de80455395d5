//! Filter form inputs and the listing query derived from them.

use serde::{Deserialize, Serialize};

use super::error::{ClientError, ClientResult};
use super::geo::GeoSelection;
use crate::models::FamilyMakeup;
use crate::services::parse_currency_input;

/// Household and money fields of the filter form, kept as typed so a
/// restored session shows exactly what the user entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemographicInputs {
    #[serde(default)]
    pub family_makeup: Option<FamilyMakeup>,
    #[serde(default)]
    pub monthly_salary: String,
    /// Monthly employer health-reimbursement (ICHRA) contribution.
    #[serde(default)]
    pub ichra_amount: String,
}

impl DemographicInputs {
    pub fn salary(&self) -> f64 {
        parse_currency_input(&self.monthly_salary)
    }

    pub fn contribution(&self) -> f64 {
        parse_currency_input(&self.ichra_amount)
    }
}

/// Everything the filter form submits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInputs {
    #[serde(default)]
    pub geo: GeoSelection,
    #[serde(default)]
    pub demo: DemographicInputs,
}

impl UserInputs {
    /// The `GET /plan-details` query for these inputs.
    pub fn plan_query(&self) -> ClientResult<PlanQuery> {
        match (self.geo.state(), self.geo.county()) {
            (Some(state), Some(county)) => Ok(PlanQuery {
                state_code: state.as_str().to_string(),
                county_name: county.to_string(),
                family_makeup: self.demo.family_makeup.map(|f| f.listing_key().to_string()),
            }),
            _ => Err(ClientError::IncompleteGeography),
        }
    }
}

/// Query parameters of the plan listing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanQuery {
    pub state_code: String,
    pub county_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_makeup: Option<String>,
}

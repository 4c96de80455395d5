//! Response shapes of the listing endpoints.

use serde::{Deserialize, Deserializer, Serialize};

use super::plan::PlanRecord;

/// Plan row as the comparison listing sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub id: String,
    pub metal_level: String,
    pub issuer_name: String,
    pub plan_id_standard_component: String,
    pub plan_marketing_name: String,
    pub plan_type: String,
    /// `None` when no premium columns were requested, so the field is left
    /// out. `Some(None)` serializes as `null`: columns were requested but
    /// none held a valid figure.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    pub average_premium: Option<Option<f64>>,
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

impl PlanSummary {
    /// Project a listable record. Returns `None` when any base column is
    /// missing or blank.
    pub fn from_record(record: &PlanRecord) -> Option<Self> {
        if !record.is_listable() {
            return None;
        }
        Some(Self {
            id: record.id.to_string(),
            metal_level: record.metal_level.clone()?,
            issuer_name: record.issuer_name.clone()?,
            plan_id_standard_component: record.plan_id_standard_component.clone()?,
            plan_marketing_name: record.plan_marketing_name.clone()?,
            plan_type: record.plan_type.clone()?,
            average_premium: None,
        })
    }

    /// The average premium, flattened.
    pub fn premium(&self) -> Option<f64> {
        self.average_premium.flatten()
    }
}

/// `GET /counties` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyListing {
    pub counties: Vec<String>,
    pub count: usize,
    pub state_code: String,
}

impl CountyListing {
    pub fn new(state_code: impl Into<String>, counties: Vec<String>) -> Self {
        Self {
            count: counties.len(),
            counties,
            state_code: state_code.into(),
        }
    }
}

/// `GET /plan-details` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanListing {
    pub plans: Vec<PlanSummary>,
    pub count: usize,
    pub state_code: String,
    pub county_name: String,
    /// The family makeup exactly as the caller sent it.
    pub family_makeup: Option<String>,
}

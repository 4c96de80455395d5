//! Sub-filters narrowing an already-fetched plan listing.

use serde::{Deserialize, Serialize};

use crate::models::PlanSummary;

/// A listing attribute that can be narrowed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    MetalLevel,
    Issuer,
    PlanType,
}

impl FilterField {
    fn value(self, plan: &PlanSummary) -> &str {
        match self {
            FilterField::MetalLevel => &plan.metal_level,
            FilterField::Issuer => &plan.issuer_name,
            FilterField::PlanType => &plan.plan_type,
        }
    }
}

/// Selected sub-filters. `None` means "all"; set filters combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubFilters {
    #[serde(default)]
    pub metal_level: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub plan_type: Option<String>,
}

impl SubFilters {
    /// Set or clear one filter. Blank values and `"all"` clear it.
    pub fn set(&mut self, field: FilterField, value: Option<&str>) {
        let value = value
            .map(str::trim)
            .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
            .map(str::to_string);

        match field {
            FilterField::MetalLevel => self.metal_level = value,
            FilterField::Issuer => self.issuer = value,
            FilterField::PlanType => self.plan_type = value,
        }
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::MetalLevel => self.metal_level.as_deref(),
            FilterField::Issuer => self.issuer.as_deref(),
            FilterField::PlanType => self.plan_type.as_deref(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.metal_level.is_some() || self.issuer.is_some() || self.plan_type.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, plan: &PlanSummary) -> bool {
        [FilterField::MetalLevel, FilterField::Issuer, FilterField::PlanType]
            .into_iter()
            .all(|field| {
                self.get(field)
                    .map_or(true, |wanted| field.value(plan) == wanted)
            })
    }

    /// Rows passing every set filter, in listing order.
    pub fn apply<'a>(&self, plans: &'a [PlanSummary]) -> Vec<&'a PlanSummary> {
        plans.iter().filter(|plan| self.matches(plan)).collect()
    }
}

/// Choices offered by each sub-filter picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub metal_levels: Vec<String>,
    pub issuers: Vec<String>,
    pub plan_types: Vec<String>,
}

impl FilterOptions {
    /// Sorted distinct non-empty values of each attribute.
    pub fn from_plans(plans: &[PlanSummary]) -> Self {
        let distinct = |field: FilterField| {
            let mut values: Vec<String> = plans
                .iter()
                .map(|plan| field.value(plan))
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();
            values.sort();
            values.dedup();
            values
        };

        Self {
            metal_levels: distinct(FilterField::MetalLevel),
            issuers: distinct(FilterField::Issuer),
            plan_types: distinct(FilterField::PlanType),
        }
    }
}

//! Plan listing lifecycle.
//!
//! ```text
//!   Unfiltered --submit--> Loading --fetch_succeeded--> Filtered
//!                             |                            |
//!                        fetch_failed                 set_filter (no refetch)
//!                             v
//!                           Error --submit--> Loading
//!
//!   any state --reset--> Unfiltered
//! ```

use tracing::debug;

use super::detail::DetailParams;
use super::error::{ClientError, ClientResult};
use super::filters::{FilterField, FilterOptions, SubFilters};
use super::inputs::{PlanQuery, UserInputs};
use super::store::PersistedListing;
use crate::models::{PlanListing, PlanSummary};
use crate::services::{out_of_pocket_premium, remaining_budget};

/// Generic banner text for a failed fetch.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch plan details";

/// Where the listing page is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingState {
    Unfiltered,
    Loading,
    Filtered,
    Error,
}

/// One listing row with its affordability figures.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRowView<'a> {
    pub plan: &'a PlanSummary,
    pub average_premium: Option<f64>,
    pub out_of_pocket: Option<f64>,
    pub remaining_budget: Option<f64>,
}

/// State of one plan listing page.
#[derive(Debug, Clone)]
pub struct ListingSession {
    state: ListingState,
    submitted: Option<UserInputs>,
    plans: Vec<PlanSummary>,
    sub_filters: SubFilters,
    error: Option<String>,
}

impl Default for ListingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingSession {
    pub fn new() -> Self {
        Self {
            state: ListingState::Unfiltered,
            submitted: None,
            plans: Vec::new(),
            sub_filters: SubFilters::default(),
            error: None,
        }
    }

    pub fn state(&self) -> ListingState {
        self.state
    }

    /// Banner text: a rejected submission or a failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn submitted(&self) -> Option<&UserInputs> {
        self.submitted.as_ref()
    }

    /// All fetched rows, ignoring sub-filters.
    pub fn plans(&self) -> &[PlanSummary] {
        &self.plans
    }

    pub fn sub_filters(&self) -> &SubFilters {
        &self.sub_filters
    }

    // ==================== Transitions ====================

    /// Submit the filter form. Returns the query to fetch.
    ///
    /// Without both state and county nothing changes except the banner.
    pub fn submit(&mut self, inputs: UserInputs) -> ClientResult<PlanQuery> {
        let query = match inputs.plan_query() {
            Ok(query) => query,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        debug!(state = %query.state_code, county = %query.county_name, "Submitting plan query");
        self.state = ListingState::Loading;
        self.submitted = Some(inputs);
        self.plans.clear();
        self.sub_filters.clear();
        self.error = None;
        Ok(query)
    }

    /// Results of the in-flight fetch arrived.
    pub fn fetch_succeeded(&mut self, listing: PlanListing) -> ClientResult<()> {
        if self.state != ListingState::Loading {
            return Err(ClientError::NotLoading);
        }
        self.plans = listing.plans;
        self.state = ListingState::Filtered;
        Ok(())
    }

    /// The in-flight fetch failed. Only a new submission leaves this state.
    pub fn fetch_failed(&mut self) -> ClientResult<()> {
        if self.state != ListingState::Loading {
            return Err(ClientError::NotLoading);
        }
        self.plans.clear();
        self.error = Some(FETCH_FAILED_MESSAGE.to_string());
        self.state = ListingState::Error;
        Ok(())
    }

    /// Back to an empty form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Narrow the fetched rows. Never triggers a fetch.
    pub fn set_filter(&mut self, field: FilterField, value: Option<&str>) -> ClientResult<()> {
        if self.state != ListingState::Filtered {
            return Err(ClientError::NoResults);
        }
        self.sub_filters.set(field, value);
        Ok(())
    }

    // ==================== Views ====================

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_plans(&self.plans)
    }

    /// Rows passing the sub-filters, with affordability against the
    /// submitted salary and contribution.
    pub fn visible_rows(&self) -> Vec<PlanRowView<'_>> {
        let (salary, contribution) = self
            .submitted
            .as_ref()
            .map(|inputs| (inputs.demo.salary(), inputs.demo.contribution()))
            .unwrap_or((0.0, 0.0));

        self.sub_filters
            .apply(&self.plans)
            .into_iter()
            .map(|plan| {
                let average = plan.premium();
                PlanRowView {
                    plan,
                    average_premium: average,
                    out_of_pocket: out_of_pocket_premium(average, contribution),
                    remaining_budget: remaining_budget(average, salary, contribution),
                }
            })
            .collect()
    }

    /// Query parameters carried by the rows' detail links.
    pub fn detail_params(&self) -> Option<DetailParams> {
        self.submitted.as_ref().map(DetailParams::from_inputs)
    }

    /// `(shown, total)` row counts.
    pub fn shown_counts(&self) -> (usize, usize) {
        (self.sub_filters.apply(&self.plans).len(), self.plans.len())
    }

    pub fn shown_label(&self) -> String {
        let (shown, total) = self.shown_counts();
        format!("Showing {} of {} plans", shown, total)
    }

    // ==================== Persistence ====================

    /// State worth persisting: a filtered listing with at least one row.
    pub fn snapshot(&self) -> Option<PersistedListing> {
        if self.state != ListingState::Filtered || self.plans.is_empty() {
            return None;
        }
        let inputs = self.submitted.clone()?;
        Some(PersistedListing::new(
            inputs,
            self.plans.clone(),
            self.sub_filters.clone(),
        ))
    }

    /// Rebuild a filtered listing from a snapshot.
    pub fn restore(persisted: PersistedListing) -> Self {
        Self {
            state: ListingState::Filtered,
            submitted: Some(persisted.inputs),
            plans: persisted.plans,
            sub_filters: persisted.sub_filters,
            error: None,
        }
    }
}

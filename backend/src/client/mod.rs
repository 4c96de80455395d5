//! Headless state of a plan browsing session.
//!
//! Everything a front end needs between HTTP calls, without any rendering:
//!
//! - [`geo`]: state-before-county selection and the county picker options
//! - [`inputs`]: filter form values and the listing query they produce
//! - [`session`]: listing lifecycle (`Unfiltered` → `Loading` → `Filtered`)
//! - [`filters`]: sub-filters over fetched rows
//! - [`store`]: versioned persisted listing for `?restore=true`
//! - [`detail`]: plan detail cost model

pub mod detail;
pub mod error;
pub mod filters;
pub mod geo;
pub mod inputs;
pub mod session;
pub mod store;

pub use detail::{
    AffordabilityBand, AnnualCost, DetailParams, PlanDetailView, PremiumPoint, SalaryShare,
    UsageLevel, UsageScenario,
};
pub use error::{ClientError, ClientResult, StoreError};
pub use filters::{FilterField, FilterOptions, SubFilters};
pub use geo::{CountyOptions, GeoSelection, StateChange, COUNTIES_FAILED_MESSAGE};
pub use inputs::{DemographicInputs, PlanQuery, UserInputs};
pub use session::{ListingSession, ListingState, PlanRowView, FETCH_FAILED_MESSAGE};
pub use store::{
    restore_requested, strip_restore_flag, KeyValueStore, ListingStore, MemoryStore,
    PersistedListing, LISTING_STATE_KEY, SCHEMA_VERSION,
};

//! Domain types shared by the repositories, the HTTP layer and the client state.

#[macro_use]
mod macros;

pub mod cell;
pub mod family;
pub mod geography;
pub mod listing;
pub mod plan;
pub mod premium;

pub use cell::DataCell;
pub use family::FamilyMakeup;
pub use geography::{CountyRecord, StateCode, StateCodeError, US_STATES};
pub use listing::{CountyListing, PlanListing, PlanSummary};
pub use plan::{CostSharing, PlanId, PlanRecord};
pub use premium::{PremiumColumn, PremiumSet, LISTING_AGES};

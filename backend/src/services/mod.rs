//! Service layer: plan queries and the arithmetic applied to fetched rows.

pub mod affordability;
pub mod error;
pub mod plans;
pub mod premium;

pub use affordability::{
    format_currency, out_of_pocket_premium, parse_currency_input, remaining_budget,
};
pub use error::{ServiceError, ServiceResult};
pub use plans::{get_plan, health_check, list_counties, list_plans};
pub use premium::{average_premium, premium_columns_for};

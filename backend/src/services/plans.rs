//! Read-only plan queries, independent of the storage backend.

use tracing::debug;

use super::error::{ServiceError, ServiceResult};
use super::premium::{average_premium, premium_columns_for};
use crate::db::{FullRepository, RepositoryResult};
use crate::models::{CountyListing, PlanId, PlanListing, PlanRecord, PlanSummary, StateCode};

/// Treat empty and whitespace-only query values as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Sorted, de-duplicated county names for a state.
pub async fn list_counties<R: FullRepository + ?Sized>(
    repo: &R,
    state_code: Option<&str>,
) -> ServiceResult<CountyListing> {
    let state = StateCode::parse(present(state_code).unwrap_or_default())?;

    let mut counties: Vec<String> = repo
        .list_counties(&state)
        .await?
        .into_iter()
        .filter(|name| !name.trim().is_empty())
        .collect();
    counties.sort();
    counties.dedup();

    debug!(state = %state, count = counties.len(), "Listed counties");
    Ok(CountyListing::new(state.as_str(), counties))
}

/// Listable plans of a county, with the average premium of `family_makeup`
/// when it resolves to premium columns.
pub async fn list_plans<R: FullRepository + ?Sized>(
    repo: &R,
    state_code: Option<&str>,
    county_name: Option<&str>,
    family_makeup: Option<&str>,
) -> ServiceResult<PlanListing> {
    let state = StateCode::parse(present(state_code).unwrap_or_default())?;
    let county = present(county_name).ok_or(ServiceError::MissingParameter("county_name"))?;

    let columns = premium_columns_for(family_makeup);
    let records = repo.list_plans(&state, county).await?;
    let fetched = records.len();

    let mut plans: Vec<PlanSummary> = records
        .iter()
        .filter_map(|record| {
            let mut summary = PlanSummary::from_record(record)?;
            if !columns.is_empty() {
                summary.average_premium = Some(average_premium(&record.premiums, columns));
            }
            Some(summary)
        })
        .collect();
    plans.sort_by(|a, b| {
        a.issuer_name
            .cmp(&b.issuer_name)
            .then_with(|| a.plan_marketing_name.cmp(&b.plan_marketing_name))
    });

    debug!(
        state = %state,
        county,
        fetched,
        listed = plans.len(),
        "Listed plans"
    );

    Ok(PlanListing {
        count: plans.len(),
        plans,
        state_code: state.as_str().to_string(),
        county_name: county.to_string(),
        family_makeup: family_makeup.map(str::to_string),
    })
}

/// Full record of one plan. `Ok(None)` when no plan has that id.
pub async fn get_plan<R: FullRepository + ?Sized>(
    repo: &R,
    plan_id: &str,
) -> ServiceResult<Option<PlanRecord>> {
    let id = PlanId::new(plan_id.trim());
    if id.is_blank() {
        return Err(ServiceError::MissingPlanId);
    }
    Ok(repo.get_plan(&id).await?)
}

/// Pass-through to the repository health check.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

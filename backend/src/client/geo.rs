//! State and county selection, including the county picker's options.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{ClientError, ClientResult};
use crate::models::{CountyListing, StateCode, StateCodeError};

/// Banner shown when the county lookup fails.
pub const COUNTIES_FAILED_MESSAGE: &str = "Failed to fetch counties";

/// Outcome of a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// A new state was chosen; its counties must be fetched.
    FetchCounties(StateCode),
    /// The state was deselected along with its county.
    Cleared,
    /// Same state as before; the county is kept.
    Unchanged,
}

/// Counties the picker can offer for the selected state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CountyOptions {
    /// No lookup issued for the current state.
    #[default]
    Unrequested,
    Loading,
    Loaded(Vec<String>),
    Failed,
}

/// Geography picked in the filter form.
///
/// A county can only be chosen once a state is, only from the counties
/// fetched for that state, and it never outlives a state change. Equality
/// compares the selection only; fetched options are transient and are not
/// serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "StoredSelection")]
pub struct GeoSelection {
    state: Option<StateCode>,
    county: Option<String>,
    #[serde(skip)]
    options: CountyOptions,
}

#[derive(Deserialize)]
struct StoredSelection {
    #[serde(default)]
    state: Option<StateCode>,
    #[serde(default)]
    county: Option<String>,
}

impl TryFrom<StoredSelection> for GeoSelection {
    type Error = ClientError;

    fn try_from(stored: StoredSelection) -> Result<Self, Self::Error> {
        let county = stored
            .county
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if county.is_some() && stored.state.is_none() {
            return Err(ClientError::StateNotSelected);
        }
        Ok(Self {
            state: stored.state,
            county,
            options: CountyOptions::Unrequested,
        })
    }
}

impl PartialEq for GeoSelection {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.county == other.county
    }
}

impl Eq for GeoSelection {}

impl GeoSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a state from user input. Empty input deselects.
    ///
    /// A new state puts the county options into `Loading`; the caller
    /// fetches them and reports back with [`GeoSelection::counties_loaded`]
    /// or [`GeoSelection::counties_failed`].
    pub fn select_state(&mut self, input: &str) -> Result<StateChange, StateCodeError> {
        let state = match StateCode::parse(input) {
            Ok(state) => state,
            Err(StateCodeError::Missing) => {
                self.clear();
                return Ok(StateChange::Cleared);
            }
            Err(e) => return Err(e),
        };

        if self.state.as_ref() == Some(&state) {
            return Ok(StateChange::Unchanged);
        }

        self.state = Some(state.clone());
        self.county = None;
        self.options = CountyOptions::Loading;
        Ok(StateChange::FetchCounties(state))
    }

    /// Ask for the current state's counties again, after a failure or a
    /// restore. Returns the state to fetch, or `None` when nothing is
    /// needed.
    pub fn refresh_counties(&mut self) -> Option<StateCode> {
        let state = self.state.clone()?;
        match self.options {
            CountyOptions::Unrequested | CountyOptions::Failed => {
                self.options = CountyOptions::Loading;
                Some(state)
            }
            CountyOptions::Loading | CountyOptions::Loaded(_) => None,
        }
    }

    /// Apply a county lookup. Responses for a state that is no longer
    /// selected, or that arrive when no lookup is pending, are dropped and
    /// `false` is returned. A selected county missing from the list is
    /// deselected.
    pub fn counties_loaded(&mut self, listing: CountyListing) -> bool {
        if !self.awaits(&listing.state_code) {
            debug!(state = %listing.state_code, "Dropping stale county listing");
            return false;
        }
        if let Some(county) = &self.county {
            if !listing.counties.contains(county) {
                self.county = None;
            }
        }
        self.options = CountyOptions::Loaded(listing.counties);
        true
    }

    /// Record a failed county lookup. Stale failures are dropped.
    pub fn counties_failed(&mut self, state: &StateCode) -> bool {
        if !self.awaits(state.as_str()) {
            return false;
        }
        self.options = CountyOptions::Failed;
        true
    }

    fn awaits(&self, state_code: &str) -> bool {
        self.options == CountyOptions::Loading
            && self
                .state
                .as_ref()
                .is_some_and(|state| state.as_str() == state_code)
    }

    /// Select a county of the current state. Empty input deselects.
    pub fn select_county(&mut self, county: &str) -> ClientResult<()> {
        if self.state.is_none() {
            return Err(ClientError::StateNotSelected);
        }
        let county = county.trim();
        if county.is_empty() {
            self.county = None;
            return Ok(());
        }

        let CountyOptions::Loaded(counties) = &self.options else {
            return Err(ClientError::CountiesUnavailable);
        };
        if !counties.iter().any(|c| c == county) {
            return Err(ClientError::UnknownCounty(county.to_string()));
        }
        self.county = Some(county.to_string());
        Ok(())
    }

    /// Whether the county picker accepts input: a state is chosen and its
    /// counties loaded into a non-empty list.
    pub fn county_enabled(&self) -> bool {
        self.state.is_some()
            && matches!(&self.options, CountyOptions::Loaded(counties) if !counties.is_empty())
    }

    /// Text of the county picker button.
    pub fn county_prompt(&self) -> &str {
        if self.state.is_none() {
            return "Select a state first";
        }
        match &self.options {
            CountyOptions::Unrequested | CountyOptions::Loading => "Loading counties...",
            CountyOptions::Failed => "Error loading counties",
            CountyOptions::Loaded(counties) if counties.is_empty() => "No counties available",
            CountyOptions::Loaded(_) => self.county.as_deref().unwrap_or("Select a county"),
        }
    }

    /// Banner for a failed county lookup.
    pub fn county_error(&self) -> Option<&'static str> {
        (self.options == CountyOptions::Failed).then_some(COUNTIES_FAILED_MESSAGE)
    }

    pub fn county_options(&self) -> &CountyOptions {
        &self.options
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_some() && self.county.is_some()
    }

    pub fn state(&self) -> Option<&StateCode> {
        self.state.as_ref()
    }

    pub fn county(&self) -> Option<&str> {
        self.county.as_deref()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx() -> StateCode {
        StateCode::parse("TX").unwrap()
    }

    fn texas_counties() -> CountyListing {
        CountyListing::new("TX", vec!["Bexar".into(), "Travis".into()])
    }

    fn travis() -> GeoSelection {
        let mut geo = GeoSelection::new();
        geo.select_state("TX").unwrap();
        assert!(geo.counties_loaded(texas_counties()));
        geo.select_county("Travis").unwrap();
        geo
    }

    #[test]
    fn test_county_requires_state() {
        let mut geo = GeoSelection::new();
        assert!(!geo.county_enabled());
        assert_eq!(geo.county_prompt(), "Select a state first");
        assert_eq!(
            geo.select_county("Travis"),
            Err(ClientError::StateNotSelected)
        );
    }

    #[test]
    fn test_picker_disabled_until_counties_load() {
        let mut geo = GeoSelection::new();
        assert_eq!(geo.select_state("tx").unwrap(), StateChange::FetchCounties(tx()));

        assert_eq!(geo.county_options(), &CountyOptions::Loading);
        assert!(!geo.county_enabled());
        assert_eq!(geo.county_prompt(), "Loading counties...");
        assert_eq!(
            geo.select_county("Atlantis"),
            Err(ClientError::CountiesUnavailable)
        );
        assert!(geo.county().is_none());

        assert!(geo.counties_loaded(texas_counties()));
        assert!(geo.county_enabled());
        assert_eq!(geo.county_prompt(), "Select a county");
    }

    #[test]
    fn test_county_must_come_from_loaded_list() {
        let mut geo = travis();
        assert_eq!(geo.county_prompt(), "Travis");

        assert_eq!(
            geo.select_county("Atlantis"),
            Err(ClientError::UnknownCounty("Atlantis".into()))
        );
        assert_eq!(geo.county(), Some("Travis"));

        geo.select_county(" ").unwrap();
        assert!(geo.county().is_none());
    }

    #[test]
    fn test_empty_county_list_disables_picker() {
        let mut geo = GeoSelection::new();
        geo.select_state("WY").unwrap();
        assert!(geo.counties_loaded(CountyListing::new("WY", Vec::new())));

        assert!(!geo.county_enabled());
        assert_eq!(geo.county_prompt(), "No counties available");
    }

    #[test]
    fn test_failed_lookup_and_retry() {
        let mut geo = GeoSelection::new();
        geo.select_state("TX").unwrap();
        assert!(geo.counties_failed(&tx()));

        assert!(!geo.county_enabled());
        assert_eq!(geo.county_prompt(), "Error loading counties");
        assert_eq!(geo.county_error(), Some(COUNTIES_FAILED_MESSAGE));

        assert_eq!(geo.refresh_counties(), Some(tx()));
        assert_eq!(geo.refresh_counties(), None);
        assert!(geo.counties_loaded(texas_counties()));
        assert!(geo.county_error().is_none());
    }

    #[test]
    fn test_stale_responses_are_dropped() {
        let mut geo = GeoSelection::new();
        geo.select_state("TX").unwrap();
        geo.select_state("FL").unwrap();

        assert!(!geo.counties_loaded(texas_counties()));
        assert!(!geo.counties_failed(&tx()));
        assert_eq!(geo.county_options(), &CountyOptions::Loading);

        assert!(geo.counties_loaded(CountyListing::new("FL", vec!["Miami-Dade".into()])));
        assert!(!geo.counties_loaded(CountyListing::new("FL", vec!["Duval".into()])));
        assert_eq!(
            geo.county_options(),
            &CountyOptions::Loaded(vec!["Miami-Dade".into()])
        );
    }

    #[test]
    fn test_state_change_clears_county() {
        let mut geo = travis();
        assert!(geo.is_complete());

        assert_eq!(geo.select_state("TX").unwrap(), StateChange::Unchanged);
        assert_eq!(geo.county(), Some("Travis"));

        assert!(matches!(
            geo.select_state("FL").unwrap(),
            StateChange::FetchCounties(_)
        ));
        assert_eq!(geo.county(), None);
        assert!(!geo.is_complete());
    }

    #[test]
    fn test_empty_state_deselects() {
        let mut geo = travis();

        assert_eq!(geo.select_state("  ").unwrap(), StateChange::Cleared);
        assert!(geo.state().is_none());
        assert!(geo.county().is_none());
        assert_eq!(geo.county_options(), &CountyOptions::Unrequested);
    }

    #[test]
    fn test_malformed_state_keeps_selection() {
        let mut geo = travis();

        assert!(geo.select_state("Texas").is_err());
        assert_eq!(geo.county(), Some("Travis"));
    }

    #[test]
    fn test_deserialize_rejects_county_without_state() {
        let err = serde_json::from_str::<GeoSelection>(r#"{"county":"Travis"}"#).unwrap_err();
        assert!(err.to_string().contains("Select a state"));

        let blank: GeoSelection = serde_json::from_str(r#"{"county":"  "}"#).unwrap();
        assert!(blank.county().is_none());
    }

    #[test]
    fn test_restored_selection_refetches_counties() {
        let json = serde_json::to_string(&travis()).unwrap();
        assert_eq!(json, r#"{"state":"TX","county":"Travis"}"#);

        let mut restored: GeoSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, travis());
        assert!(restored.is_complete());
        assert_eq!(restored.county_options(), &CountyOptions::Unrequested);

        assert_eq!(restored.refresh_counties(), Some(tx()));
        assert!(restored.counties_loaded(CountyListing::new("TX", vec!["Bexar".into()])));
        assert!(restored.county().is_none());
    }
}

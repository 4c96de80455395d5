use serde::{Deserialize, Serialize};

/// A two-letter US state code, always uppercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StateCode(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateCodeError {
    #[error("state_code parameter is required")]
    Missing,
    #[error("state_code must be a two-letter state abbreviation, got '{0}'")]
    Malformed(String),
}

impl StateCode {
    /// Parse user input: surrounding whitespace is dropped and the code is
    /// uppercased. Anything other than exactly two ASCII letters is rejected.
    pub fn parse(input: &str) -> Result<Self, StateCodeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(StateCodeError::Missing);
        }
        if trimmed.len() != 2 || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(StateCodeError::Malformed(trimmed.to_string()));
        }
        Ok(StateCode(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full state name, for the states the form offers.
    pub fn name(&self) -> Option<&'static str> {
        US_STATES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for StateCode {
    type Err = StateCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StateCode::parse(s)
    }
}

impl<'de> Deserialize<'de> for StateCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        StateCode::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// States served by the federal marketplace, as offered in the state picker.
pub const US_STATES: [(&str, &str); 31] = [
    ("AK", "Alaska"),
    ("AL", "Alabama"),
    ("AR", "Arkansas"),
    ("AZ", "Arizona"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("KS", "Kansas"),
    ("LA", "Louisiana"),
    ("MI", "Michigan"),
    ("MO", "Missouri"),
    ("MS", "Mississippi"),
    ("MT", "Montana"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NE", "Nebraska"),
    ("NH", "New Hampshire"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

/// One row of the state/county lookup. Every column is nullable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountyRecord {
    #[serde(default)]
    pub state_code: Option<String>,
    #[serde(default)]
    pub county_name: Option<String>,
    #[serde(default)]
    pub fips_county_code: Option<i64>,
}

impl CountyRecord {
    pub fn new(state_code: &str, county_name: &str) -> Self {
        Self {
            state_code: Some(state_code.to_string()),
            county_name: Some(county_name.to_string()),
            fips_county_code: None,
        }
    }

    /// Whether the row belongs to `state`. Stored codes are compared
    /// case-insensitively.
    pub fn is_in(&self, state: &StateCode) -> bool {
        self.state_code
            .as_deref()
            .is_some_and(|code| code.trim().eq_ignore_ascii_case(state.as_str()))
    }
}

//! Persisted listing state.
//!
//! The last submitted inputs, the fetched plans and the sub-filters are kept
//! as one versioned JSON document so that navigating back from a plan detail
//! page (`?restore=true`) shows the same listing without a refetch. Entries
//! written under another schema version, or that no longer parse, restore as
//! nothing and are removed.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::StoreError;
use super::filters::SubFilters;
use super::inputs::UserInputs;
use crate::models::PlanSummary;

/// Storage key of the listing document.
pub const LISTING_STATE_KEY: &str = "plansPageState";

/// Version of the [`PersistedListing`] layout.
pub const SCHEMA_VERSION: u32 = 1;

const RESTORE_PARAM: &str = "restore";

/// String key/value storage, such as browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory [`KeyValueStore`]. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Snapshot of a filtered listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedListing {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub inputs: UserInputs,
    pub plans: Vec<PlanSummary>,
    #[serde(default)]
    pub sub_filters: SubFilters,
}

impl PersistedListing {
    pub fn new(inputs: UserInputs, plans: Vec<PlanSummary>, sub_filters: SubFilters) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            saved_at: Utc::now(),
            inputs,
            plans,
            sub_filters,
        }
    }
}

/// Why a stored entry was thrown away.
#[derive(Debug)]
enum Discard {
    Version(Option<u64>),
    Malformed(serde_json::Error),
}

impl std::fmt::Display for Discard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Discard::Version(Some(found)) => {
                write!(f, "schema version {} (expected {})", found, SCHEMA_VERSION)
            }
            Discard::Version(None) => write!(f, "missing schema version"),
            Discard::Malformed(e) => write!(f, "malformed document: {}", e),
        }
    }
}

fn decode(raw: &str) -> Result<PersistedListing, Discard> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(Discard::Malformed)?;
    let version = value.get("schema_version").and_then(serde_json::Value::as_u64);
    if version != Some(u64::from(SCHEMA_VERSION)) {
        return Err(Discard::Version(version));
    }
    serde_json::from_value(value).map_err(Discard::Malformed)
}

/// Typed access to the persisted listing document.
pub struct ListingStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ListingStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Overwrite the stored listing. Last write wins.
    pub fn save(&self, listing: &PersistedListing) -> Result<(), StoreError> {
        let json = serde_json::to_string(listing)?;
        self.store.set(LISTING_STATE_KEY, json)?;
        debug!(plans = listing.plans.len(), "Saved listing state");
        Ok(())
    }

    /// Read the stored listing. Incompatible entries are removed and read
    /// as `None`.
    pub fn restore(&self) -> Result<Option<PersistedListing>, StoreError> {
        let Some(raw) = self.store.get(LISTING_STATE_KEY)? else {
            return Ok(None);
        };

        match decode(&raw) {
            Ok(listing) => Ok(Some(listing)),
            Err(reason) => {
                warn!(key = LISTING_STATE_KEY, %reason, "Discarding persisted listing state");
                self.store.remove(LISTING_STATE_KEY)?;
                Ok(None)
            }
        }
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(LISTING_STATE_KEY)
    }

    pub fn inner(&self) -> &S {
        &self.store
    }
}

fn query_pairs(query: &str) -> impl Iterator<Item = &str> {
    query
        .strip_prefix('?')
        .unwrap_or(query)
        .split('&')
        .filter(|pair| !pair.is_empty())
}

fn is_restore_pair(pair: &str) -> bool {
    pair.split('=').next() == Some(RESTORE_PARAM)
}

/// Whether a listing URL query carries `restore=true`.
pub fn restore_requested(query: &str) -> bool {
    query_pairs(query).any(|pair| pair == "restore=true")
}

/// The query with every `restore` parameter removed, keeping the others in
/// order. A leading `?` is kept when anything remains.
pub fn strip_restore_flag(query: &str) -> String {
    let kept: Vec<&str> = query_pairs(query)
        .filter(|pair| !is_restore_pair(pair))
        .collect();

    if kept.is_empty() {
        return String::new();
    }
    let joined = kept.join("&");
    if query.starts_with('?') {
        format!("?{}", joined)
    } else {
        joined
    }
}

//! # Plan Browser Backend
//!
//! Browse and compare health insurance marketplace plans by state and county.
//!
//! The crate serves a read-only plans dataset over HTTP and carries the
//! client-side state a browsing session needs: geography selection, the
//! listing lifecycle, conjunctive sub-filters, a versioned persisted cache
//! and the plan detail cost model.
//!
//! ## Architecture
//!
//! - [`models`]: Plan records, premium columns, family makeups and geography
//! - [`db`]: Repository traits, local and Postgres implementations, factory
//! - [`services`]: Plan queries plus the premium and affordability arithmetic
//! - [`client`]: Headless browsing-session state
//! - [`http`]: Axum-based HTTP server and request handlers
//!

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod client;
pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

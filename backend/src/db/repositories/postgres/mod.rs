//! Postgres repository implementation using Diesel.
//!
//! Reads the externally managed `marketplace_plans` table and the
//! `state_county_lookup` view. Nothing is ever written, so there are no
//! migrations.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
//! - `PG_POOL_MAX`: Maximum pool size (default: 10)
//! - `PG_POOL_MIN`: Minimum pool size (default: 1)
//! - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
//! - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel::sql_types::Text;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task;
use tracing::debug;

use crate::db::repository::{
    ErrorContext, GeographyRepository, PlanRepository, RepositoryError, RepositoryResult,
};
use crate::models::{PlanId, PlanRecord, StateCode};

mod models;
mod schema;

use models::{CountyNameRow, MarketplacePlanRow};
use schema::marketplace_plans;

type PgPool = Pool<ConnectionManager<PgConnection>>;

const COUNTIES_SQL: &str = "SELECT county_name FROM state_county_lookup \
     WHERE state_code = $1 AND county_name IS NOT NULL \
     ORDER BY county_name";

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Minimum number of connections in the pool
    pub min_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_sec: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 10,
            min_pool_size: 1,
            connection_timeout_sec: 30,
            idle_timeout_sec: 600,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

impl PostgresConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("PG_DATABASE_URL"))
            .map_err(|_| "DATABASE_URL or PG_DATABASE_URL must be set".to_string())?;

        let defaults = Self::default();
        Ok(Self {
            database_url,
            max_pool_size: env_or("PG_POOL_MAX", defaults.max_pool_size),
            min_pool_size: env_or("PG_POOL_MIN", defaults.min_pool_size),
            connection_timeout_sec: env_or("PG_CONN_TIMEOUT_SEC", defaults.connection_timeout_sec),
            idle_timeout_sec: env_or("PG_IDLE_TIMEOUT_SEC", defaults.idle_timeout_sec),
        })
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

/// Pool health statistics.
#[derive(Debug, Clone, Default)]
pub struct PoolStats {
    /// Number of connections currently in use
    pub connections_in_use: u32,
    /// Number of idle connections
    pub idle_connections: u32,
    /// Total number of connections in the pool
    pub total_connections: u32,
    /// Maximum pool size
    pub max_size: u32,
    /// Total queries executed
    pub total_queries: u64,
    /// Total failed queries
    pub failed_queries: u64,
}

/// Diesel-backed, read-only repository for Postgres.
#[derive(Clone, Debug)]
pub struct PostgresRepository {
    pool: PgPool,
    config: PostgresConfig,
    // Metrics counters
    total_queries: Arc<AtomicU64>,
    failed_queries: Arc<AtomicU64>,
}

impl PostgresRepository {
    /// Build the connection pool.
    ///
    /// Blocks while r2d2 opens the minimum number of connections; call it
    /// from `spawn_blocking` inside a runtime.
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("create_pool")
                        .with_details(format!("max_size={}", config.max_pool_size)),
                )
            })?;

        Ok(Self {
            pool,
            config,
            total_queries: Arc::new(AtomicU64::new(0)),
            failed_queries: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Run a blocking diesel operation on a pooled connection.
    async fn with_conn<T, F>(&self, operation: &'static str, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        let total_queries = self.total_queries.clone();
        let failed_queries = self.failed_queries.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| {
                failed_queries.fetch_add(1, Ordering::Relaxed);
                RepositoryError::from(e).with_operation(operation)
            })?;

            total_queries.fetch_add(1, Ordering::Relaxed);
            f(&mut conn).map_err(|e| {
                failed_queries.fetch_add(1, Ordering::Relaxed);
                e.with_operation(operation)
            })
        })
        .await
        .map_err(|e| {
            RepositoryError::internal(format!("Task join error: {}", e)).with_operation(operation)
        })?
    }

    /// Get pool health statistics.
    pub fn get_pool_stats(&self) -> PoolStats {
        let state = self.pool.state();
        PoolStats {
            connections_in_use: state.connections - state.idle_connections,
            idle_connections: state.idle_connections,
            total_connections: state.connections,
            max_size: self.config.max_pool_size,
            total_queries: self.total_queries.load(Ordering::Relaxed),
            failed_queries: self.failed_queries.load(Ordering::Relaxed),
        }
    }
}

#[async_trait]
impl PlanRepository for PostgresRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn("health_check", |conn| {
            sql_query("SELECT 1")
                .execute(conn)
                .map(|_| true)
                .map_err(RepositoryError::from)
        })
        .await
    }

    async fn list_plans(
        &self,
        state: &StateCode,
        county_name: &str,
    ) -> RepositoryResult<Vec<PlanRecord>> {
        let state = state.as_str().to_string();
        let county = county_name.to_string();

        let rows = self
            .with_conn("list_plans", move |conn| {
                marketplace_plans::table
                    .filter(marketplace_plans::state_code.eq(&state))
                    .filter(marketplace_plans::county_name.eq(&county))
                    .filter(marketplace_plans::metal_level.is_not_null())
                    .order((
                        marketplace_plans::issuer_name.asc(),
                        marketplace_plans::plan_marketing_name.asc(),
                    ))
                    .select(MarketplacePlanRow::as_select())
                    .load::<MarketplacePlanRow>(conn)
                    .map_err(RepositoryError::from)
            })
            .await?;

        debug!(rows = rows.len(), "Loaded plan rows");
        Ok(rows.into_iter().map(PlanRecord::from).collect())
    }

    async fn get_plan(&self, plan_id: &PlanId) -> RepositoryResult<Option<PlanRecord>> {
        let id = plan_id.as_str().to_string();

        let row = self
            .with_conn("get_plan", move |conn| {
                marketplace_plans::table
                    .filter(marketplace_plans::id.eq(&id))
                    .select(MarketplacePlanRow::as_select())
                    .first::<MarketplacePlanRow>(conn)
                    .optional()
                    .map_err(RepositoryError::from)
            })
            .await?;

        Ok(row.map(PlanRecord::from))
    }
}

#[async_trait]
impl GeographyRepository for PostgresRepository {
    async fn list_counties(&self, state: &StateCode) -> RepositoryResult<Vec<String>> {
        let state = state.as_str().to_string();

        let rows = self
            .with_conn("list_counties", move |conn| {
                sql_query(COUNTIES_SQL)
                    .bind::<Text, _>(state)
                    .load::<CountyNameRow>(conn)
                    .map_err(RepositoryError::from)
            })
            .await?;

        Ok(rows.into_iter().filter_map(|row| row.county_name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_url_keeps_pool_defaults() {
        let config = PostgresConfig::with_url("postgres://localhost/plans");
        assert_eq!(config.database_url, "postgres://localhost/plans");
        assert_eq!(config.max_pool_size, 10);
        assert_eq!(config.idle_timeout_sec, 600);
    }
}

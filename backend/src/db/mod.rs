//! Storage access for the plans dataset via the Repository pattern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers (http/)                                   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - validation, averaging       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/)                         │
//! │  - PlanRepository                                        │
//! │  - GeographyRepository                                   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                 │
//! ┌───▼──────────────────┐   ┌─────────▼───────────────┐
//! │ Postgres Repository  │   │ Local Repository        │
//! │ (diesel + r2d2)      │   │ (in-memory, JSON seed)  │
//! └──────────────────────┘   └─────────────────────────┘
//! ```
//!
//! # Usage
//! ```ignore
//! use plan_browser::db::RepositoryFactory;
//!
//! let repo = RepositoryFactory::from_env().await?;
//! let listing = plan_browser::services::list_counties(repo.as_ref(), Some("TX")).await?;
//! ```

#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

// Postgres config is colocated with the repository implementation.
#[cfg(feature = "postgres-repo")]
pub use repositories::postgres::{PoolStats, PostgresConfig};
#[cfg(not(feature = "postgres-repo"))]
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    _private: (),
}
#[cfg(not(feature = "postgres-repo"))]
#[derive(Debug, Clone, Default)]
pub struct PoolStats {
    _private: (),
}

// ==================== Repository Pattern Exports ====================

pub use repo_config::RepositoryConfig;

pub use factory::{
    RepositoryBuilder, RepositoryFactory, RepositoryType, REPOSITORY_ENV, SEED_PATH_ENV,
};
pub use repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use repositories::PostgresRepository;
pub use repository::{
    ErrorContext, FullRepository, GeographyRepository, PlanRepository, RepositoryError,
    RepositoryResult,
};

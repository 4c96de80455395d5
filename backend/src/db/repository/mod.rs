//! Repository trait definitions for the plans dataset.
//!
//! - [`error`]: Error types for repository operations
//! - [`plans`]: Plan reads
//! - [`geography`]: State/county lookup
//!
//! For functions that need every capability, use the [`FullRepository`]
//! trait bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<()> {
//!     let counties = repo.list_counties(&state).await?;
//!     let plans = repo.list_plans(&state, &counties[0]).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod geography;
pub mod plans;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use geography::GeographyRepository;
pub use plans::PlanRepository;

/// Composite trait bound for a complete repository implementation.
pub trait FullRepository: PlanRepository + GeographyRepository {}

// Blanket implementation: any type implementing both traits automatically implements FullRepository
impl<T> FullRepository for T where T: PlanRepository + GeographyRepository {}

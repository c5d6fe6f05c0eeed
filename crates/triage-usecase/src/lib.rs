//! # Triage Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters:
//!
//! - `AssignTicketsUseCase` - load, enrich, allocate, persist
//! - `InspectTicketsUseCase` - load and enrich only, for dry runs

pub mod assign_tickets;
pub mod error;
pub mod inspect_tickets;

pub use triage_domain;

pub use assign_tickets::{AssignOptions, AssignTicketsUseCase, RunSummary};
pub use error::UseCaseError;
pub use inspect_tickets::InspectTicketsUseCase;

use triage_domain::{Dataset, DatasetRepository, RepositoryError};

/// Load a dataset and reject duplicate identities.
///
/// Shared by every use case so a run never starts on partially valid input.
pub(crate) fn load_validated<D: DatasetRepository>(repo: &D) -> Result<Dataset, UseCaseError> {
    let dataset = repo.load()?;

    if let Some(id) = dataset.duplicate_ticket_id() {
        return Err(RepositoryError::Malformed {
            message: format!("duplicate ticket_id '{}'", id),
        }
        .into());
    }
    if let Some(id) = dataset.duplicate_agent_id() {
        return Err(RepositoryError::Malformed {
            message: format!("duplicate agent_id '{}'", id),
        }
        .into());
    }

    Ok(dataset)
}

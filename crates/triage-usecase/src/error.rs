//! Use case errors

use thiserror::Error;
use triage_domain::RepositoryError;

#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Failed to load dataset: {0}")]
    Load(#[from] RepositoryError),

    #[error("Failed to save assignments: {0}")]
    Save(RepositoryError),
}

impl UseCaseError {
    /// True when the input itself was bad, as opposed to an I/O failure
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            UseCaseError::Load(RepositoryError::Malformed { .. })
        )
    }
}

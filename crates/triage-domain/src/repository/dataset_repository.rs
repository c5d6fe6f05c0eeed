//! Dataset Repository - Abstract source of tickets and agents

use crate::model::dataset::Dataset;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Source does not exist
    NotFound { location: String },
    /// Source exists but a record is missing a field or is otherwise invalid
    Malformed { message: String },
    /// Failed to read or persist
    PersistenceError { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { location } => {
                write!(f, "Dataset not found: {}", location)
            }
            RepositoryError::Malformed { message } => {
                write!(f, "Malformed input: {}", message)
            }
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Dataset Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Implementations must fail the whole load on the first malformed record;
/// a partially decoded dataset is never returned.
pub trait DatasetRepository {
    /// Load every ticket and agent for one run
    fn load(&self) -> Result<Dataset, RepositoryError>;
}

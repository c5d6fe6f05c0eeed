//! In-Memory Repository Implementations
//!
//! Simple in-memory implementations of repository traits.
//! Useful for testing, embedding and dry runs.

use std::sync::{Arc, RwLock};

use triage_domain::{
    Assignment, AssignmentRepository, Dataset, DatasetRepository, RepositoryError,
};

/// In-memory dataset source
///
/// Thread-safe implementation using RwLock; clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatasetRepository {
    dataset: Arc<RwLock<Dataset>>,
}

impl InMemoryDatasetRepository {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(dataset)),
        }
    }

    /// Replace the stored dataset
    pub fn replace(&self, dataset: Dataset) -> Result<(), RepositoryError> {
        let mut current = self.dataset.write().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire write lock".to_string(),
            }
        })?;
        *current = dataset;
        Ok(())
    }
}

impl DatasetRepository for InMemoryDatasetRepository {
    fn load(&self) -> Result<Dataset, RepositoryError> {
        let dataset = self.dataset.read().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire read lock".to_string(),
            }
        })?;
        Ok(dataset.clone())
    }
}

/// In-memory assignment sink
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignmentRepository {
    assignments: Arc<RwLock<Vec<Assignment>>>,
}

impl InMemoryAssignmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assignments from the most recent run
    pub fn list_all(&self) -> Result<Vec<Assignment>, RepositoryError> {
        let assignments = self.assignments.read().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire read lock".to_string(),
            }
        })?;
        Ok(assignments.clone())
    }
}

impl AssignmentRepository for InMemoryAssignmentRepository {
    fn save_all(&mut self, assignments: &[Assignment]) -> Result<(), RepositoryError> {
        let mut stored = self.assignments.write().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire write lock".to_string(),
            }
        })?;
        *stored = assignments.to_vec();
        Ok(())
    }
}

//! Assignment Repository - Abstract sink for allocation results

use crate::model::assignment::Assignment;
use crate::repository::dataset_repository::RepositoryError;

/// Assignment Repository Trait
///
/// Receives the complete, ordered assignment list of a run at once.
pub trait AssignmentRepository {
    /// Persist all assignments of a run, replacing any previous run
    fn save_all(&mut self, assignments: &[Assignment]) -> Result<(), RepositoryError>;
}

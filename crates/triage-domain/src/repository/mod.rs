//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define what the domain needs from the outside world,
//! but NOT how it's provided. That's the adapter's job.
//!
//! ```text
//! Domain Layer            │  Adapter Layer
//! ────────────────────────┼────────────────────────
//! trait DatasetRepository │  JsonDatasetRepository
//!   fn load()             │  InMemoryDatasetRepository
//! trait Clock             │  SystemClock
//! ```

pub mod assignment_repository;
pub mod clock;
pub mod dataset_repository;

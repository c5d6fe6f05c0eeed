//! # Triage Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - Dataset sources and assignment sinks (JSON files, memory)
//! - `clock` - Wall clock implementation of the `Clock` port

pub mod clock;
pub mod repository;

pub use clock::SystemClock;
pub use repository::in_memory::{InMemoryAssignmentRepository, InMemoryDatasetRepository};
pub use repository::json_file::{JsonAssignmentWriter, JsonDatasetRepository};

//! # Triage Domain Layer
//!
//! Pure business logic for routing support tickets to human agents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities & Value Objects                      ││
//! │  │  repository/- Port definitions (not implementations)        ││
//! │  │  service/   - Classifier, matcher, scoring, allocator       ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Ticket ──► enrich ──► EnrichedTicket ──► GreedyAllocator ──► Assignment
//!             │  classify (severity)          │  score (per agent)
//!             └─ match_skills                 └─ rationale
//! ```
//!
//! This crate has ZERO external dependencies.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    agent::{Agent, AgentId, AvailabilityStatus},
    assignment::Assignment,
    dataset::Dataset,
    enriched::EnrichedTicket,
    severity::Severity,
    skill::{MatchedSkills, SkillCategory},
    ticket::{Ticket, TicketId},
};

pub use repository::{
    assignment_repository::AssignmentRepository,
    clock::{Clock, FixedClock},
    dataset_repository::{DatasetRepository, RepositoryError},
};

pub use service::{
    allocator::{Allocation, AllocationOutcome, AllocationReport, GreedyAllocator},
    classifier::classify,
    enricher::{enrich, enrich_all},
    rationale::{format_rationale, top_skills, WorkloadLevel},
    scoring::score,
    skill_matcher::match_skills,
};

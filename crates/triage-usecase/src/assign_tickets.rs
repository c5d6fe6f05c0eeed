//! Assign Tickets - One full allocation run
//!
//! ```text
//! DatasetRepository ──► enrich_all ──► GreedyAllocator ──► AssignmentRepository
//!          ▲                 ▲
//!          │               Clock (read once)
//! ```
//!
//! Nothing is persisted unless every step before the save succeeds.

use tracing::{debug, info, warn};

use triage_domain::{
    enrich_all, AllocationOutcome, AssignmentRepository, Clock, DatasetRepository,
    GreedyAllocator,
};

use crate::error::UseCaseError;
use crate::load_validated;

/// Knobs for an assignment run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignOptions {
    /// Threads used to enrich tickets; 0 or 1 runs sequentially
    pub enrich_workers: usize,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self { enrich_workers: 4 }
    }
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub tickets: usize,
    pub agents: usize,
    pub assigned: usize,
    pub unassigned: usize,
}

/// AssignTicketsUseCase - Wires the ports around the allocator
pub struct AssignTicketsUseCase<D, A, C> {
    dataset: D,
    sink: A,
    clock: C,
    allocator: GreedyAllocator,
    options: AssignOptions,
}

impl<D, A, C> AssignTicketsUseCase<D, A, C>
where
    D: DatasetRepository,
    A: AssignmentRepository,
    C: Clock,
{
    pub fn new(dataset: D, sink: A, clock: C) -> Self {
        Self {
            dataset,
            sink,
            clock,
            allocator: GreedyAllocator::new(),
            options: AssignOptions::default(),
        }
    }

    /// Builder: set run options
    pub fn with_options(mut self, options: AssignOptions) -> Self {
        self.options = options;
        self
    }

    /// The assignment sink, e.g. to read back in-memory results
    pub fn sink(&self) -> &A {
        &self.sink
    }

    /// Execute one run: load, enrich, allocate, save.
    pub fn execute(&mut self) -> Result<RunSummary, UseCaseError> {
        let dataset = load_validated(&self.dataset)?;
        info!(
            tickets = dataset.tickets.len(),
            agents = dataset.agents.len(),
            "Loaded dataset"
        );

        let now = self.clock.now();
        let enriched = enrich_all(&dataset.tickets, now, self.options.enrich_workers);
        info!(
            tickets = enriched.len(),
            workers = self.options.enrich_workers,
            "Enriched tickets"
        );

        let report = self.allocator.allocate(enriched, &dataset.agents);
        for allocation in &report.allocations {
            match &allocation.outcome {
                AllocationOutcome::Assigned {
                    assignment,
                    score,
                    load,
                } => debug!(
                    ticket_id = %allocation.ticket_id,
                    agent_id = %assignment.assigned_agent_id,
                    priority = allocation.priority,
                    score = *score,
                    load = *load,
                    "Assigned ticket"
                ),
                AllocationOutcome::Unassigned => warn!(
                    ticket_id = %allocation.ticket_id,
                    priority = allocation.priority,
                    "No agent scored above the floor; ticket left unassigned"
                ),
            }
        }

        let assignments = report.assignments();
        self.sink
            .save_all(&assignments)
            .map_err(UseCaseError::Save)?;

        let summary = RunSummary {
            tickets: dataset.tickets.len(),
            agents: dataset.agents.len(),
            assigned: report.assigned_count(),
            unassigned: report.unassigned_count(),
        };
        info!(
            assigned = summary.assigned,
            unassigned = summary.unassigned,
            "Assignment run complete"
        );

        Ok(summary)
    }
}

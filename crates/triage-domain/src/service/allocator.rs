//! Greedy Allocator - Route each ticket to its best-scoring agent
//!
//! Tickets are processed in descending priority. For each ticket every agent
//! is scored against a private working load, the first agent with the highest
//! score wins, and the winner's load goes up by one before the next ticket.
//!
//! ```text
//!   Pending ──► scan agents ──► best_score > -1 ? ──► Assigned
//!                                     │
//!                                     └─ no ──────► Unassigned
//! ```
//!
//! This is a single greedy pass, not an optimal assignment.

use std::collections::HashMap;

use crate::model::agent::{Agent, AgentId};
use crate::model::assignment::Assignment;
use crate::model::enriched::EnrichedTicket;
use crate::model::ticket::TicketId;
use crate::service::rationale::{format_rationale, top_skills};
use crate::service::scoring::score;

/// Score an agent must beat to be selected
pub const SCORE_FLOOR: f64 = -1.0;

/// What happened to one ticket
#[derive(Debug, Clone, PartialEq)]
pub enum AllocationOutcome {
    /// Ticket went to an agent
    Assigned {
        assignment: Assignment,
        /// Winning score
        score: f64,
        /// Agent's working load before this ticket
        load: u32,
    },
    /// Nobody beat the score floor (always the case with no agents)
    Unassigned,
}

/// One ticket's result, in processing order
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub ticket_id: TicketId,
    pub priority: f64,
    pub outcome: AllocationOutcome,
}

impl Allocation {
    pub fn assignment(&self) -> Option<&Assignment> {
        match &self.outcome {
            AllocationOutcome::Assigned { assignment, .. } => Some(assignment),
            AllocationOutcome::Unassigned => None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self.outcome, AllocationOutcome::Assigned { .. })
    }
}

/// Everything one allocation run produced
#[derive(Debug, Clone, Default)]
pub struct AllocationReport {
    /// Per-ticket results in processing order
    pub allocations: Vec<Allocation>,
    /// Working load per agent at the end of the run, in agent order
    pub final_loads: Vec<(AgentId, u32)>,
}

impl AllocationReport {
    /// Assignments in processing order
    pub fn assignments(&self) -> Vec<Assignment> {
        self.allocations
            .iter()
            .filter_map(|a| a.assignment().cloned())
            .collect()
    }

    pub fn assigned_count(&self) -> usize {
        self.allocations.iter().filter(|a| a.is_assigned()).count()
    }

    pub fn unassigned_count(&self) -> usize {
        self.allocations.len() - self.assigned_count()
    }
}

/// GreedyAllocator - The assignment engine
///
/// Stateless between runs; the load map lives only inside `allocate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAllocator;

impl GreedyAllocator {
    pub fn new() -> Self {
        Self
    }

    /// Sort tickets into processing order: priority descending, ties kept in
    /// input order.
    pub fn order(&self, tickets: &mut [EnrichedTicket]) {
        tickets.sort_by(|a, b| b.priority().total_cmp(&a.priority()));
    }

    /// Run one allocation pass.
    ///
    /// `agents` is never modified; the allocator works on its own copy whose
    /// loads it keeps in sync with a map seeded from each agent's
    /// `current_load`.
    pub fn allocate(&self, mut tickets: Vec<EnrichedTicket>, agents: &[Agent]) -> AllocationReport {
        self.order(&mut tickets);

        let mut roster: Vec<Agent> = agents.to_vec();
        let mut loads: HashMap<AgentId, u32> = agents
            .iter()
            .map(|a| (a.id().clone(), a.current_load()))
            .collect();

        let allocations = tickets
            .iter()
            .map(|ticket| Allocation {
                ticket_id: ticket.ticket().id().clone(),
                priority: ticket.priority(),
                outcome: self.allocate_one(ticket, &mut roster, &mut loads),
            })
            .collect();

        let final_loads = roster
            .iter()
            .map(|a| {
                let load = loads.get(a.id()).copied().unwrap_or(a.current_load());
                (a.id().clone(), load)
            })
            .collect();

        AllocationReport {
            allocations,
            final_loads,
        }
    }

    fn allocate_one(
        &self,
        ticket: &EnrichedTicket,
        roster: &mut [Agent],
        loads: &mut HashMap<AgentId, u32>,
    ) -> AllocationOutcome {
        let mut best_score = SCORE_FLOOR;
        let mut best: Option<usize> = None;

        for (idx, agent) in roster.iter_mut().enumerate() {
            if let Some(load) = loads.get(agent.id()) {
                agent.set_current_load(*load);
            }
            let s = score(
                agent,
                ticket.matched_skills(),
                ticket.severity(),
                ticket.age_factor(),
            );
            // Strict: the first agent to reach the best score keeps it
            if s > best_score {
                best_score = s;
                best = Some(idx);
            }
        }

        let Some(winner) = best.map(|idx| &roster[idx]) else {
            return AllocationOutcome::Unassigned;
        };

        let load = winner.current_load();
        let slot = loads.entry(winner.id().clone()).or_insert(load);
        // Saturates at u32::MAX
        *slot = slot.saturating_add(1);

        let skills = top_skills(winner, ticket.matched_skills());
        AllocationOutcome::Assigned {
            assignment: Assignment {
                ticket_id: ticket.ticket().id().clone(),
                title: ticket.ticket().title().to_string(),
                assigned_agent_id: winner.id().clone(),
                rationale: format_rationale(winner, &skills, load),
            },
            score: best_score,
            load,
        }
    }
}

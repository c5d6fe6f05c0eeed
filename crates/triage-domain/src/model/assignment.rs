//! Assignment - The allocator's output record

use super::agent::AgentId;
use super::ticket::TicketId;

/// A ticket routed to an agent, with the reason why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub ticket_id: TicketId,
    pub title: String,
    pub assigned_agent_id: AgentId,
    pub rationale: String,
}

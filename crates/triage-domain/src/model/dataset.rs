//! Dataset - Everything one allocation run needs

use std::collections::HashSet;

use super::agent::Agent;
use super::ticket::Ticket;

/// Decoded tickets and agents, in source order
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub tickets: Vec<Ticket>,
    pub agents: Vec<Agent>,
}

impl Dataset {
    pub fn new(tickets: Vec<Ticket>, agents: Vec<Agent>) -> Self {
        Self { tickets, agents }
    }

    /// First ticket id that appears more than once
    pub fn duplicate_ticket_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.tickets
            .iter()
            .map(|t| t.id().as_str())
            .find(|id| !seen.insert(*id))
    }

    /// First agent id that appears more than once
    pub fn duplicate_agent_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.agents
            .iter()
            .map(|a| a.id().as_str())
            .find(|id| !seen.insert(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::agent::{AgentId, AvailabilityStatus};
    use crate::model::ticket::TicketId;

    #[test]
    fn test_duplicate_detection() {
        let dataset = Dataset::new(
            vec![
                Ticket::new(TicketId::new("T1"), "a", "", 0.0),
                Ticket::new(TicketId::new("T2"), "b", "", 0.0),
                Ticket::new(TicketId::new("T1"), "c", "", 0.0),
            ],
            vec![
                Agent::new(AgentId::new("a1"), "A", AvailabilityStatus::Available),
                Agent::new(AgentId::new("a2"), "B", AvailabilityStatus::Available),
            ],
        );

        assert_eq!(dataset.duplicate_ticket_id(), Some("T1"));
        assert_eq!(dataset.duplicate_agent_id(), None);
    }
}

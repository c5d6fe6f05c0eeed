//! Inspect Tickets - Enrich without allocating
//!
//! Shows how each ticket would be classified and in what order the allocator
//! would see it. Nothing is written.

use tracing::info;

use triage_domain::{enrich_all, Clock, DatasetRepository, EnrichedTicket, GreedyAllocator};

use crate::error::UseCaseError;
use crate::load_validated;

pub struct InspectTicketsUseCase<D, C> {
    dataset: D,
    clock: C,
}

impl<D, C> InspectTicketsUseCase<D, C>
where
    D: DatasetRepository,
    C: Clock,
{
    pub fn new(dataset: D, clock: C) -> Self {
        Self { dataset, clock }
    }

    /// Enriched tickets in processing order
    pub fn execute(&self) -> Result<Vec<EnrichedTicket>, UseCaseError> {
        let dataset = load_validated(&self.dataset)?;
        let mut enriched = enrich_all(&dataset.tickets, self.clock.now(), 1);
        GreedyAllocator::new().order(&mut enriched);

        info!(tickets = enriched.len(), "Inspected tickets");
        Ok(enriched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_domain::{Dataset, FixedClock, RepositoryError, Severity, Ticket, TicketId};

    const NOW: f64 = 1_700_000_000.0;

    struct StubDataset(Dataset);

    impl DatasetRepository for StubDataset {
        fn load(&self) -> Result<Dataset, RepositoryError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_inspect_orders_by_priority() {
        let dataset = Dataset::new(
            vec![
                Ticket::new(TicketId::new("T1"), "Mouse", "request", NOW),
                Ticket::new(TicketId::new("T2"), "Email", "error on send", NOW),
                Ticket::new(TicketId::new("T3"), "Network", "outage", NOW),
            ],
            vec![],
        );

        let enriched = InspectTicketsUseCase::new(StubDataset(dataset), FixedClock(NOW))
            .execute()
            .unwrap();

        let ids: Vec<_> = enriched
            .iter()
            .map(|e| e.ticket().id().as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["T3", "T2", "T1"]);
        assert_eq!(enriched[0].severity(), Severity::Critical);
        assert_eq!(enriched[1].severity(), Severity::Medium);
        assert_eq!(enriched[2].severity(), Severity::Low);
    }
}

//! Ticket - A support request waiting for an owner
//!
//! Ticket is an Entity (has identity) and is immutable once loaded.

/// Unique identifier for a Ticket
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for TicketId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticket - An incoming support request
#[derive(Debug, Clone)]
pub struct Ticket {
    /// Unique identifier (Entity identity)
    id: TicketId,
    /// Short summary line
    title: String,
    /// Free-text body
    description: String,
    /// Creation time, epoch seconds
    created_at: f64,
}

impl Ticket {
    /// Create a new Ticket
    pub fn new(
        id: TicketId,
        title: impl Into<String>,
        description: impl Into<String>,
        created_at: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            created_at,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> &TicketId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> f64 {
        self.created_at
    }

    /// Title and description joined by a single space.
    ///
    /// This is the text both the severity classifier and the skill matcher see.
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    /// Hours elapsed between creation and `now`.
    ///
    /// Negative for tickets created in the future.
    pub fn age_hours(&self, now: f64) -> f64 {
        (now - self.created_at) / 3600.0
    }
}

impl PartialEq for Ticket {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ticket {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_text_joins_title_and_description() {
        let ticket = Ticket::new(TicketId::new("T-1"), "VPN", "keeps dropping", 0.0);
        assert_eq!(ticket.text(), "VPN keeps dropping");
    }

    #[test]
    fn test_age_hours() {
        let ticket = Ticket::new(TicketId::new("T-1"), "a", "b", 1_000.0);
        assert_eq!(ticket.age_hours(1_000.0 + 7_200.0), 2.0);
        assert_eq!(ticket.age_hours(1_000.0 - 3_600.0), -1.0);
    }

    #[test]
    fn test_entity_equality() {
        let a = Ticket::new(TicketId::new("T-1"), "one", "", 0.0);
        let b = Ticket::new(TicketId::new("T-1"), "two", "changed", 5.0);
        assert_eq!(a, b);
    }
}

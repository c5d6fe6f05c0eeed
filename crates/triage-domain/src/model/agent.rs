//! Agent - A human support engineer who can take tickets
//!
//! Agent is an Entity (has identity).
//! The same AgentId refers to the same person even if their skills,
//! availability or load change between runs.

use std::collections::BTreeMap;

use super::skill::SkillCategory;

/// Unique identifier for an Agent
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AgentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether an agent can take new work
///
/// Only the exact status `Available` is eligible; every other label is kept
/// verbatim so it can be reported back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AvailabilityStatus {
    Available,
    Unavailable(String),
}

impl AvailabilityStatus {
    /// Parse a status label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Self {
        if label == "Available" {
            AvailabilityStatus::Available
        } else {
            AvailabilityStatus::Unavailable(label.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AvailabilityStatus::Available => "Available",
            AvailabilityStatus::Unavailable(label) => label,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, AvailabilityStatus::Available)
    }
}

impl core::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Agent - A support engineer with skills and a workload
#[derive(Debug, Clone)]
pub struct Agent {
    /// Unique identifier (Entity identity)
    id: AgentId,
    /// Display name
    name: String,
    /// Availability for new tickets
    status: AvailabilityStatus,
    /// Skill name -> proficiency
    skills: BTreeMap<String, u32>,
    /// Seniority, feeds the experience bonus
    experience_level: f64,
    /// Tickets currently owned
    current_load: u32,
}

impl Agent {
    /// Create a new Agent with no skills, zero experience and zero load
    pub fn new(id: AgentId, name: impl Into<String>, status: AvailabilityStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            skills: BTreeMap::new(),
            experience_level: 0.0,
            current_load: 0,
        }
    }

    /// Builder: add a skill
    pub fn with_skill(mut self, skill: impl Into<String>, proficiency: u32) -> Self {
        self.skills.insert(skill.into(), proficiency);
        self
    }

    /// Builder: add skills
    pub fn with_skills<S: Into<String>>(
        mut self,
        skills: impl IntoIterator<Item = (S, u32)>,
    ) -> Self {
        self.skills
            .extend(skills.into_iter().map(|(name, level)| (name.into(), level)));
        self
    }

    /// Builder: set experience level
    pub fn with_experience(mut self, experience_level: f64) -> Self {
        self.experience_level = experience_level;
        self
    }

    /// Builder: set current load
    pub fn with_load(mut self, current_load: u32) -> Self {
        self.current_load = current_load;
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &AgentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> &AvailabilityStatus {
        &self.status
    }

    pub fn skills(&self) -> &BTreeMap<String, u32> {
        &self.skills
    }

    pub fn experience_level(&self) -> f64 {
        self.experience_level
    }

    pub fn current_load(&self) -> u32 {
        self.current_load
    }

    /// Overwrite the load. Used by the allocator on its working copy.
    pub fn set_current_load(&mut self, load: u32) {
        self.current_load = load;
    }

    // ========== Capability Checks ==========

    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }

    /// Proficiency in a skill, 0 when the agent doesn't list it
    pub fn proficiency(&self, skill: &str) -> u32 {
        self.skills.get(skill).copied().unwrap_or(0)
    }

    pub fn proficiency_in(&self, category: SkillCategory) -> u32 {
        self.proficiency(category.as_str())
    }
}

impl PartialEq for Agent {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for Agent {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_creation() {
        let agent = Agent::new(
            AgentId::new("agent_001"),
            "Sarah Chen",
            AvailabilityStatus::Available,
        )
        .with_experience(7.0)
        .with_load(2);

        assert_eq!(agent.id().as_str(), "agent_001");
        assert_eq!(agent.name(), "Sarah Chen");
        assert!(agent.is_available());
        assert_eq!(agent.experience_level(), 7.0);
        assert_eq!(agent.current_load(), 2);
    }

    #[test]
    fn test_proficiency_defaults_to_zero() {
        let agent = Agent::new(AgentId::new("a1"), "A", AvailabilityStatus::Available)
            .with_skills([("Networking", 7), ("Database_SQL", 3)]);

        assert_eq!(agent.proficiency("Networking"), 7);
        assert_eq!(agent.proficiency_in(SkillCategory::DatabaseSql), 3);
        assert_eq!(agent.proficiency_in(SkillCategory::CloudAzure), 0);
    }

    #[test]
    fn test_availability_is_exact() {
        assert!(AvailabilityStatus::from_label("Available").is_available());
        assert!(!AvailabilityStatus::from_label("available").is_available());
        assert!(!AvailabilityStatus::from_label("On Leave").is_available());
        assert_eq!(AvailabilityStatus::from_label("Busy").as_str(), "Busy");
    }

    #[test]
    fn test_entity_equality() {
        let a = Agent::new(AgentId::new("a-001"), "A", AvailabilityStatus::Available);
        let b = Agent::new(
            AgentId::new("a-001"),
            "A Modified",
            AvailabilityStatus::Unavailable("Busy".to_string()),
        );
        assert_eq!(a, b);
    }
}

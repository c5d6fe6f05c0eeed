//! Human-readable assignment rationale

use crate::model::agent::Agent;
use crate::model::skill::{MatchedSkills, SkillCategory};

/// Most skills named in one rationale
pub const MAX_RATIONALE_SKILLS: usize = 2;

/// Coarse workload band shown in the rationale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadLevel {
    Low,
    Moderate,
    High,
}

impl WorkloadLevel {
    pub fn from_load(load: u32) -> Self {
        match load {
            0..=2 => WorkloadLevel::Low,
            3..=4 => WorkloadLevel::Moderate,
            _ => WorkloadLevel::High,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WorkloadLevel::Low => "low workload",
            WorkloadLevel::Moderate => "moderate workload",
            WorkloadLevel::High => "higher workload but best skill match",
        }
    }
}

/// Matched skills the agent actually has, paired with the agent's proficiency.
///
/// Kept in matched-skill order and cut to `MAX_RATIONALE_SKILLS`.
pub fn top_skills(agent: &Agent, matched_skills: &MatchedSkills) -> Vec<(SkillCategory, u32)> {
    matched_skills
        .categories()
        .filter_map(|category| {
            let proficiency = agent.proficiency_in(category);
            (proficiency > 0).then_some((category, proficiency))
        })
        .take(MAX_RATIONALE_SKILLS)
        .collect()
}

/// Render the rationale sentence for an assignment.
///
/// `load` is the agent's working load seen while scoring this ticket.
pub fn format_rationale(agent: &Agent, top_skills: &[(SkillCategory, u32)], load: u32) -> String {
    let skill_text = if top_skills.is_empty() {
        "general support".to_string()
    } else {
        top_skills
            .iter()
            .map(|(category, proficiency)| format!("'{}' ({})", category, proficiency))
            .collect::<Vec<_>>()
            .join(" and ")
    };

    format!(
        "Assigned to {} ({}) based on expertise in {} and {}.",
        agent.name(),
        agent.id(),
        skill_text,
        WorkloadLevel::from_load(load).description()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::agent::{AgentId, AvailabilityStatus};

    fn sarah() -> Agent {
        Agent::new(
            AgentId::new("agent_001"),
            "Sarah Chen",
            AvailabilityStatus::Available,
        )
        .with_skills([
            ("Networking", 9),
            ("Database_SQL", 4),
            ("VPN_Troubleshooting", 7),
        ])
    }

    #[test]
    fn test_workload_bands() {
        assert_eq!(WorkloadLevel::from_load(0), WorkloadLevel::Low);
        assert_eq!(WorkloadLevel::from_load(2), WorkloadLevel::Low);
        assert_eq!(WorkloadLevel::from_load(3), WorkloadLevel::Moderate);
        assert_eq!(WorkloadLevel::from_load(4), WorkloadLevel::Moderate);
        assert_eq!(WorkloadLevel::from_load(5), WorkloadLevel::High);
    }

    #[test]
    fn test_top_skills_filters_and_truncates() {
        let matched: MatchedSkills = [
            (SkillCategory::VpnTroubleshooting, 2),
            (SkillCategory::Microsoft365, 4),
            (SkillCategory::DatabaseSql, 2),
            (SkillCategory::Networking, 6),
        ]
        .into_iter()
        .collect();

        // Microsoft_365 is dropped (proficiency 0), Networking is cut by the limit
        assert_eq!(
            top_skills(&sarah(), &matched),
            vec![
                (SkillCategory::VpnTroubleshooting, 7),
                (SkillCategory::DatabaseSql, 4),
            ]
        );
    }

    #[test]
    fn test_rationale_with_two_skills() {
        let text = format_rationale(
            &sarah(),
            &[
                (SkillCategory::VpnTroubleshooting, 7),
                (SkillCategory::Networking, 9),
            ],
            1,
        );
        assert_eq!(
            text,
            "Assigned to Sarah Chen (agent_001) based on expertise in \
             'VPN_Troubleshooting' (7) and 'Networking' (9) and low workload."
        );
    }

    #[test]
    fn test_rationale_general_support() {
        let text = format_rationale(&sarah(), &[], 3);
        assert_eq!(
            text,
            "Assigned to Sarah Chen (agent_001) based on expertise in \
             general support and moderate workload."
        );
    }

    #[test]
    fn test_rationale_high_workload() {
        let text = format_rationale(&sarah(), &[(SkillCategory::Networking, 9)], 6);
        assert!(text.ends_with("'Networking' (9) and higher workload but best skill match."));
    }
}

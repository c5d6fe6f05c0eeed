//! Skill - The fixed catalogue of support skill categories
//!
//! Each category owns a small keyword set. Categories are declared in the
//! order the matcher reports them, and `Ord` follows declaration order, so a
//! `BTreeMap<SkillCategory, _>` iterates in catalogue order.

use std::collections::BTreeMap;

/// One of the nine support skill categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillCategory {
    VpnTroubleshooting,
    Microsoft365,
    LinuxAdministration,
    HardwareDiagnostics,
    ActiveDirectory,
    DatabaseSql,
    NetworkSecurity,
    CloudAzure,
    Networking,
}

impl SkillCategory {
    /// Every category, in catalogue order
    pub const ALL: [SkillCategory; 9] = [
        SkillCategory::VpnTroubleshooting,
        SkillCategory::Microsoft365,
        SkillCategory::LinuxAdministration,
        SkillCategory::HardwareDiagnostics,
        SkillCategory::ActiveDirectory,
        SkillCategory::DatabaseSql,
        SkillCategory::NetworkSecurity,
        SkillCategory::CloudAzure,
        SkillCategory::Networking,
    ];

    /// Name used for this category in agent skill maps
    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::VpnTroubleshooting => "VPN_Troubleshooting",
            SkillCategory::Microsoft365 => "Microsoft_365",
            SkillCategory::LinuxAdministration => "Linux_Administration",
            SkillCategory::HardwareDiagnostics => "Hardware_Diagnostics",
            SkillCategory::ActiveDirectory => "Active_Directory",
            SkillCategory::DatabaseSql => "Database_SQL",
            SkillCategory::NetworkSecurity => "Network_Security",
            SkillCategory::CloudAzure => "Cloud_Azure",
            SkillCategory::Networking => "Networking",
        }
    }

    /// Look up a category by its agent-facing name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Keywords that signal this category.
    ///
    /// Multi-word entries are compared against single whitespace tokens and
    /// so never match.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            SkillCategory::VpnTroubleshooting => {
                &["vpn", "tunnel", "remote", "connection dropping"]
            }
            SkillCategory::Microsoft365 => {
                &["outlook", "office", "email", "teams", "sharepoint", "onedrive"]
            }
            SkillCategory::LinuxAdministration => {
                &["linux", "permission", "directory", "sudo", "chmod", "bash"]
            }
            SkillCategory::HardwareDiagnostics => {
                &["laptop", "boot", "hardware", "screen", "keyboard", "battery"]
            }
            SkillCategory::ActiveDirectory => {
                &["active directory", "sso", "account", "group policy", "domain"]
            }
            SkillCategory::DatabaseSql => &["database", "sql", "query", "backup", "restore"],
            SkillCategory::NetworkSecurity => {
                &["security", "attack", "locked", "firewall", "breach"]
            }
            SkillCategory::CloudAzure => &["azure", "cloud", "app service", "saas"],
            SkillCategory::Networking => &["network", "printer", "ip", "dns", "dhcp"],
        }
    }
}

impl core::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Skill categories a ticket touches, with their match weights.
///
/// Only strictly positive weights are ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchedSkills(BTreeMap<SkillCategory, u32>);

impl MatchedSkills {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a weight for a category. Zero weights are dropped.
    pub fn insert(&mut self, category: SkillCategory, weight: u32) {
        if weight > 0 {
            self.0.insert(category, weight);
        } else {
            self.0.remove(&category);
        }
    }

    pub fn get(&self, category: SkillCategory) -> Option<u32> {
        self.0.get(&category).copied()
    }

    pub fn contains(&self, category: SkillCategory) -> bool {
        self.0.contains_key(&category)
    }

    /// Entries in catalogue order
    pub fn iter(&self) -> impl Iterator<Item = (SkillCategory, u32)> + '_ {
        self.0.iter().map(|(c, w)| (*c, *w))
    }

    pub fn categories(&self) -> impl Iterator<Item = SkillCategory> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(SkillCategory, u32)> for MatchedSkills {
    fn from_iter<I: IntoIterator<Item = (SkillCategory, u32)>>(iter: I) -> Self {
        let mut skills = Self::new();
        for (category, weight) in iter {
            skills.insert(category, weight);
        }
        skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for category in SkillCategory::ALL {
            assert_eq!(SkillCategory::from_name(category.as_str()), Some(category));
        }
        assert_eq!(SkillCategory::from_name("Cooking"), None);
    }

    #[test]
    fn test_keyword_counts() {
        for category in SkillCategory::ALL {
            let n = category.keywords().len();
            assert!((4..=6).contains(&n), "{} has {} keywords", category, n);
        }
    }

    #[test]
    fn test_matched_skills_drops_zero() {
        let mut skills = MatchedSkills::new();
        skills.insert(SkillCategory::Networking, 0);
        assert!(skills.is_empty());

        skills.insert(SkillCategory::Networking, 2);
        skills.insert(SkillCategory::Networking, 0);
        assert!(!skills.contains(SkillCategory::Networking));
    }

    #[test]
    fn test_matched_skills_iterate_in_catalogue_order() {
        let skills: MatchedSkills = [
            (SkillCategory::Networking, 2),
            (SkillCategory::VpnTroubleshooting, 4),
            (SkillCategory::DatabaseSql, 2),
        ]
        .into_iter()
        .collect();

        let order: Vec<_> = skills.categories().collect();
        assert_eq!(
            order,
            vec![
                SkillCategory::VpnTroubleshooting,
                SkillCategory::DatabaseSql,
                SkillCategory::Networking,
            ]
        );
    }
}

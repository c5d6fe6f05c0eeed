//! Configuration types for Triage

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::TriageError;

/// Run configuration (triage.json / triage.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriageConfig {
    /// Input dataset with tickets and agents
    pub dataset_path: PathBuf,

    /// Where assignments are written
    pub output_path: PathBuf,

    /// Threads used to enrich tickets (0 or 1 = sequential)
    pub enrich_workers: usize,

    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("dataset.json"),
            output_path: PathBuf::from("output_result.json"),
            enrich_workers: 4,
            log_level: "info".to_string(),
        }
    }
}

impl TriageConfig {
    /// Load configuration from a JSON or YAML file, chosen by extension
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            other => {
                return Err(TriageError::Config(format!(
                    "unsupported config extension {:?} for {}",
                    other.unwrap_or(""),
                    path.display()
                )))
            }
        };
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}

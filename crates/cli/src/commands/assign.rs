//! triage assign command

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use shared::TriageConfig;
use tracing::info;
use triage_adapter::{JsonAssignmentWriter, JsonDatasetRepository, SystemClock};
use triage_domain::{Clock, FixedClock};
use triage_usecase::{AssignOptions, AssignTicketsUseCase};

#[derive(Debug, Args)]
pub struct AssignCommand {
    /// Dataset file (overrides config)
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Output file (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enrichment worker threads (overrides config)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Current time in epoch seconds, for reproducible runs
    #[arg(long)]
    pub now: Option<f64>,
}

/// Paths and options after merging flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct AssignSettings {
    pub dataset: PathBuf,
    pub output: PathBuf,
    pub options: AssignOptions,
}

impl AssignCommand {
    pub fn settings(&self, config: &TriageConfig) -> AssignSettings {
        AssignSettings {
            dataset: self
                .dataset
                .clone()
                .unwrap_or_else(|| config.dataset_path.clone()),
            output: self
                .output
                .clone()
                .unwrap_or_else(|| config.output_path.clone()),
            options: AssignOptions {
                enrich_workers: self.workers.unwrap_or(config.enrich_workers),
            },
        }
    }

    pub fn run(&self, config: &TriageConfig) -> anyhow::Result<()> {
        let settings = self.settings(config);
        let clock = FixedClock(self.now.unwrap_or_else(|| SystemClock.now()));
        let source = JsonDatasetRepository::new(&settings.dataset);
        let sink = JsonAssignmentWriter::new(&settings.output);
        info!(
            dataset = %source.path().display(),
            output = %sink.path().display(),
            now = clock.now(),
            "Starting assignment run"
        );

        let mut usecase =
            AssignTicketsUseCase::new(source, sink, clock).with_options(settings.options);

        let summary = usecase.execute().with_context(|| {
            format!(
                "assignment run failed for {}",
                settings.dataset.display()
            )
        })?;

        println!("Assigned {} tickets optimally!", summary.assigned);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> AssignCommand {
        AssignCommand {
            dataset: None,
            output: None,
            workers: None,
            now: None,
        }
    }

    #[test]
    fn test_settings_fall_back_to_config() {
        let settings = command().settings(&TriageConfig::default());

        assert_eq!(settings.dataset, PathBuf::from("dataset.json"));
        assert_eq!(settings.output, PathBuf::from("output_result.json"));
        assert_eq!(settings.options.enrich_workers, 4);
    }

    #[test]
    fn test_flags_override_config() {
        let cmd = AssignCommand {
            dataset: Some(PathBuf::from("other.json")),
            workers: Some(1),
            ..command()
        };

        let settings = cmd.settings(&TriageConfig::default());
        assert_eq!(settings.dataset, PathBuf::from("other.json"));
        assert_eq!(settings.output, PathBuf::from("output_result.json"));
        assert_eq!(settings.options.enrich_workers, 1);
    }

    #[test]
    fn test_run_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("dataset.json");
        let output = dir.path().join("out.json");
        std::fs::write(
            &dataset,
            r#"{
                "tickets": [{ "ticket_id": "T1", "title": "VPN", "description": "tunnel fails",
                              "creation_timestamp": 1699996400 }],
                "agents": [{ "agent_id": "a1", "name": "Ana", "availability_status": "Available",
                             "skills": { "VPN_Troubleshooting": 4 }, "experience_level": 3,
                             "current_load": 0 }]
            }"#,
        )
        .unwrap();

        let cmd = AssignCommand {
            dataset: Some(dataset),
            output: Some(output.clone()),
            workers: Some(2),
            now: Some(1_700_000_000.0),
        };
        cmd.run(&TriageConfig::default()).unwrap();

        let written = std::fs::read_to_string(output).unwrap();
        assert!(written.contains("\"assigned_agent_id\": \"a1\""));
        assert!(written.contains("'VPN_Troubleshooting' (4)"));
    }

    #[test]
    fn test_run_fails_on_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.json");
        let cmd = AssignCommand {
            dataset: Some(dir.path().join("missing.json")),
            output: Some(output.clone()),
            ..command()
        };

        assert!(cmd.run(&TriageConfig::default()).is_err());
        assert!(!output.exists());
    }
}

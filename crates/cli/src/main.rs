//! Triage CLI - Route support tickets to agents
//!
//! Usage:
//!   triage assign                 - Assign tickets from dataset.json
//!   triage assign --now <epoch>   - Assign against a fixed clock
//!   triage inspect                - Show severity, priority and skills per ticket

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cli::commands::{AssignCommand, InspectCommand};
use shared::TriageConfig;

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Triage - Greedy skill-based support ticket assignment")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (.json, .yaml or .yml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign every ticket and write the results
    Assign(AssignCommand),
    /// Enrich tickets and print them in processing order
    Inspect(InspectCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = TriageConfig::load(cli.config.as_deref()).with_context(|| {
        format!(
            "failed to load config {}",
            cli.config
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;

    cli::logging::init(cli.log_level.as_deref().unwrap_or(&config.log_level));

    match cli.command {
        Commands::Assign(cmd) => cmd.run(&config),
        Commands::Inspect(cmd) => cmd.run(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_assign_with_globals() {
        let cli = Cli::try_parse_from([
            "triage",
            "assign",
            "--dataset",
            "in.json",
            "--now",
            "1700000000",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Commands::Assign(cmd) => {
                assert_eq!(cmd.dataset, Some(PathBuf::from("in.json")));
                assert_eq!(cmd.now, Some(1_700_000_000.0));
            }
            Commands::Inspect(_) => panic!("expected assign"),
        }
    }
}

//! JSON file repositories
//!
//! Dataset layout:
//!
//! ```json
//! {
//!   "tickets": [{ "ticket_id": "...", "title": "...", "description": "...",
//!                 "creation_timestamp": 1700000000 }],
//!   "agents":  [{ "agent_id": "...", "name": "...", "availability_status": "Available",
//!                 "skills": { "Networking": 7 }, "experience_level": 5, "current_load": 1 }]
//! }
//! ```
//!
//! Results are written as a pretty-printed array of assignment records.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use triage_domain::{
    Agent, AgentId, Assignment, AssignmentRepository, AvailabilityStatus, Dataset,
    DatasetRepository, RepositoryError, Ticket, TicketId,
};

#[derive(Debug, Deserialize)]
struct DatasetRecord {
    tickets: Vec<TicketRecord>,
    agents: Vec<AgentRecord>,
}

#[derive(Debug, Deserialize)]
struct TicketRecord {
    ticket_id: String,
    title: String,
    description: String,
    creation_timestamp: f64,
}

#[derive(Debug, Deserialize)]
struct AgentRecord {
    agent_id: String,
    name: String,
    availability_status: String,
    skills: BTreeMap<String, u32>,
    experience_level: f64,
    current_load: u32,
}

#[derive(Debug, Serialize)]
struct AssignmentRecord<'a> {
    ticket_id: &'a str,
    title: &'a str,
    assigned_agent_id: &'a str,
    rationale: &'a str,
}

impl TryFrom<TicketRecord> for Ticket {
    type Error = RepositoryError;

    fn try_from(record: TicketRecord) -> Result<Self, Self::Error> {
        if record.ticket_id.is_empty() {
            return Err(RepositoryError::Malformed {
                message: "ticket with empty ticket_id".to_string(),
            });
        }
        Ok(Ticket::new(
            TicketId::new(record.ticket_id),
            record.title,
            record.description,
            record.creation_timestamp,
        ))
    }
}

impl TryFrom<AgentRecord> for Agent {
    type Error = RepositoryError;

    fn try_from(record: AgentRecord) -> Result<Self, Self::Error> {
        if record.agent_id.is_empty() {
            return Err(RepositoryError::Malformed {
                message: format!("agent '{}' has an empty agent_id", record.name),
            });
        }
        Ok(Agent::new(
            AgentId::new(record.agent_id),
            record.name,
            AvailabilityStatus::from_label(&record.availability_status),
        )
        .with_skills(record.skills)
        .with_experience(record.experience_level)
        .with_load(record.current_load))
    }
}

/// Decode a dataset from JSON text
pub fn parse_dataset(json: &str) -> Result<Dataset, RepositoryError> {
    let record: DatasetRecord =
        serde_json::from_str(json).map_err(|e| RepositoryError::Malformed {
            message: e.to_string(),
        })?;

    let tickets = record
        .tickets
        .into_iter()
        .map(Ticket::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let agents = record
        .agents
        .into_iter()
        .map(Agent::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset::new(tickets, agents))
}

/// Encode assignments as pretty-printed JSON
pub fn render_assignments(assignments: &[Assignment]) -> Result<String, RepositoryError> {
    let records: Vec<AssignmentRecord<'_>> = assignments
        .iter()
        .map(|a| AssignmentRecord {
            ticket_id: a.ticket_id.as_str(),
            title: &a.title,
            assigned_agent_id: a.assigned_agent_id.as_str(),
            rationale: &a.rationale,
        })
        .collect();

    serde_json::to_string_pretty(&records).map_err(|e| RepositoryError::PersistenceError {
        message: e.to_string(),
    })
}

/// Dataset stored in a single JSON file
#[derive(Debug, Clone)]
pub struct JsonDatasetRepository {
    path: PathBuf,
}

impl JsonDatasetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetRepository for JsonDatasetRepository {
    fn load(&self) -> Result<Dataset, RepositoryError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RepositoryError::NotFound {
                    location: self.path.display().to_string(),
                }
            } else {
                RepositoryError::PersistenceError {
                    message: format!("{}: {}", self.path.display(), e),
                }
            }
        })?;
        parse_dataset(&content)
    }
}

/// Writes assignments to a JSON file, replacing its contents
#[derive(Debug, Clone)]
pub struct JsonAssignmentWriter {
    path: PathBuf,
}

impl JsonAssignmentWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AssignmentRepository for JsonAssignmentWriter {
    fn save_all(&mut self, assignments: &[Assignment]) -> Result<(), RepositoryError> {
        let json = render_assignments(assignments)?;
        std::fs::write(&self.path, json).map_err(|e| RepositoryError::PersistenceError {
            message: format!("{}: {}", self.path.display(), e),
        })
    }
}

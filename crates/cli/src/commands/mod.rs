//! CLI Commands

pub mod assign;
pub mod inspect;

pub use assign::AssignCommand;
pub use inspect::InspectCommand;

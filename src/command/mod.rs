mod commands;
mod history;

pub use crate::error::CommandError;
pub use commands::Command;
pub use history::History;

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

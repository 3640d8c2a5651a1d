//! Error type shared by the buffer, the edit session and command dispatch.

/// Errors surfaced by the editing engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// An offset or span fell outside `[0, len]` of the buffer
    OutOfBounds { offset: usize, len: usize },
    /// No command is registered under this name
    UnknownCommand(String),
    /// A command's arguments were missing or had the wrong shape
    InvalidArgs { command: String, reason: String },
    /// A settings file could not be read or parsed
    Config(String),
}

impl EditError {
    pub fn invalid_args(command: &str, reason: impl Into<String>) -> Self {
        EditError::InvalidArgs {
            command: command.to_string(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::OutOfBounds { offset, len } => {
                write!(f, "Offset {} out of bounds (buffer length {})", offset, len)
            }
            EditError::UnknownCommand(name) => write!(f, "Unknown command: {}", name),
            EditError::InvalidArgs { command, reason } => {
                write!(f, "Invalid arguments for {}: {}", command, reason)
            }
            EditError::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for EditError {}

pub type Result<T> = std::result::Result<T, EditError>;

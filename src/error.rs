use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AgentError {
    ConfigurationError(String),
    DatabaseError(String),
    StoreError(String),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
            AgentError::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            AgentError::StoreError(msg) => write!(f, "Store error: {msg}"),
        }
    }
}

impl std::error::Error for AgentError {}

pub type Result<T> = std::result::Result<T, AgentError>;

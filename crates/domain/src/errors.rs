use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Failed to read trace {path}: {reason}")]
    TraceUnreadable { path: String, reason: String },

    #[error("Failed to write report {path}: {reason}")]
    ReportUnwritable { path: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<crate::config::ConfigError> for DomainError {
    fn from(err: crate::config::ConfigError) -> Self {
        DomainError::ConfigError(err.to_string())
    }
}

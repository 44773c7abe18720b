use thiserror::Error;

/// Problems with the task list. Always fatal, raised before the first cycle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("Task list is empty; expected the task count on line 1")]
    MissingTaskCount,

    #[error("Invalid task count '{value}' on line {line}")]
    InvalidTaskCount { line: usize, value: String },

    #[error("Task list announces {expected} task(s) but only {found} task line(s) follow")]
    MissingTaskLine { expected: usize, found: usize },

    #[error("Malformed task on line {line}: {reason}")]
    MalformedTaskLine { line: usize, reason: String },

    #[error("Invalid {field} {value} for task on line {line}; must be at least 1")]
    InvalidTaskField { line: usize, field: &'static str, value: i64 },
}

/// Rejected run parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Number of processors must be positive, got {0}")]
    NonPositiveProcessors(i64),

    #[error("Number of processors must be at most {max}, got {requested}")]
    TooManyProcessors { requested: i64, max: usize },

    #[error("Number of cycles must be positive, got {0}")]
    NonPositiveCycles(i64),

    #[error("Could not read run parameters: {0}")]
    MissingRunParameters(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to write CSV report: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to load tasks: {0}")]
    LoadError(#[from] LoadError),

    #[error("Invalid configuration: {0}")]
    ConfigError(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

use std::io;

use thiserror::Error;

/// Library-wide error type for drenv operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Environment file could not be read.
    #[error("Failed to read {path}: {source}")]
    ReadEnvironment {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Environment file is not valid YAML or has wrongly typed fields.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Environment or settings failed validation.
    #[error("{0}")]
    Validation(String),

    /// External program could not be started.
    #[error("Failed to execute {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// External program exited with a nonzero status.
    #[error(
        "[{label}] Command {command} failed rc={}\n\nLast messages:\n{}",
        format_code(.code),
        format_tail(.tail)
    )]
    CommandFailed { label: String, command: String, code: Option<i32>, tail: Vec<String> },

    /// Cluster metadata query returned output we could not interpret.
    #[error("[{profile}] Cannot read cluster info: {details}")]
    ClusterInfo { profile: String, details: String },

    /// One or more units of a fan-out failed.
    #[error("{kind} failed: {}", .failed.join(", "))]
    Aggregate { kind: String, failed: Vec<String> },
}

impl AppError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// Names of the failed units when this is an aggregate failure.
    pub fn failed_units(&self) -> &[String] {
        match self {
            AppError::Aggregate { failed, .. } => failed,
            _ => &[],
        }
    }
}

fn format_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

fn format_tail(tail: &[String]) -> String {
    tail.iter().map(|line| format!("  {}", line)).collect::<Vec<_>>().join("\n")
}

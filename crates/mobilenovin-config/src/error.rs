//! Error types for settings loading and budget enforcement.
//!
//! Resolving a build request never fails. Errors only come from reading
//! resolver settings and from a budget configured to fail the build.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid settings value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("failed to load settings: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Load(Box::new(err))
    }
}

/// Raised when a budget with [`Enforcement::Fail`](crate::Enforcement::Fail)
/// is exceeded.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error(
        "{artifact} is {actual} bytes, exceeding the {limit} byte budget\n\nHint: reduce the artifact size or set budget enforcement to 'warn'"
    )]
    Exceeded {
        artifact: String,
        actual: u64,
        limit: u64,
    },
}

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by user handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum KollektorError {
    #[error("{0}")]
    Config(String),

    #[error("Failed to scan {path}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("handler for \"{pattern}\" failed on {path}")]
    Handler {
        pattern: String,
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl KollektorError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Short category name, stable across message changes.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileSystem { .. } => "FileSystem",
            Self::Handler { .. } => "Handler",
        }
    }
}

pub type Result<T> = std::result::Result<T, KollektorError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

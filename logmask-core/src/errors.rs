//! errors.rs - Custom error types for the logmask-core library.
//!
//! This module defines a structured error enum for the library. Validation and
//! input errors are detected up front, before any file is touched; I/O errors
//! abort the run they occur in and carry the path that failed.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// All error kinds produced by the `logmask-core` library.
///
/// `#[non_exhaustive]` leaves room for new variants without breaking
/// downstream `match` statements.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MaskError {
    /// The rule configuration has one or more defects. Carries every defect,
    /// never just the first one.
    #[error("Rule configuration failed validation ({} error(s))", .0.len())]
    Validation(Vec<String>),

    #[error("Input path must be an existing file or directory: {}", .0.display())]
    InvalidInput(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rule configuration {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize run report: {0}")]
    ReportSerialization(#[from] serde_json::Error),

    #[error("Failed to compile masking rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),
}

impl MaskError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MaskError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the full list of validation messages, or an empty slice for
    /// any other error kind.
    pub fn validation_errors(&self) -> &[String] {
        match self {
            MaskError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

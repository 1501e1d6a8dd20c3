// SPDX-License-Identifier: LGPL-3.0-only

//! Settings loading and color parsing errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading settings or parsing colors.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A required companion service is missing.
    #[error("A required companion service is missing: {0}")]
    MissingDependency(&'static str),

    /// Settings file not found.
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),

    /// Failed to read settings file.
    #[error("Failed to read settings file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),

    /// Failed to write settings file.
    #[error("Failed to write settings file {0}: {1}")]
    WriteError(PathBuf, std::io::Error),

    /// Failed to parse settings file.
    #[error("Failed to parse settings file {0}: {1}")]
    ParseError(PathBuf, String),

    /// Invalid color format.
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// Invalid color mode value.
    #[error("Invalid color mode: {0}")]
    InvalidMode(String),
}

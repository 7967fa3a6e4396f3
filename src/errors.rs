/*!
 * Error types for the sub2text application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating the command line input, before any I/O runs
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Error when neither a file nor a directory argument was supplied
    #[error("you must provide a subtitle file or a directory path")]
    MissingInput,

    /// Error when the given source path does not exist
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// Error when a single-file source is not one of the supported subtitle formats
    #[error("the subtitle extension must be either .srt or .vtt: {}", .0.display())]
    UnsupportedExtension(PathBuf),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from input validation
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Error from a file operation
    #[error("file error: {0}")]
    File(String),

    /// Any other error
    #[error("unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the bartle application.
//!
//! Validation findings are not errors: a malformed commit message produces a
//! [`ValidationResult`](crate::rules::ValidationResult). The types here cover
//! operational failures around the linter (configuration, git, hooks, I/O).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for bartle operations.
#[derive(Error, Debug)]
pub enum BartleError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // Lint errors
    #[error("Lint error: {0}")]
    Lint(#[from] LintError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Configuration file already exists: {path} (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    #[error("Failed to render configuration template: {message}")]
    RenderFailed { message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not inside a git repository (run `git init` first)")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("{path} already exists and is not managed by bartle (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    #[error("{path} is not managed by bartle (use --force to remove)")]
    NotManaged { path: PathBuf },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Lint command errors.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("no commit message provided (use -m, a file path, --rev, or pipe on stdin)")]
    NoMessage,

    #[error("failed to read message from {source_name}: {message}")]
    ReadFailed {
        source_name: String,
        message: String,
    },

    #[error("commit message failed lint ({count} issue(s))")]
    Failed { count: usize },
}

/// Result type alias for bartle operations.
pub type Result<T> = std::result::Result<T, BartleError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| BartleError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

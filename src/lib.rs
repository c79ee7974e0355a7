// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Bartle - Commit Message Linter
//!
//! Checks the first line of a commit message against a configured style and
//! reports every violation it finds.
//!
//! # Features
//!
//! - **Conventional Style**: `type(scope)!: subject` with type, scope, case, and length rules
//! - **Issue-Tracker Style**: `ABC-123: subject` headers keyed on a ticket
//! - **Repository Config**: `.bartle.toml` discovered from the git repository root
//! - **Git Hooks**: Install and remove a `commit-msg` hook that runs the linter
//!
//! # Example
//!
//! ```
//! use bartle::config::BartleConfig;
//! use bartle::rules::validate_message;
//!
//! let config = BartleConfig::default();
//!
//! let result = validate_message("feat(ui): add dropdown", &config);
//! assert!(result.is_valid());
//!
//! let result = validate_message("feat: add dropdown", &config);
//! assert_eq!(result.errors(), [" - scope required (e.g., type(scope): subject)"]);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;

// Re-exports for convenience
pub use config::BartleConfig;
pub use error::{BartleError, Result};
pub use rules::{validate_message, ValidationResult};

/// Version information embedded at compile time.
pub mod version {
    use serde::Serialize;

    /// The current version of bartle.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Who produced the build. Release pipelines set `BARTLE_BUILT_BY`.
    pub const BUILT_BY: &str = match option_env!("BARTLE_BUILT_BY") {
        Some(builder) => builder,
        None => "local",
    };

    /// Build metadata reported by `bartle version`.
    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Info {
        pub version: &'static str,
        pub commit: &'static str,
        pub date: &'static str,
        pub built_by: &'static str,
    }

    /// Collect the build metadata.
    pub fn info() -> Info {
        Info {
            version: VERSION,
            commit: GIT_SHA.unwrap_or("HEAD"),
            date: GIT_COMMIT_DATE.unwrap_or("unknown"),
            built_by: BUILT_BY,
        }
    }

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let info = info();
        format!(
            "bartle {} (commit {}, built {}, by {})",
            info.version,
            &info.commit[..7.min(info.commit.len())],
            info.date,
            info.built_by
        )
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from `.bartle.toml`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The main configuration structure for bartle.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct BartleConfig {
    /// Commit message style.
    pub style: Style,

    /// Rule configuration.
    pub rules: RulesConfig,

    /// Hook configuration.
    pub hook: HookConfig,
}

impl BartleConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Commit message style, resolved from the `style` key.
///
/// Names are matched case-insensitively. Only `jira` selects the
/// issue-tracker rules; every other name validates as conventional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Style {
    /// `type(scope)!: subject`.
    #[default]
    Conventional,
    /// `ABC-123: subject`.
    Jira,
    /// User-tuned rules on top of the conventional grammar.
    Custom,
    /// A name bartle does not know. Kept verbatim and validated as conventional.
    Unrecognized(String),
}

impl Style {
    /// Resolve a style name.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "" | "conventional" => Style::Conventional,
            "jira" => Style::Jira,
            "custom" => Style::Custom,
            _ => Style::Unrecognized(name.to_string()),
        }
    }

    /// The configured name of this style.
    pub fn as_str(&self) -> &str {
        match self {
            Style::Conventional => "conventional",
            Style::Jira => "jira",
            Style::Custom => "custom",
            Style::Unrecognized(name) => name,
        }
    }
}

impl From<String> for Style {
    fn from(name: String) -> Self {
        Style::from_name(&name)
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.as_str().to_string()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Whether a `(scope)` is required.
    pub scope_required: bool,

    /// Maximum length of the first line in characters. Zero or negative
    /// disables the check.
    pub max_line_length: i64,

    /// Whether the subject must not start with an uppercase letter.
    pub lowercase_start: bool,

    /// Allowed commit types, in display order.
    pub types: Vec<String>,
}

impl RulesConfig {
    /// The effective line limit, if any.
    pub fn line_limit(&self) -> Option<usize> {
        usize::try_from(self.max_line_length)
            .ok()
            .filter(|limit| *limit > 0)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            scope_required: true,
            max_line_length: 72,
            lowercase_start: false,
            types: vec![
                "feat".to_string(),
                "fix".to_string(),
                "docs".to_string(),
                "refactor".to_string(),
                "test".to_string(),
                "chore".to_string(),
            ],
        }
    }
}

/// Hook configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HookConfig {
    /// Whether a failed lint exits non-zero (and so blocks the commit).
    pub block_on_fail: bool,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            block_on_fail: true,
        }
    }
}

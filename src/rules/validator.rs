// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation findings and result types.

use console::style;
use serde::Serialize;
use std::fmt;

/// Marker placed in front of every rendered diagnostic.
pub const DIAGNOSTIC_MARKER: &str = " - ";

/// Example header used in conventional-style hints.
fn conventional_example(scope_required: bool) -> &'static str {
    if scope_required {
        "type(scope): subject"
    } else {
        "type: subject"
    }
}

/// A single rule violation.
///
/// Findings stay typed inside the engine; their text is produced only when a
/// [`ValidationResult`] is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Nothing on the first line.
    EmptyMessage,
    /// No `:` between header and subject. `example` is the expected shape.
    MissingSeparator { example: &'static str },
    /// Nothing after the `:`.
    EmptySubject,
    /// A `(` with no closing `)`.
    UnclosedScope,
    /// Scope is required but the line has no `(` at all.
    MissingScope,
    /// Parse failed for a reason none of the specific findings explain.
    NotConventional { scope_required: bool },
    /// Type contains uppercase letters.
    TypeNotLowercase { commit_type: String },
    /// Type is not in the configured list.
    TypeNotAllowed {
        commit_type: String,
        allowed: Vec<String>,
    },
    /// Scope is required but absent or empty.
    ScopeRequired,
    /// First line exceeds the configured limit.
    LineTooLong { length: usize, max: usize },
    /// Subject starts with an uppercase letter.
    SubjectNotLowercase,
    /// Prefix before `:` is not a ticket key.
    MalformedTicket { prefix: String },
}

impl Finding {
    /// Stable code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Finding::EmptyMessage => "empty-message",
            Finding::MissingSeparator { .. } => "missing-separator",
            Finding::EmptySubject => "empty-subject",
            Finding::UnclosedScope => "unclosed-scope",
            Finding::MissingScope => "missing-scope",
            Finding::NotConventional { .. } => "not-conventional",
            Finding::TypeNotLowercase { .. } => "type-case",
            Finding::TypeNotAllowed { .. } => "type-not-allowed",
            Finding::ScopeRequired => "scope-required",
            Finding::LineTooLong { .. } => "line-max-length",
            Finding::SubjectNotLowercase => "subject-case",
            Finding::MalformedTicket { .. } => "ticket-format",
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::EmptyMessage => write!(f, "empty commit message"),
            Finding::MissingSeparator { example } => {
                write!(f, "missing ':' separator (e.g., {})", example)
            }
            Finding::EmptySubject => write!(f, "empty subject after ':'"),
            Finding::UnclosedScope => write!(
                f,
                "unclosed scope '(' (expected ')', e.g., {})",
                conventional_example(true)
            ),
            Finding::MissingScope => write!(
                f,
                "missing scope (e.g., {})",
                conventional_example(true)
            ),
            Finding::NotConventional { scope_required } => write!(
                f,
                "not conventional format (e.g., {})",
                conventional_example(*scope_required)
            ),
            Finding::TypeNotLowercase { commit_type } => {
                write!(f, "type must be lowercase (got {:?})", commit_type)
            }
            Finding::TypeNotAllowed {
                commit_type,
                allowed,
            } => write!(
                f,
                "type {:?} not allowed (choose one of: {})",
                commit_type,
                allowed.join(", ")
            ),
            Finding::ScopeRequired => write!(
                f,
                "scope required (e.g., {})",
                conventional_example(true)
            ),
            Finding::LineTooLong { length, max } => {
                write!(f, "first line too long ({} > {})", length, max)
            }
            Finding::SubjectNotLowercase => write!(f, "subject should start lowercase"),
            Finding::MalformedTicket { prefix } => write!(
                f,
                "prefix {:?} doesn't look like a ticket (e.g., ABC-123)",
                prefix
            ),
        }
    }
}

/// Ordered accumulator of findings for one validation pass.
#[derive(Debug, Default)]
pub struct Diagnostics {
    findings: Vec<Finding>,
}

impl Diagnostics {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding.
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Record a finding when `violated` holds.
    pub fn push_if(&mut self, violated: bool, finding: impl FnOnce() -> Finding) {
        if violated {
            self.findings.push(finding());
        }
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Finalize into a result. This is the only way to build one, so
    /// `valid` always agrees with the error list.
    pub fn finish(self) -> ValidationResult {
        let errors = self
            .findings
            .iter()
            .map(|finding| format!("{}{}", DIAGNOSTIC_MARKER, finding))
            .collect::<Vec<_>>();

        ValidationResult {
            valid: errors.is_empty(),
            errors,
            findings: self.findings,
        }
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<String>,
    #[serde(skip)]
    findings: Vec<Finding>,
}

impl ValidationResult {
    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Rendered diagnostics, one display line each, in rule order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Typed findings behind [`errors`](Self::errors).
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Whether a finding with the given code was produced.
    pub fn has(&self, code: &str) -> bool {
        self.findings.iter().any(|f| f.code() == code)
    }

    /// Format the result for terminal output.
    pub fn format_text(&self) -> String {
        if self.is_valid() {
            return format!("{}", style("✅ Commit message is valid!").green());
        }

        let mut output = format!("{}", style("❌ Invalid commit message:").red().bold());
        for error in &self.errors {
            output.push('\n');
            output.push_str(error);
        }
        output
    }

    /// Format the result as JSON.
    pub fn format_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            "Valid".to_string()
        } else {
            format!("Invalid ({} errors)", self.errors.len())
        }
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional commit rules.

use crate::config::RulesConfig;

use super::parser::{parse, ParseError, ParsedSubject};
use super::validator::{Diagnostics, Finding, ValidationResult};

/// Validate a normalized first line as a conventional header.
pub fn validate(line: &str, rules: &RulesConfig) -> ValidationResult {
    let mut diagnostics = Diagnostics::new();

    match parse(line) {
        Ok(parsed) => check_parsed(&parsed, line, rules, &mut diagnostics),
        Err(reason) => diagnose_parse_failure(reason, line, rules, &mut diagnostics),
    }

    diagnostics.finish()
}

/// Explain a failed parse as specifically as possible.
///
/// Every applicable finding is reported, in a fixed order. The generic
/// message is used only when nothing more specific applies.
fn diagnose_parse_failure(
    reason: ParseError,
    line: &str,
    rules: &RulesConfig,
    diagnostics: &mut Diagnostics,
) {
    tracing::debug!("Conventional parse failed: {}", reason);

    let has_open = line.contains('(');
    let has_close = line.contains(')');

    match line.split_once(':') {
        None => diagnostics.push(Finding::MissingSeparator {
            example: if rules.scope_required {
                "type(scope): subject"
            } else {
                "type: subject"
            },
        }),
        Some((_, after)) => diagnostics.push_if(
            reason == ParseError::EmptySubject || after.trim().is_empty(),
            || Finding::EmptySubject,
        ),
    }

    diagnostics.push_if(
        reason == ParseError::UnclosedScope || (has_open && !has_close),
        || Finding::UnclosedScope,
    );

    diagnostics.push_if(rules.scope_required && !has_open, || Finding::MissingScope);

    if diagnostics.is_empty() {
        diagnostics.push(Finding::NotConventional {
            scope_required: rules.scope_required,
        });
    }
}

/// Semantic rules on a parsed header. Each rule reports independently.
fn check_parsed(
    parsed: &ParsedSubject<'_>,
    line: &str,
    rules: &RulesConfig,
    diagnostics: &mut Diagnostics,
) {
    let commit_type = parsed.commit_type;

    diagnostics.push_if(commit_type != commit_type.to_lowercase(), || {
        Finding::TypeNotLowercase {
            commit_type: commit_type.to_string(),
        }
    });

    diagnostics.push_if(!rules.types.iter().any(|t| t == commit_type), || {
        Finding::TypeNotAllowed {
            commit_type: commit_type.to_string(),
            allowed: rules.types.clone(),
        }
    });

    diagnostics.push_if(rules.scope_required && !parsed.has_scope(), || {
        Finding::ScopeRequired
    });

    check_line_length(line, rules, diagnostics);

    diagnostics.push_if(
        rules.lowercase_start
            && parsed
                .subject
                .chars()
                .next()
                .is_some_and(char::is_uppercase),
        || Finding::SubjectNotLowercase,
    );
}

/// Shared by every style: the first line must fit the configured limit.
pub(crate) fn check_line_length(line: &str, rules: &RulesConfig, diagnostics: &mut Diagnostics) {
    if let Some(max) = rules.line_limit() {
        let length = line.chars().count();
        diagnostics.push_if(length > max, || Finding::LineTooLong { length, max });
    }
}

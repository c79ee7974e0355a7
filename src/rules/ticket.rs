// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Issue-tracker (`ABC-123: subject`) rules.

use crate::config::RulesConfig;
use lazy_static::lazy_static;
use regex::Regex;

use super::conventional::check_line_length;
use super::validator::{Diagnostics, Finding, ValidationResult};

lazy_static! {
    /// Uppercase project key, a dash, and an issue number.
    static ref TICKET_REGEX: Regex = Regex::new(r"^[A-Z]+-[0-9]+$").unwrap();
}

/// Shortest prefix accepted as a ticket key.
const MIN_TICKET_LEN: usize = 5;

/// Validate a normalized first line as `TICKET: subject`.
pub fn validate(line: &str, rules: &RulesConfig) -> ValidationResult {
    let mut diagnostics = Diagnostics::new();

    let (prefix, subject) = match line.split_once(':') {
        Some((prefix, subject)) if !prefix.is_empty() => (prefix.trim(), subject.trim()),
        _ => {
            diagnostics.push(Finding::MissingSeparator {
                example: "ABC-123: summary",
            });
            return diagnostics.finish();
        }
    };

    diagnostics.push_if(subject.is_empty(), || Finding::EmptySubject);

    diagnostics.push_if(!looks_like_ticket(prefix), || Finding::MalformedTicket {
        prefix: prefix.to_string(),
    });

    check_line_length(line, rules, &mut diagnostics);

    diagnostics.finish()
}

/// Whether `prefix` is a ticket key such as `ABC-123`.
pub fn looks_like_ticket(prefix: &str) -> bool {
    prefix.len() >= MIN_TICKET_LEN && TICKET_REGEX.is_match(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RulesConfig {
        RulesConfig::default()
    }

    #[test]
    fn test_valid_ticket() {
        assert!(validate("ABC-123: fix thing", &rules()).is_valid());
        assert!(validate("A-123: fix thing", &rules()).is_valid());
    }

    #[test]
    fn test_missing_separator() {
        let result = validate("abc123 fix thing", &rules());
        assert_eq!(
            result.errors(),
            [" - missing ':' separator (e.g., ABC-123: summary)"]
        );
    }

    #[test]
    fn test_separator_at_start() {
        let result = validate(": fix thing", &rules());
        assert_eq!(
            result.findings(),
            [Finding::MissingSeparator {
                example: "ABC-123: summary"
            }]
        );
    }

    #[test]
    fn test_findings_accumulate() {
        let short = RulesConfig {
            max_line_length: 5,
            ..rules()
        };
        let result = validate("abc-1:", &short);
        assert_eq!(
            result.findings(),
            [
                Finding::EmptySubject,
                Finding::MalformedTicket {
                    prefix: "abc-1".to_string()
                },
                Finding::LineTooLong { length: 6, max: 5 },
            ]
        );
        assert_eq!(
            result.errors()[1],
            " - prefix \"abc-1\" doesn't look like a ticket (e.g., ABC-123)"
        );
    }

    #[test]
    fn test_prefix_is_trimmed() {
        assert!(validate("ABC-123 : fix thing", &rules()).is_valid());
    }

    #[test]
    fn test_looks_like_ticket() {
        assert!(looks_like_ticket("ABC-123"));
        assert!(looks_like_ticket("AB-12"));
        assert!(!looks_like_ticket("AB-1"));
        assert!(!looks_like_ticket("abc-123"));
        assert!(!looks_like_ticket("ABC123"));
        assert!(!looks_like_ticket("ABC-12a"));
        assert!(!looks_like_ticket("ABC-1-2"));
        assert!(!looks_like_ticket("-12345"));
        assert!(!looks_like_ticket("ABCDE-"));
    }

    #[test]
    fn test_conventional_header_is_not_a_ticket() {
        let result = validate("feat(ui): add dropdown", &rules());
        assert_eq!(
            result.findings(),
            [Finding::MalformedTicket {
                prefix: "feat(ui)".to_string()
            }]
        );
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::config::{BartleConfig, RulesConfig, Style};

use super::normalize::first_line;
use super::validator::{Diagnostics, Finding, ValidationResult};
use super::{conventional, ticket};

/// Rule engine for validating commit messages.
///
/// Holds no state between calls; validating the same message twice gives
/// identical results.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'a> {
    style: &'a Style,
    rules: &'a RulesConfig,
}

impl<'a> RuleEngine<'a> {
    /// Create a new rule engine over the given configuration.
    pub fn new(config: &'a BartleConfig) -> Self {
        Self::with_rules(&config.style, &config.rules)
    }

    /// Create a rule engine from a style and rule set.
    pub fn with_rules(style: &'a Style, rules: &'a RulesConfig) -> Self {
        Self { style, rules }
    }

    /// Validate a raw commit message. Only its first line is checked.
    pub fn validate(&self, message: &str) -> ValidationResult {
        let Some(line) = first_line(message) else {
            let mut diagnostics = Diagnostics::new();
            diagnostics.push(Finding::EmptyMessage);
            return diagnostics.finish();
        };

        tracing::debug!("Validating {:?} as {} style", line, self.style);

        match self.style {
            Style::Jira => ticket::validate(&line, self.rules),
            Style::Conventional | Style::Custom | Style::Unrecognized(_) => {
                conventional::validate(&line, self.rules)
            }
        }
    }
}

/// Validate a raw commit message against a configuration.
pub fn validate_message(message: &str, config: &BartleConfig) -> ValidationResult {
    RuleEngine::new(config).validate(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(style: Style) -> BartleConfig {
        BartleConfig {
            style,
            ..BartleConfig::default()
        }
    }

    #[test]
    fn test_default_config_accepts_conventional() {
        let result = validate_message("feat(ui): add dropdown", &BartleConfig::default());
        assert!(result.is_valid());
    }

    #[test]
    fn test_only_first_line_is_checked() {
        let message = "feat(ui): add dropdown\r\n\nThis Body: is ignored entirely\n";
        assert!(validate_message(message, &BartleConfig::default()).is_valid());
    }

    #[test]
    fn test_empty_message_single_diagnostic() {
        for message in ["", "   ", "\n\nfeat(ui): later line", "\t\r\n"] {
            for style in [Style::Conventional, Style::Jira] {
                let result = validate_message(message, &config(style));
                assert!(!result.is_valid());
                assert_eq!(result.errors(), [" - empty commit message"]);
            }
        }
    }

    #[test]
    fn test_jira_dispatch() {
        let jira = config(Style::Jira);
        assert!(validate_message("ABC-123: fix thing", &jira).is_valid());

        let result = validate_message("abc123 fix thing", &jira);
        assert!(result.has("missing-separator"));
    }

    #[test]
    fn test_other_styles_fall_back_to_conventional() {
        for style in [
            Style::Conventional,
            Style::Custom,
            Style::Unrecognized("angular".to_string()),
            Style::from_name(""),
        ] {
            let config = config(style);
            assert!(validate_message("feat(ui): add dropdown", &config).is_valid());
            assert!(!validate_message("ABC-123: fix thing", &config).is_valid());
        }
    }

    #[test]
    fn test_style_name_case_insensitive() {
        let config = config(Style::from_name("Jira"));
        assert!(validate_message("ABC-123: fix thing", &config).is_valid());
    }

    #[test]
    fn test_uppercase_type_flagged_regardless_of_lowercase_start() {
        for lowercase_start in [false, true] {
            let mut config = BartleConfig::default();
            config.rules.lowercase_start = lowercase_start;
            let result = validate_message("Feat(ui): Add dropdown", &config);
            assert!(result.has("type-case"));
        }
    }

    #[test]
    fn test_unclosed_scope_always_reported() {
        let config = BartleConfig::default();
        for message in [
            "feat(ui: add dropdown",
            "feat(ui add dropdown",
            "feat(ui:",
            "Feat(ui!: Add",
        ] {
            let result = validate_message(message, &config);
            assert!(result.has("unclosed-scope"), "{message}");
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn validation_is_idempotent(message in "\\PC{0,80}", jira in any::<bool>()) {
                let config = config(if jira { Style::Jira } else { Style::Conventional });
                let first = validate_message(&message, &config);
                let second = validate_message(&message, &config);
                prop_assert_eq!(first, second);
            }

            #[test]
            fn valid_iff_no_errors(message in "\\PC{0,80}") {
                let result = validate_message(&message, &BartleConfig::default());
                prop_assert_eq!(result.is_valid(), result.errors().is_empty());
            }

            #[test]
            fn well_formed_headers_pass(
                ty in proptest::sample::select(vec!["feat", "fix", "docs", "refactor", "test", "chore"]),
                scope in "[a-z]{1,10}",
                subject in "[a-z][a-z ]{0,40}",
            ) {
                let message = format!("{ty}({scope}): {subject}");
                let result = validate_message(&message, &BartleConfig::default());
                prop_assert!(result.is_valid(), "{:?}", result.errors());
            }
        }
    }
}

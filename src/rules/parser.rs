// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional commit header parser.
//!
//! Grammar: `type ['(' scope ')'] ['!'] ':' WS* subject`, scanned left to
//! right with no backtracking. A parse either yields a complete
//! [`ParsedSubject`] or a [`ParseError`] naming where it stopped.

use thiserror::Error;

/// A successfully parsed conventional header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSubject<'a> {
    /// Commit type, as written.
    pub commit_type: &'a str,
    /// Text between the parentheses, if any were present. May be empty.
    pub scope: Option<&'a str>,
    /// Everything after the separator and following whitespace.
    pub subject: &'a str,
    /// Whether `!` preceded the separator.
    pub breaking: bool,
}

impl ParsedSubject<'_> {
    /// Whether a non-empty scope was given.
    pub fn has_scope(&self) -> bool {
        self.scope.is_some_and(|scope| !scope.is_empty())
    }
}

/// Why a header failed to parse.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("header does not start with a type")]
    MissingType,

    #[error("scope '(' is never closed")]
    UnclosedScope,

    #[error("missing ':' after the type")]
    MissingSeparator,

    #[error("nothing follows the ':'")]
    EmptySubject,
}

/// Char cursor over a single line.
struct Cursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.line[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds and return the consumed slice.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        &self.line[start..self.pos]
    }

    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }
}

/// Parse a conventional header. Surrounding whitespace is ignored.
pub fn parse(line: &str) -> Result<ParsedSubject<'_>, ParseError> {
    let mut cursor = Cursor::new(line.trim());

    let commit_type = cursor.take_while(|c| c.is_ascii_alphabetic());
    if commit_type.is_empty() {
        return Err(ParseError::MissingType);
    }

    let scope = if cursor.eat('(') {
        let scope = cursor.take_while(|c| c != ')');
        if !cursor.eat(')') {
            return Err(ParseError::UnclosedScope);
        }
        Some(scope)
    } else {
        None
    };

    let breaking = cursor.eat('!');

    if !cursor.eat(':') {
        return Err(ParseError::MissingSeparator);
    }

    cursor.take_while(char::is_whitespace);

    let subject = cursor.rest();
    if subject.is_empty() {
        return Err(ParseError::EmptySubject);
    }

    Ok(ParsedSubject {
        commit_type,
        scope,
        subject,
        breaking,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_header() {
        let parsed = parse("feat(ui)!: add dropdown").unwrap();
        assert_eq!(parsed.commit_type, "feat");
        assert_eq!(parsed.scope, Some("ui"));
        assert_eq!(parsed.subject, "add dropdown");
        assert!(parsed.breaking);
        assert!(parsed.has_scope());
    }

    #[test]
    fn test_parse_without_scope() {
        let parsed = parse("fix: handle nil pointer").unwrap();
        assert_eq!(parsed.commit_type, "fix");
        assert_eq!(parsed.scope, None);
        assert!(!parsed.breaking);
        assert!(!parsed.has_scope());
    }

    #[test]
    fn test_parse_empty_scope() {
        let parsed = parse("feat(): thing").unwrap();
        assert_eq!(parsed.scope, Some(""));
        assert!(!parsed.has_scope());
    }

    #[test]
    fn test_parse_keeps_type_case() {
        let parsed = parse("Feat(ui): Add dropdown").unwrap();
        assert_eq!(parsed.commit_type, "Feat");
        assert_eq!(parsed.subject, "Add dropdown");
    }

    #[test]
    fn test_parse_skips_unicode_whitespace() {
        let parsed = parse("docs:\u{3000}\u{a0}update readme").unwrap();
        assert_eq!(parsed.subject, "update readme");
    }

    #[test]
    fn test_parse_no_space_after_colon() {
        let parsed = parse("chore:bump deps").unwrap();
        assert_eq!(parsed.subject, "bump deps");
    }

    #[test]
    fn test_parse_scope_may_contain_anything_but_close() {
        let parsed = parse("feat(api/v2: x): y").unwrap();
        assert_eq!(parsed.scope, Some("api/v2: x"));
        assert_eq!(parsed.subject, "y");
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(parse(""), Err(ParseError::MissingType));
        assert_eq!(parse("123: numbers"), Err(ParseError::MissingType));
        assert_eq!(parse("(ui): no type"), Err(ParseError::MissingType));
        assert_eq!(parse("feat(ui: open"), Err(ParseError::UnclosedScope));
        assert_eq!(parse("feat add thing"), Err(ParseError::MissingSeparator));
        assert_eq!(parse("feat-x: thing"), Err(ParseError::MissingSeparator));
        assert_eq!(parse("feat(ui)!"), Err(ParseError::MissingSeparator));
        assert_eq!(parse("feat(ui):"), Err(ParseError::EmptySubject));
        assert_eq!(parse("feat:   "), Err(ParseError::EmptySubject));
    }

    #[test]
    fn test_parse_non_ascii_type_rejected() {
        assert_eq!(parse("fé: thing"), Err(ParseError::MissingSeparator));
        assert_eq!(parse("été: thing"), Err(ParseError::MissingType));
    }
}

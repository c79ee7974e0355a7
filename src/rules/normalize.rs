// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! First-line extraction.

/// Return the first line of `message` with carriage returns removed and
/// surrounding whitespace trimmed, or `None` if nothing is left.
pub fn first_line(message: &str) -> Option<String> {
    let line = message.split('\n').next().unwrap_or_default();
    let line = line.replace('\r', "");
    let line = line.trim();

    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_only() {
        assert_eq!(
            first_line("feat(ui): add dropdown\n\nbody text\n").as_deref(),
            Some("feat(ui): add dropdown")
        );
    }

    #[test]
    fn test_crlf_and_padding() {
        assert_eq!(
            first_line("  fix(api): handle nil\r\nmore").as_deref(),
            Some("fix(api): handle nil")
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(first_line(""), None);
        assert_eq!(first_line("   \t "), None);
        assert_eq!(first_line("\r\nfeat: second line"), None);
    }
}

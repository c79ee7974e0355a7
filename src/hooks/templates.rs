// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

/// Marker identifying hook files written by bartle.
pub const HOOK_MARKER: &str = "# BARTLE-HOOK v1";

/// Git hooks bartle knows how to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    /// Lints the message file git passes as `$1`.
    CommitMsg,
}

impl HookTemplate {
    /// File name under the hooks directory.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => "commit-msg",
        }
    }

    /// Generate the hook script. `command` is how the hook invokes bartle,
    /// either `bartle` (resolved from PATH) or an absolute path.
    pub fn generate(&self, command: &str) -> String {
        match self {
            HookTemplate::CommitMsg => format!(
                r#"#!/bin/sh
set -e

{marker}
# Generated by bartle {version}

# Lint the commit message file git passes in; a failure blocks the commit.
exec {command} lint "$1"
"#,
                marker = HOOK_MARKER,
                version = crate::version::VERSION,
                command = shell_quote(command),
            ),
        }
    }
}

/// Quote `s` for a POSIX shell when it contains anything beyond a plain word.
fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-'));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_msg_script() {
        let script = HookTemplate::CommitMsg.generate("bartle");
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains(HOOK_MARKER));
        assert!(script.contains("exec bartle lint \"$1\""));
    }

    #[test]
    fn test_absolute_path_with_spaces_is_quoted() {
        let script = HookTemplate::CommitMsg.generate("/opt/my tools/bartle");
        assert!(script.contains("exec '/opt/my tools/bartle' lint \"$1\""));
    }
}

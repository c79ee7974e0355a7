// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reading the message to lint.

use crate::error::{BartleError, LintError, Result};
use std::io::{IsTerminal, Read};
use std::path::Path;

use super::args::LintArgs;

/// Resolve the message from, in order: `-m`, the message file, `--rev`,
/// then piped stdin.
pub fn read_message(args: &LintArgs) -> Result<String> {
    if let Some(message) = args.message.as_deref().map(str::trim) {
        if !message.is_empty() {
            tracing::debug!("Linting message from --message");
            return Ok(normalize(message));
        }
    }

    if let Some(path) = &args.file {
        tracing::debug!("Linting message file {:?}", path);
        let message = read_file(path)?;
        if !message.is_empty() {
            return Ok(message);
        }
    }

    if let Some(reference) = &args.rev {
        tracing::debug!("Linting message of commit {}", reference);
        let message = crate::git::get_commit_message(reference)?;
        return Ok(normalize(&message));
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        stdin.lock().read_to_string(&mut buffer).map_err(|e| {
            BartleError::Lint(LintError::ReadFailed {
                source_name: "stdin".to_string(),
                message: e.to_string(),
            })
        })?;
        let message = strip_git_comments(&normalize(&buffer));
        if !message.is_empty() {
            tracing::debug!("Linting message from stdin");
            return Ok(message);
        }
    }

    Err(BartleError::Lint(LintError::NoMessage))
}

fn read_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        BartleError::Lint(LintError::ReadFailed {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })
    })?;
    Ok(strip_git_comments(&normalize(&content)))
}

fn normalize(message: &str) -> String {
    message.replace('\r', "").trim().to_string()
}

/// Drop the `#` comment lines git writes into COMMIT_EDITMSG.
pub fn strip_git_comments(message: &str) -> String {
    message
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{BartleError, ConfigError, Result};
use crate::git::Repository;
use std::path::{Path, PathBuf};

use super::schema::BartleConfig;

/// Name of the repository-level configuration file.
pub const CONFIG_FILE: &str = ".bartle.toml";

/// Find the configuration file for the current directory.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
///
/// The repository root wins; the user-level file under the XDG config
/// directory is the fallback.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    match Repository::open(start_dir) {
        Ok(repo) => {
            let config_path = repo.workdir().join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }
        }
        Err(e) => tracing::debug!("No repository config: {}", e),
    }

    let user_config = dirs::config_dir()?.join("bartle").join("config.toml");
    if user_config.exists() {
        return Some(user_config);
    }

    None
}

/// Path where `bartle init` writes the repository configuration.
pub fn repo_config_path() -> Result<PathBuf> {
    let repo = Repository::open_current()?;
    Ok(repo.workdir().join(CONFIG_FILE))
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<BartleConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(BartleConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<BartleConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(BartleError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        BartleError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// Keys missing from the file keep their defaults; unknown keys are rejected.
pub fn parse_config(content: &str) -> Result<BartleConfig> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let content = content.replace("\r\n", "\n");

    toml::from_str(&content).map_err(|e| {
        BartleError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Style;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, BartleConfig::default());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
style = "JIRA"

[rules]
max_line_length = 50
scope_required = false
types = ["feat", "fix"]
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.style, Style::Jira);
        assert_eq!(config.rules.max_line_length, 50);
        assert!(!config.rules.scope_required);
        assert_eq!(config.rules.types, vec!["feat", "fix"]);
        // untouched keys keep their defaults
        assert!(!config.rules.lowercase_start);
        assert!(config.hook.block_on_fail);
    }

    #[test]
    fn test_parse_unknown_style_falls_back() {
        let config = parse_config("style = \"angular\"").unwrap();
        assert_eq!(config.style, Style::Unrecognized("angular".to_string()));
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = parse_config("[rules]\nmax_len = 50\n").unwrap_err();
        assert!(err.to_string().contains("max_len"));
    }

    #[test]
    fn test_parse_tolerates_bom_and_crlf() {
        let toml = "\u{feff}style = \"jira\"\r\n[hook]\r\nblock_on_fail = false\r\n";
        let config = parse_config(toml).unwrap();
        assert_eq!(config.style, Style::Jira);
        assert!(!config.hook.block_on_fail);
    }

    #[test]
    fn test_negative_line_length_parses() {
        let config = parse_config("[rules]\nmax_line_length = -1\n").unwrap();
        assert_eq!(config.rules.line_limit(), None);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("nope.toml"));
        assert!(matches!(
            result,
            Err(BartleError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_find_config_in_repo_root() {
        let dir = TempDir::new().unwrap();
        git2::Repository::init(dir.path()).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "style = \"jira\"\n").unwrap();
        let nested = dir.path().join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found.file_name().unwrap(), CONFIG_FILE);

        let config = load_config_from(&found).unwrap();
        assert_eq!(config.style, Style::Jira);
    }
}

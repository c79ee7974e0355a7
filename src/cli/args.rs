// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use crate::config::Style;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bartle - Commit Message Linter
///
/// Keeps git commit messages to a standard and explains what is wrong when
/// they are not.
#[derive(Parser, Debug)]
#[command(name = "bartle")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Your commit companion.", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file (default: .bartle.toml at the repository root)
    #[arg(short, long, global = true, env = "BARTLE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint a commit message against the configured rules
    Lint(LintArgs),

    /// Write a .bartle.toml with defaults to the repository root
    Init(InitArgs),

    /// Install a git commit-msg hook that runs bartle lint
    InstallHook(InstallHookArgs),

    /// Remove bartle's git commit-msg hook
    UninstallHook(UninstallHookArgs),

    /// Print version information
    Version(VersionArgs),
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Default, Clone)]
#[command(after_help = "Examples:\n  bartle lint -m \"feat(ui): add dropdown\"\n  bartle lint .git/COMMIT_EDITMSG\n  echo \"fix(api): handle nil pointer\" | bartle lint")]
pub struct LintArgs {
    /// Path to a message file (e.g. .git/COMMIT_EDITMSG)
    #[arg(value_name = "MESSAGE_FILE")]
    pub file: Option<PathBuf>,

    /// Commit message text to lint
    #[arg(short, long)]
    pub message: Option<String>,

    /// Lint the message of an existing commit
    #[arg(long, value_name = "REF")]
    pub rev: Option<String>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Commit message style
    #[arg(short, long, value_enum, default_value_t = InitStyle::Conventional)]
    pub style: InitStyle,

    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Styles `bartle init` can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InitStyle {
    /// type(scope)!: subject
    Conventional,
    /// ABC-123: subject
    Jira,
    /// Conventional grammar with rules to tune
    Custom,
}

impl From<InitStyle> for Style {
    fn from(style: InitStyle) -> Self {
        match style {
            InitStyle::Conventional => Style::Conventional,
            InitStyle::Jira => Style::Jira,
            InitStyle::Custom => Style::Custom,
        }
    }
}

/// Arguments for the install-hook command.
#[derive(Parser, Debug, Clone)]
pub struct InstallHookArgs {
    /// Overwrite an existing hook
    #[arg(short, long)]
    pub force: bool,

    /// Embed the absolute path to the bartle binary in the hook
    #[arg(short, long)]
    pub absolute: bool,
}

/// Arguments for the uninstall-hook command.
#[derive(Parser, Debug, Clone)]
pub struct UninstallHookArgs {
    /// Remove the hook even if bartle did not install it (a backup is kept)
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the version command.
#[derive(Parser, Debug, Clone)]
pub struct VersionArgs {
    /// Print version information as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Print only the version number
    #[arg(short, long)]
    pub short: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lint_message() {
        let args = Cli::parse_from(["bartle", "lint", "-m", "feat(ui): add dropdown"]);
        if let Commands::Lint(lint) = args.command {
            assert_eq!(lint.message.as_deref(), Some("feat(ui): add dropdown"));
            assert!(lint.file.is_none());
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn test_parse_lint_file() {
        let args = Cli::parse_from(["bartle", "lint", ".git/COMMIT_EDITMSG"]);
        if let Commands::Lint(lint) = args.command {
            assert_eq!(lint.file, Some(PathBuf::from(".git/COMMIT_EDITMSG")));
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn test_parse_init_style() {
        let args = Cli::parse_from(["bartle", "init", "-s", "jira", "-f"]);
        if let Commands::Init(init) = args.command {
            assert_eq!(init.style, InitStyle::Jira);
            assert!(init.force);
            assert_eq!(Style::from(init.style), Style::Jira);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_init_rejects_unknown_style() {
        assert!(Cli::try_parse_from(["bartle", "init", "--style", "gitmoji"]).is_err());
    }

    #[test]
    fn test_parse_hooks() {
        let args = Cli::parse_from(["bartle", "install-hook", "--absolute"]);
        assert!(matches!(
            args.command,
            Commands::InstallHook(InstallHookArgs {
                absolute: true,
                force: false
            })
        ));

        let args = Cli::parse_from(["bartle", "uninstall-hook", "-f"]);
        assert!(matches!(
            args.command,
            Commands::UninstallHook(UninstallHookArgs { force: true })
        ));
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["bartle", "version", "--json", "--format", "json", "-d"]);
        assert!(args.debug);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(matches!(
            args.command,
            Commands::Version(VersionArgs {
                json: true,
                short: false
            })
        ));
    }
}

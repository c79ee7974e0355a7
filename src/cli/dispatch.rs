// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::BartleConfig;
use crate::error::{BartleError, ConfigError, LintError, Result, ResultExt};

use super::args::{
    Cli, Commands, InitArgs, InstallHookArgs, LintArgs, OutputFormat, UninstallHookArgs,
    VersionArgs,
};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Lint(args) => run_lint(&cli, args),
        Commands::Init(args) => run_init(args),
        Commands::InstallHook(args) => run_install_hook(args),
        Commands::UninstallHook(args) => run_uninstall_hook(args),
        Commands::Version(args) => run_version(args),
    }
}

/// Load configuration from `--config` or the default locations.
fn load_config(cli: &Cli) -> Result<BartleConfig> {
    if let Some(config_path) = &cli.config {
        BartleConfig::load_from(config_path)
    } else {
        BartleConfig::load()
    }
}

/// Run the lint command.
fn run_lint(cli: &Cli, args: &LintArgs) -> Result<()> {
    use crate::rules::RuleEngine;

    tracing::debug!("Running lint command with args: {:?}", args);

    let message = super::input::read_message(args)?;
    let config = load_config(cli)?;

    let result = RuleEngine::new(&config).validate(&message);

    match cli.format {
        Some(OutputFormat::Json) => println!("{}", result.format_json()),
        _ => println!("{}", result.format_text()),
    }

    if result.is_valid() {
        return Ok(());
    }

    if !config.hook.block_on_fail {
        tracing::warn!("Lint failed but hook.block_on_fail is disabled; not blocking");
        return Ok(());
    }

    Err(BartleError::Lint(LintError::Failed {
        count: result.errors().len(),
    }))
}

/// Run the init command.
fn run_init(args: &InitArgs) -> Result<()> {
    use crate::config::{render_init_config, repo_config_path, Style};

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = repo_config_path()?;

    if config_path.exists() && !args.force {
        return Err(BartleError::Config(ConfigError::AlreadyExists { path: config_path }));
    }

    let content = render_init_config(&Style::from(args.style))?;

    std::fs::write(&config_path, content).context("Failed to write configuration")?;

    println!("✅ Wrote {}", config_path.display());
    println!("Tip: run `bartle install-hook` to enforce commit checks locally.");

    Ok(())
}

/// Run the install-hook command.
fn run_install_hook(args: &InstallHookArgs) -> Result<()> {
    use crate::hooks::HookManager;

    tracing::debug!("Running install-hook command with args: {:?}", args);

    let manager = HookManager::new()?;

    let command = if args.absolute {
        let exe = std::env::current_exe().map_err(|e| BartleError::WithContext {
            context: "install-hook".to_string(),
            message: format!("Failed to resolve bartle path: {}", e),
        })?;
        exe.display().to_string()
    } else {
        "bartle".to_string()
    };

    let hook_path = manager.install(&command, args.force)?;

    println!("✅ Installed bartle commit-msg hook at {}", hook_path.display());
    println!("Commits will now be linted automatically.");

    Ok(())
}

/// Run the uninstall-hook command.
fn run_uninstall_hook(args: &UninstallHookArgs) -> Result<()> {
    use crate::hooks::{HookManager, UninstallOutcome};

    tracing::debug!("Running uninstall-hook command with args: {:?}", args);

    let manager = HookManager::new()?;

    match manager.uninstall(args.force)? {
        UninstallOutcome::NotInstalled => println!("ℹ️  No commit-msg hook to remove."),
        UninstallOutcome::Removed => println!("✅ Removed bartle commit-msg hook."),
        UninstallOutcome::BackedUp(backup) => {
            println!("✅ Removed hook. Backup saved at {}", backup.display())
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version(args: &VersionArgs) -> Result<()> {
    let info = crate::version::info();

    let output = match (args.json, args.short) {
        (true, true) => serde_json::json!({ "version": info.version }).to_string(),
        (true, false) => serde_json::to_string(&info).context("Failed to encode version")?,
        (false, true) => info.version.to_string(),
        (false, false) => crate::version::version_string(),
    };

    println!("{}", output);

    Ok(())
}

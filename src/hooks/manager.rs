// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and removing the commit-msg hook.

use crate::error::{BartleError, HookError, Result};
use crate::git::{self, Repository};
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{HookTemplate, HOOK_MARKER};

/// What `uninstall` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UninstallOutcome {
    /// There was no hook to remove.
    NotInstalled,
    /// The bartle hook was deleted.
    Removed,
    /// A foreign hook was moved aside to the given path.
    BackedUp(PathBuf),
}

/// Manager for git hooks.
#[derive(Debug)]
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Ok(Self::for_repo(&repo))
    }

    /// Create a hook manager for the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::open(path)?;
        Ok(Self::for_repo(&repo))
    }

    fn for_repo(repo: &Repository) -> Self {
        Self {
            hooks_dir: repo.hooks_dir(),
        }
    }

    /// Path of the commit-msg hook.
    pub fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(HookTemplate::CommitMsg.filename())
    }

    /// Whether a hook exists and whether bartle wrote it.
    pub fn check_existing(&self) -> Result<(bool, bool)> {
        let hook_path = self.hook_path();
        match fs::read_to_string(&hook_path) {
            Ok(content) => Ok((true, content.contains(HOOK_MARKER))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok((false, false)),
            Err(e) => Err(BartleError::Hook(HookError::InstallFailed {
                hook: hook_path.display().to_string(),
                message: format!("Failed to read existing hook: {}", e),
            })),
        }
    }

    /// Install the commit-msg hook invoking bartle as `command`.
    ///
    /// A hook bartle did not write is only replaced when `force` is set.
    pub fn install(&self, command: &str, force: bool) -> Result<PathBuf> {
        let template = HookTemplate::CommitMsg;
        let hook_path = self.hook_path();

        let (exists, ours) = self.check_existing()?;
        if exists && !ours && !force {
            return Err(BartleError::Hook(HookError::AlreadyExists { path: hook_path }));
        }

        let install_err = |message: String| {
            BartleError::Hook(HookError::InstallFailed {
                hook: template.filename().to_string(),
                message,
            })
        };

        fs::create_dir_all(&self.hooks_dir)
            .map_err(|e| install_err(format!("Failed to create hooks directory: {}", e)))?;

        // Write next to the target and rename so git never sees a partial script.
        let tmp_path = self
            .hooks_dir
            .join(format!("{}.tmp", template.filename()));
        fs::write(&tmp_path, template.generate(command))
            .map_err(|e| install_err(format!("Failed to write hook: {}", e)))?;

        make_executable(&tmp_path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            install_err(format!("Failed to set permissions: {}", e))
        })?;

        fs::rename(&tmp_path, &hook_path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            install_err(format!("Failed to activate hook: {}", e))
        })?;

        tracing::debug!("Installed commit-msg hook at {:?}", hook_path);
        Ok(hook_path)
    }

    /// Remove the commit-msg hook.
    ///
    /// A foreign hook is left alone unless `force` is set, in which case it is
    /// moved to `commit-msg.bak.<timestamp>`.
    pub fn uninstall(&self, force: bool) -> Result<UninstallOutcome> {
        let hook_path = self.hook_path();
        let hook = HookTemplate::CommitMsg.filename();

        let (exists, ours) = self.check_existing()?;
        if !exists {
            return Ok(UninstallOutcome::NotInstalled);
        }

        if ours {
            fs::remove_file(&hook_path).map_err(|e| {
                BartleError::Hook(HookError::RemoveFailed {
                    hook: hook.to_string(),
                    message: format!("Failed to remove hook: {}", e),
                })
            })?;
            tracing::debug!("Removed commit-msg hook at {:?}", hook_path);
            return Ok(UninstallOutcome::Removed);
        }

        if !force {
            return Err(BartleError::Hook(HookError::NotManaged { path: hook_path }));
        }

        let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
        let backup_path = self.hooks_dir.join(format!("{}.bak.{}", hook, timestamp));
        fs::rename(&hook_path, &backup_path).map_err(|e| {
            BartleError::Hook(HookError::RemoveFailed {
                hook: hook.to_string(),
                message: format!("Failed to back up existing hook: {}", e),
            })
        })?;

        tracing::debug!("Moved foreign commit-msg hook to {:?}", backup_path);
        Ok(UninstallOutcome::BackedUp(backup_path))
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Repository discovery and commit lookup for the config loader, the hook
//! manager, and `bartle lint --rev`.

mod repo;

pub use repo::{get_commit_message, open_repo, Repository};

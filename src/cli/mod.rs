// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for bartle.
//!
//! This module handles command-line argument parsing and command dispatch.

pub mod args;
mod dispatch;
mod input;

pub use args::{Cli, Commands};
pub use dispatch::run;
pub use input::strip_git_comments;

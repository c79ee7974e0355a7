// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for bartle.
//!
//! This module handles locating, parsing, and generating `.bartle.toml`.
//! Everything here runs before the rule engine; the engine only sees the
//! fully resolved [`BartleConfig`].

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, render_init_config};
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_config,
    repo_config_path, CONFIG_FILE,
};
pub use schema::*;

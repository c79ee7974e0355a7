// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! The engine takes a raw message and a resolved configuration and returns a
//! [`ValidationResult`]. It performs no I/O and keeps no state between calls.

mod conventional;
mod engine;
mod normalize;
pub mod parser;
mod ticket;
mod validator;

pub use engine::{validate_message, RuleEngine};
pub use normalize::first_line;
pub use parser::{parse, ParseError, ParsedSubject};
pub use ticket::looks_like_ticket;
pub use validator::{Diagnostics, Finding, ValidationResult, DIAGNOSTIC_MARKER};

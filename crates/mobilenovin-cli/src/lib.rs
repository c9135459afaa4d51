//! Command-line front end for the MobileNovinAI packaging policy.
//!
//! - [`cli`] - Argument definitions
//! - `commands` - `resolve`, `matrix`, `wrap` and `check`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status messages and formatting

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};

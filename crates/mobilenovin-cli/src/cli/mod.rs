//! Command-line interface definition.
//!
//! - `mobilenovin resolve` - Print the resolved build configuration as JSON
//! - `mobilenovin matrix` - Show every mode × target combination
//! - `mobilenovin wrap` - Render the load-time exposure wrapper
//! - `mobilenovin check` - Check built artifacts against the size budget

mod commands;
mod enums;
mod validation;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{CheckArgs, Command, EnvArgs, MatrixArgs, ResolveArgs, WrapArgs};
pub use enums::{ModeArg, TargetArg};
pub use validation::parse_env_pair;

/// Packaging policy for the MobileNovinAI library
#[derive(Parser, Debug)]
#[command(
    name = "mobilenovin",
    version,
    about = "Resolve the MobileNovinAI packaging policy",
    long_about = "Resolves a build mode and deployment target into the artifact name,\n\
                  host externals, optimization profile and size budget handed to the bundler."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress status messages and logs except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Settings file (defaults to ./mobilenovin.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

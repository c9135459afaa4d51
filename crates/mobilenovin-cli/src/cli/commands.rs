use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::enums::{ModeArg, TargetArg};
use crate::cli::validation::parse_env_pair;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved build configuration
    ///
    /// Reads NODE_ENV and TARGET from the given environment description and
    /// prints the artifact, externals, optimization profile and size budget
    /// as JSON.
    Resolve(ResolveArgs),

    /// Show every mode × target combination
    Matrix(MatrixArgs),

    /// Render the load-time module exposure wrapper
    ///
    /// Wraps a factory body so one artifact registers as a module or attaches
    /// to the global object, whichever the host supports.
    Wrap(WrapArgs),

    /// Check built artifacts against the size budget
    ///
    /// Development builds skip the check. Production builds warn by default;
    /// set `budget.production = "fail"` in the settings to fail instead.
    Check(CheckArgs),
}

/// Environment description shared by `resolve` and `check`
#[derive(Args, Debug, Clone, Default)]
pub struct EnvArgs {
    /// Environment entry as KEY=VALUE (repeatable)
    ///
    /// Examples:
    ///   mobilenovin resolve --env NODE_ENV=production --env TARGET=edge
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE", value_parser = parse_env_pair)]
    pub env: Vec<(String, String)>,

    /// Start from the process environment; --env entries override it
    #[arg(long)]
    pub inherit_env: bool,
}

impl EnvArgs {
    /// Collected environment entries, process environment first.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = if self.inherit_env {
            std::env::vars().collect()
        } else {
            Vec::new()
        };
        entries.extend(self.env.iter().cloned());
        entries
    }
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub env: EnvArgs,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the matrix command
#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Print the four configurations as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the wrap command
#[derive(Args, Debug)]
pub struct WrapArgs {
    /// Deployment target (only affects the suggested filename)
    #[arg(short, long, value_enum, default_value = "standard")]
    pub target: TargetArg,

    /// File holding the factory body; it must `return` the library value
    ///
    /// Defaults to an empty library object.
    #[arg(long, value_name = "FILE")]
    pub body: Option<PathBuf>,

    /// Write the wrapper to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Entrypoint artifact to measure
    #[arg(long, value_name = "FILE")]
    pub entrypoint: PathBuf,

    /// Auxiliary asset to measure (repeatable)
    #[arg(long = "asset", value_name = "FILE")]
    pub assets: Vec<PathBuf>,

    /// Build mode, overriding NODE_ENV from the environment description
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Deployment target, overriding TARGET from the environment description
    #[arg(short, long, value_enum)]
    pub target: Option<TargetArg>,

    #[command(flatten)]
    pub env: EnvArgs,
}

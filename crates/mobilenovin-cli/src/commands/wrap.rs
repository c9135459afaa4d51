//! Wrap command implementation.

use mobilenovin_config::{OutputSpec, Target};

use crate::cli::WrapArgs;
use crate::commands::emit;
use crate::error::{Result, ResultExt};

const EMPTY_FACTORY: &str = "return {};";

/// Execute the wrap command.
///
/// Renders the universal wrapper around a factory body read from `--body`.
pub fn execute(args: WrapArgs) -> Result<()> {
    let output = OutputSpec::for_target(Target::from(args.target));

    let body = match &args.body {
        Some(path) => std::fs::read_to_string(path).with_path(path)?,
        None => EMPTY_FACTORY.to_string(),
    };

    tracing::debug!(filename = %output.filename, "rendering module exposure wrapper");
    let wrapped = output.wrap(body.trim_end())?;

    emit(&wrapped, args.out.as_deref())
}

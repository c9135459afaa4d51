//! Resolve command implementation.

use std::path::Path;

use mobilenovin_config::{derive_config_with, resolve_request};

use crate::cli::ResolveArgs;
use crate::commands::{emit, load_settings};
use crate::error::Result;

/// Execute the resolve command.
///
/// Prints the full build configuration for the given environment as JSON.
pub fn execute(args: ResolveArgs, settings: Option<&Path>) -> Result<()> {
    let settings = load_settings(settings)?;
    let request = resolve_request(args.env.entries());
    let config = derive_config_with(request, &settings);

    tracing::info!(
        mode = %request.mode,
        target = %request.target,
        filename = %config.output.filename,
        optimized = config.optimization.is_enabled(),
        "resolved build configuration"
    );

    let mut json = if args.compact {
        config.to_json()?
    } else {
        config.to_json_pretty()?
    };
    json.push('\n');

    emit(&json, args.out.as_deref())
}

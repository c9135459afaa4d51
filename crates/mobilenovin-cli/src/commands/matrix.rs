//! Matrix command implementation.

use std::path::Path;

use mobilenovin_config::{BuildRequest, FullBuildConfig, derive_config_with};

use crate::cli::MatrixArgs;
use crate::commands::load_settings;
use crate::error::Result;
use crate::ui;

/// Execute the matrix command.
///
/// Prints all four mode × target configurations, as a table or a JSON array.
pub fn execute(args: MatrixArgs, settings: Option<&Path>) -> Result<()> {
    let settings = load_settings(settings)?;
    let configs: Vec<FullBuildConfig> = BuildRequest::all()
        .map(|request| derive_config_with(request, &settings))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&configs)?);
    } else {
        print!("{}", ui::render_matrix(&configs));
    }

    Ok(())
}

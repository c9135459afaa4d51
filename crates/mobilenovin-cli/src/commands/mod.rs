//! Command implementations.
//!
//! - [`resolve`] - Print the resolved build configuration
//! - [`matrix`] - Show every mode × target combination
//! - [`wrap`] - Render the load-time exposure wrapper
//! - [`check`] - Check artifacts against the size budget

pub mod check;
pub mod matrix;
pub mod resolve;
pub mod wrap;

use std::path::Path;

use mobilenovin_config::ResolverSettings;

use crate::error::Result;

pub use check::execute as check_execute;
pub use matrix::execute as matrix_execute;
pub use resolve::execute as resolve_execute;
pub use wrap::execute as wrap_execute;

/// Load resolver settings from `--settings` or the default location.
pub(crate) fn load_settings(path: Option<&Path>) -> Result<ResolverSettings> {
    Ok(ResolverSettings::load(path)?)
}

/// Write `content` to `out`, or to stdout when no path is given.
pub(crate) fn emit(content: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
            crate::ui::success(&format!("Wrote {}", path.display()));
        }
        None => print!("{content}"),
    }
    Ok(())
}

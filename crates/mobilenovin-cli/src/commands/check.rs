//! Check command implementation.
//!
//! Measures built artifacts and applies the size budget for the resolved
//! request.

use std::path::Path;

use mobilenovin_config::{
    ArtifactSizes, BuildRequest, Enforcement, SizeBudget, Verdict, resolve_request,
};

use crate::cli::CheckArgs;
use crate::commands::load_settings;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the check command.
///
/// # Errors
///
/// Fails when an artifact cannot be read, or when the budget is exceeded and
/// enforcement is `fail`. Under `warn` a breach is only reported.
pub fn execute(args: CheckArgs, settings: Option<&Path>) -> Result<()> {
    let settings = load_settings(settings)?;
    let request = request_for(&args);
    let budget = SizeBudget::with_settings(request, &settings.budget);

    for path in std::iter::once(&args.entrypoint).chain(&args.assets) {
        std::fs::metadata(path).with_path(path)?;
    }
    let sizes = ArtifactSizes::measure(&args.entrypoint, args.assets.as_slice())?;

    ui::info(&format!(
        "{} build for {} target: entrypoint {} of {}",
        request.mode,
        request.target,
        ui::format_size(sizes.entrypoint_bytes),
        ui::format_size(budget.max_entrypoint_bytes),
    ));

    if budget.enforcement == Enforcement::Off {
        ui::info("Size budget is not enforced for this build");
        return Ok(());
    }

    // Breach details are logged by `enforce`.
    let report = match budget.enforce(&sizes) {
        Ok(report) => report,
        Err(err) => {
            ui::error("Size budget exceeded; failing the build");
            return Err(err.into());
        }
    };
    match report.verdict {
        Some(Verdict::Exceeded) => ui::warning(&format!(
            "Size budget exceeded ({} warning{}); not failing the build",
            report.warnings.len(),
            if report.warnings.len() == 1 { "" } else { "s" },
        )),
        _ => ui::success("Artifacts are within the size budget"),
    }

    Ok(())
}

/// `--mode`/`--target` take precedence over the environment description.
fn request_for(args: &CheckArgs) -> BuildRequest {
    let resolved = resolve_request(args.env.entries());
    BuildRequest::new(
        args.mode.map(Into::into).unwrap_or(resolved.mode),
        args.target.map(Into::into).unwrap_or(resolved.target),
    )
}

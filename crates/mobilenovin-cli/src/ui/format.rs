//! Formatting utilities for sizes and the configuration matrix.

use mobilenovin_config::FullBuildConfig;

/// Format a byte count in human-readable form.
///
/// # Examples
///
/// ```
/// use mobilenovin_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(51_200), "50.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", bytes, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Render resolved configurations as a fixed-width table.
pub fn render_matrix(configs: &[FullBuildConfig]) -> String {
    let mut out = format!(
        "{:<12} {:<9} {:<24} {:<7} {:>10}  {}\n",
        "MODE", "TARGET", "FILENAME", "MINIFY", "BUDGET", "ENFORCEMENT"
    );

    for config in configs {
        out.push_str(&format!(
            "{:<12} {:<9} {:<24} {:<7} {:>10}  {}\n",
            config.request.mode.as_str(),
            config.request.target.as_str(),
            config.output.filename,
            if config.optimization.minify { "yes" } else { "no" },
            config.budget.max_entrypoint_bytes,
            config.budget.enforcement,
        ));
    }

    out
}

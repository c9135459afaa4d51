//! Logging setup using the `tracing` ecosystem.
//!
//! Log output goes to stderr so that JSON written to stdout stays clean.
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: debug for the mobilenovin crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. Default: warnings and above, so budget warnings are always visible

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "mobilenovin_config=debug,mobilenovin_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "mobilenovin_config=warn,mobilenovin_cli=info";

/// Pick the filter directive for the given flags, ignoring `RUST_LOG`.
fn filter_directive(verbose: bool, quiet: bool) -> Option<&'static str> {
    if verbose {
        Some(VERBOSE_FILTER)
    } else if quiet {
        Some(QUIET_FILTER)
    } else {
        None
    }
}

/// Initialize the global tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = match filter_directive(verbose, quiet) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

//! Full build configuration.
//!
//! [`resolve`] is the single entry point: it normalizes the environment into a
//! [`BuildRequest`] and derives everything else from that request. Both steps
//! are pure, so the same input always yields the same configuration.

use serde::Serialize;

use crate::budget::SizeBudget;
use crate::externals::{ExternalsTable, externals};
use crate::optimization::OptimizationProfile;
use crate::output::OutputSpec;
use crate::request::{BuildRequest, resolve_request};
use crate::settings::ResolverSettings;

/// Everything the bundler needs for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullBuildConfig {
    pub request: BuildRequest,
    pub output: OutputSpec,
    pub externals: ExternalsTable,
    pub optimization: OptimizationProfile,
    pub budget: SizeBudget,
}

impl FullBuildConfig {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Derive the configuration for a request with default settings.
pub fn derive_config(request: BuildRequest) -> FullBuildConfig {
    derive_config_with(request, &ResolverSettings::default())
}

pub fn derive_config_with(request: BuildRequest, settings: &ResolverSettings) -> FullBuildConfig {
    FullBuildConfig {
        request,
        output: OutputSpec::for_target(request.target),
        externals: externals(),
        optimization: OptimizationProfile::for_mode(request.mode),
        budget: SizeBudget::with_settings(request, &settings.budget),
    }
}

/// Resolve an environment description into a full build configuration.
///
/// ```
/// use mobilenovin_config::resolve;
///
/// let config = resolve(std::iter::empty::<(&str, &str)>());
/// assert_eq!(config.output.filename, "mobilenovin-ai.js");
/// assert!(!config.optimization.minify);
/// assert_eq!(config.budget.max_entrypoint_bytes, 512_000);
/// ```
pub fn resolve<I, K, V>(env: I) -> FullBuildConfig
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    derive_config(resolve_request(env))
}

pub fn resolve_with<I, K, V>(env: I, settings: &ResolverSettings) -> FullBuildConfig
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    derive_config_with(resolve_request(env), settings)
}

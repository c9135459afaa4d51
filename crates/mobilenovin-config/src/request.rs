//! Environment resolution.
//!
//! Turns a loose key/value environment into a normalized [`BuildRequest`].
//! Only two keys are recognized; everything else is ignored and no input is
//! ever rejected.

use serde::{Deserialize, Serialize};

/// Key carrying the production-mode flag.
pub const PRODUCTION_FLAG: &str = "NODE_ENV";

/// Value of [`PRODUCTION_FLAG`] that selects [`Mode::Production`].
pub const PRODUCTION_MARKER: &str = "production";

/// Key carrying the deployment target identifier.
pub const TARGET_KEY: &str = "TARGET";

/// Value of [`TARGET_KEY`] that selects [`Target::Edge`].
pub const EDGE_MARKER: &str = "edge";

/// Build mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Debuggable output, no stripping (default)
    #[default]
    Development,
    /// Minified, stripped output
    Production,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Development, Mode::Production];

    pub fn is_production(self) -> bool {
        matches!(self, Mode::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Full-featured artifact (default)
    #[default]
    Standard,
    /// Size-constrained artifact for resource-limited runtimes
    Edge,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::Standard, Target::Edge];

    pub fn as_str(self) -> &'static str {
        match self {
            Target::Standard => "standard",
            Target::Edge => "edge",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized build invocation. Immutable once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BuildRequest {
    pub mode: Mode,
    pub target: Target,
}

impl BuildRequest {
    pub fn new(mode: Mode, target: Target) -> Self {
        Self { mode, target }
    }

    /// Every mode × target combination, development first.
    pub fn all() -> impl Iterator<Item = BuildRequest> {
        Mode::ALL
            .into_iter()
            .flat_map(|mode| Target::ALL.into_iter().map(move |target| Self::new(mode, target)))
    }

    /// Resolve from the current process environment.
    pub fn from_process_env() -> Self {
        resolve_request(std::env::vars())
    }
}

/// Resolve a build request from an environment description.
///
/// Matching is exact and case-sensitive: `NODE_ENV=Production` stays in
/// development mode. When a key appears more than once the last value wins.
///
/// # Examples
///
/// ```
/// use mobilenovin_config::{resolve_request, Mode, Target};
///
/// let request = resolve_request([("TARGET", "edge"), ("UNRELATED", "1")]);
/// assert_eq!(request.mode, Mode::Development);
/// assert_eq!(request.target, Target::Edge);
/// ```
pub fn resolve_request<I, K, V>(env: I) -> BuildRequest
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut mode = Mode::Development;
    let mut target = Target::Standard;

    for (key, value) in env {
        match key.as_ref() {
            PRODUCTION_FLAG => {
                mode = if value.as_ref() == PRODUCTION_MARKER {
                    Mode::Production
                } else {
                    Mode::Development
                };
            }
            TARGET_KEY => {
                target = if value.as_ref() == EDGE_MARKER {
                    Target::Edge
                } else {
                    Target::Standard
                };
            }
            _ => {}
        }
    }

    let request = BuildRequest { mode, target };
    tracing::debug!(mode = %request.mode, target = %request.target, "resolved build request");
    request
}

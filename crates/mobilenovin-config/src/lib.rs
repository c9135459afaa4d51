//! # mobilenovin-config
//!
//! Packaging policy for the `MobileNovinAI` library.
//!
//! A build is described by a loose key/value environment. This crate
//! normalizes that environment into a [`BuildRequest`] and derives from it
//! everything the external bundler needs: the output artifact, the host
//! modules to leave unbundled, the optimization profile and the size budget.
//!
//! ```
//! use mobilenovin_config::{resolve, Mode, Target};
//!
//! let config = resolve([("NODE_ENV", "production"), ("TARGET", "edge")]);
//! assert_eq!(config.request.mode, Mode::Production);
//! assert_eq!(config.request.target, Target::Edge);
//! assert_eq!(config.output.filename, "mobilenovin-ai-edge.js");
//! assert_eq!(config.budget.max_entrypoint_bytes, 51_200);
//! ```

pub mod budget;
pub mod config;
pub mod error;
pub mod externals;
pub mod optimization;
pub mod output;
pub mod request;
pub mod settings;

pub use budget::{ArtifactSizes, BudgetReport, Enforcement, SizeBudget, Verdict, check};
pub use config::{FullBuildConfig, derive_config, derive_config_with, resolve, resolve_with};
pub use error::{BudgetError, ConfigError, Result};
pub use externals::{ExternalBinding, ExternalsTable, externals};
pub use optimization::OptimizationProfile;
pub use output::{EXPOSED_NAME, ModuleExposure, OutputSpec};
pub use request::{
    BuildRequest, EDGE_MARKER, Mode, PRODUCTION_FLAG, PRODUCTION_MARKER, TARGET_KEY, Target,
    resolve_request,
};
pub use settings::{BudgetSettings, ENV_PREFIX, ResolverSettings, SETTINGS_FILE};

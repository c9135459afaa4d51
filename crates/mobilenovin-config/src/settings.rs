//! Resolver settings.
//!
//! Settings only tune how strongly the size budget is enforced. They never
//! change the mode, target, filename, externals or optimization profile.
//!
//! Sources, highest priority first:
//! 1. `MOBILENOVIN_*` environment variables, nested with `__`
//!    (e.g. `MOBILENOVIN_BUDGET__PRODUCTION=fail`)
//! 2. The nearest `mobilenovin.toml`, or an explicit settings file
//! 3. Built-in defaults

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::budget::Enforcement;
use crate::error::{ConfigError, Result};

/// Default settings file name, searched from the working directory upward.
pub const SETTINGS_FILE: &str = "mobilenovin.toml";

/// Prefix for settings environment variables.
pub const ENV_PREFIX: &str = "MOBILENOVIN_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    #[serde(default)]
    pub budget: BudgetSettings,
}

/// Budget enforcement per build mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSettings {
    #[serde(default = "default_production")]
    pub production: Enforcement,

    #[serde(default = "default_development")]
    pub development: Enforcement,
}

fn default_production() -> Enforcement {
    Enforcement::Warn
}

fn default_development() -> Enforcement {
    Enforcement::Off
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            production: default_production(),
            development: default_development(),
        }
    }
}

impl ResolverSettings {
    /// Load settings from defaults, a settings file and the environment.
    ///
    /// With `path = None`, the nearest `mobilenovin.toml` in the working
    /// directory or one of its ancestors is used if one exists. An explicit
    /// path must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] for a missing explicit path and
    /// [`ConfigError::Load`] for malformed files or invalid values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let figment = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::figment(Toml::file(path))
            }
            None => Self::figment(Toml::file(SETTINGS_FILE)),
        };

        let settings: Self = figment.extract()?;
        tracing::debug!(
            production = %settings.budget.production,
            development = %settings.budget.development,
            "loaded resolver settings"
        );
        Ok(settings)
    }

    /// Parse settings from TOML text, without consulting the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(content))
            .extract()?)
    }

    fn figment(file: figment::providers::Data<Toml>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

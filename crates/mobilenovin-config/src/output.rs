//! Output artifact selection.
//!
//! The filename depends on the target alone. Both targets expose the library
//! the same way: a universal wrapper that decides at load time whether to
//! register as a module or attach to the global object.

use serde::Serialize;

use crate::error::{ConfigError, Result};
use crate::request::Target;

/// Public identifier of the library in every artifact.
pub const EXPOSED_NAME: &str = "MobileNovinAI";

const STANDARD_FILENAME: &str = "mobilenovin-ai.js";
const EDGE_FILENAME: &str = "mobilenovin-ai-edge.js";

/// How the artifact makes itself reachable once loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleExposure {
    /// Universal module definition: AMD `define`, CommonJS `module.exports`,
    /// or a property on the global object, whichever the host supports.
    #[default]
    Umd,
}

impl ModuleExposure {
    /// Load-time expression for the global object.
    ///
    /// Workers expose `self`; bare scripts fall back to the enclosing `this`.
    pub fn global_object(&self) -> &'static str {
        match self {
            ModuleExposure::Umd => "typeof self !== 'undefined' ? self : this",
        }
    }

    /// Render the load-time wrapper around a factory body.
    ///
    /// The body runs inside the factory function and must `return` the
    /// library value.
    ///
    /// ```
    /// use mobilenovin_config::ModuleExposure;
    ///
    /// let js = ModuleExposure::Umd.wrap("MobileNovinAI", "return {};").unwrap();
    /// assert!(js.contains("define.amd"));
    /// assert!(js.contains(r#"root["MobileNovinAI"] = factory();"#));
    /// assert!(ModuleExposure::Umd.wrap("mobile-novin", "return {};").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `name` is not a valid
    /// JavaScript identifier.
    pub fn wrap(&self, name: &str, factory_body: &str) -> Result<String> {
        validate_identifier(name)?;

        match self {
            ModuleExposure::Umd => Ok(format!(
                "(function (root, factory) {{\n\
                 \tif (typeof exports === 'object' && typeof module === 'object')\n\
                 \t\tmodule.exports = factory();\n\
                 \telse if (typeof define === 'function' && define.amd)\n\
                 \t\tdefine(\"{name}\", [], factory);\n\
                 \telse if (typeof exports === 'object')\n\
                 \t\texports[\"{name}\"] = factory();\n\
                 \telse\n\
                 \t\troot[\"{name}\"] = factory();\n\
                 }})({global}, function () {{\n\
                 {factory_body}\n\
                 }});\n",
                global = self.global_object(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSpec {
    pub filename: String,
    pub exposed_name: String,
    pub module_exposure: ModuleExposure,
    /// Load-time global object expression used by `module_exposure`
    pub global_object: String,
}

impl OutputSpec {
    pub fn for_target(target: Target) -> Self {
        let filename = match target {
            Target::Standard => STANDARD_FILENAME,
            Target::Edge => EDGE_FILENAME,
        };
        let module_exposure = ModuleExposure::Umd;

        Self {
            filename: filename.to_string(),
            exposed_name: EXPOSED_NAME.to_string(),
            module_exposure,
            global_object: module_exposure.global_object().to_string(),
        }
    }

    /// Wrap a factory body with this artifact's exposure strategy.
    pub fn wrap(&self, factory_body: &str) -> Result<String> {
        self.module_exposure.wrap(&self.exposed_name, factory_body)
    }
}

/// Check that `name` is usable as a global property and AMD module id.
///
/// Must start with a letter, underscore or dollar sign and contain only
/// letters, digits, underscores or dollar signs.
fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: "exposed_name".to_string(),
            message: format!("'{name}' is not a valid JavaScript identifier"),
        })
    }
}

//! Minification and stripping policy.
//!
//! Production output is minified with console diagnostics and debugger
//! statements removed. Development output is left untouched for debugging.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::output::EXPOSED_NAME;
use crate::request::Mode;

/// Console calls the minifier may treat as side-effect free and drop.
const PURE_CONSOLE_CALLS: [&str; 3] = ["console.log", "console.info", "console.debug"];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OptimizationProfile {
    pub minify: bool,
    pub drop_console_calls: bool,
    pub drop_debugger_statements: bool,
    /// Calls marked side-effect free so the optimizer can eliminate them
    pub treat_as_pure: BTreeSet<String>,
    /// Identifiers the mangler must never rename
    pub reserved_identifiers: BTreeSet<String>,
    pub strip_comments: bool,
}

impl OptimizationProfile {
    /// Derive the profile for a build mode.
    ///
    /// ```
    /// use mobilenovin_config::{Mode, OptimizationProfile};
    ///
    /// let profile = OptimizationProfile::for_mode(Mode::Production);
    /// assert!(profile.minify);
    /// assert!(profile.reserved_identifiers.contains("MobileNovinAI"));
    ///
    /// assert_eq!(
    ///     OptimizationProfile::for_mode(Mode::Development),
    ///     OptimizationProfile::default()
    /// );
    /// ```
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Development => Self::default(),
            Mode::Production => Self {
                minify: true,
                drop_console_calls: true,
                drop_debugger_statements: true,
                treat_as_pure: PURE_CONSOLE_CALLS.iter().map(|s| s.to_string()).collect(),
                reserved_identifiers: BTreeSet::from([EXPOSED_NAME.to_string()]),
                strip_comments: true,
            },
        }
    }

    /// Returns true if the optimizer changes the emitted code at all.
    pub fn is_enabled(&self) -> bool {
        self.minify || self.drop_console_calls || self.drop_debugger_statements || self.strip_comments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_strips_and_reserves_exposed_name() {
        let profile = OptimizationProfile::for_mode(Mode::Production);
        assert!(profile.minify);
        assert!(profile.drop_console_calls);
        assert!(profile.drop_debugger_statements);
        assert!(profile.strip_comments);
        assert_eq!(
            profile.treat_as_pure.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["console.debug", "console.info", "console.log"]
        );
        assert_eq!(profile.reserved_identifiers.len(), 1);
        assert!(profile.reserved_identifiers.contains("MobileNovinAI"));
        assert!(profile.is_enabled());
    }

    #[test]
    fn development_keeps_everything() {
        let profile = OptimizationProfile::for_mode(Mode::Development);
        assert!(!profile.minify);
        assert!(!profile.drop_console_calls);
        assert!(!profile.drop_debugger_statements);
        assert!(!profile.strip_comments);
        assert!(profile.treat_as_pure.is_empty());
        assert!(profile.reserved_identifiers.is_empty());
        assert!(!profile.is_enabled());
    }

    #[test]
    fn console_warnings_and_errors_are_not_pure() {
        let profile = OptimizationProfile::for_mode(Mode::Production);
        assert!(!profile.treat_as_pure.contains("console.warn"));
        assert!(!profile.treat_as_pure.contains("console.error"));
    }
}

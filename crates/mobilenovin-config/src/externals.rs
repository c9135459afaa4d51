//! Host capabilities excluded from every bundle.
//!
//! Filesystem access, path manipulation, cryptographic primitives and OS
//! introspection are supplied by the hosting runtime. They are never bundled
//! or polyfilled; the artifact references the host's own module through its
//! `require` convention at load time.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Module names that are always left to the host, in table order.
const HOST_MODULES: [&str; 4] = ["fs", "path", "crypto", "os"];

/// How the artifact reaches an excluded module at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalBinding {
    /// `require("<module>")` through the host's CommonJS loader
    CommonJs(&'static str),
}

impl ExternalBinding {
    pub fn module(&self) -> &'static str {
        match self {
            ExternalBinding::CommonJs(module) => module,
        }
    }

    /// Loader string handed to the bundler, e.g. `commonjs fs`.
    pub fn render(&self) -> String {
        match self {
            ExternalBinding::CommonJs(module) => format!("commonjs {module}"),
        }
    }
}

impl Serialize for ExternalBinding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

/// Mapping from host module name to its runtime binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExternalsTable {
    entries: IndexMap<&'static str, ExternalBinding>,
}

impl ExternalsTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, module: &str) -> Option<&ExternalBinding> {
        self.entries.get(module)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ExternalBinding)> {
        self.entries.iter().map(|(name, binding)| (*name, binding))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Whether an import specifier refers to an excluded host module.
    ///
    /// Accepts both the bare and the `node:`-prefixed form.
    ///
    /// ```
    /// use mobilenovin_config::externals;
    ///
    /// let table = externals();
    /// assert!(table.is_external("crypto"));
    /// assert!(table.is_external("node:fs"));
    /// assert!(!table.is_external("fs/promises"));
    /// ```
    pub fn is_external(&self, specifier: &str) -> bool {
        let name = specifier.strip_prefix("node:").unwrap_or(specifier);
        self.entries.contains_key(name)
    }
}

/// The fixed externals table. Identical for every mode and target.
pub fn externals() -> ExternalsTable {
    ExternalsTable {
        entries: HOST_MODULES
            .into_iter()
            .map(|name| (name, ExternalBinding::CommonJs(name)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_exactly_four_host_modules() {
        let table = externals();
        assert_eq!(table.len(), 4);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["fs", "path", "crypto", "os"]);
    }

    #[test]
    fn bindings_use_commonjs_convention() {
        let table = externals();
        for (name, binding) in table.iter() {
            assert_eq!(binding.module(), name);
            assert_eq!(binding.render(), format!("commonjs {name}"));
        }
    }

    #[test]
    fn serializes_as_loader_map() {
        let json = serde_json::to_string(&externals()).unwrap();
        assert_eq!(
            json,
            r#"{"fs":"commonjs fs","path":"commonjs path","crypto":"commonjs crypto","os":"commonjs os"}"#
        );
    }

    #[test]
    fn non_host_modules_are_bundled() {
        let table = externals();
        assert!(!table.is_external("http"));
        assert!(!table.is_external("node:http"));
        assert!(!table.is_external("./fs"));
        assert!(table.get("os").is_some());
    }
}

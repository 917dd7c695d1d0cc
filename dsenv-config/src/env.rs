//! Environment variable sources and lookup helpers.

use std::collections::HashMap;

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;

    /// Check if a variable exists.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }
}

/// Default environment source using std::env.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment source backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create a new map-based environment source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Add multiple variables.
    pub fn with_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.vars.extend(vars);
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Whether a value contains at least one non-whitespace character.
#[inline]
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Return the first variable among `names` whose value has text, trimmed.
///
/// Unset and blank variables are skipped.
pub fn first_non_blank<E: EnvSource + ?Sized>(env: &E, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env.get(name))
        .find(|value| has_text(value))
        .map(|value| value.trim().to_string())
}

/// Return the first variable among `names` that is set at all, trimmed.
///
/// A variable set to an empty string counts as a deliberate empty value and
/// stops the search; only unset variables are skipped.
pub fn first_present<E: EnvSource + ?Sized>(env: &E, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| env.get(name))
        .map(|value| value.trim().to_string())
}

//! Layered configuration store.
//!
//! A [`ConfigStore`] is an ordered list of named [`PropertySource`]s. Lookups
//! walk the sources from highest to lowest priority and the first source that
//! knows a key wins, so inserting a source at the front overrides everything
//! below it without touching the lower layers.
//!
//! ```rust
//! use dsenv_config::{ConfigStore, PropertySource};
//!
//! let mut store = ConfigStore::new();
//! store.add_last(PropertySource::map("defaults").with("datasource.url", "jdbc:mysql://localhost:3306"));
//! store.add_first(PropertySource::map("overrides").with("datasource.url", "jdbc:mysql://db:3306"));
//!
//! assert_eq!(store.property("datasource.url"), Some("jdbc:mysql://db:3306"));
//! assert_eq!(store.source_names(), vec!["overrides", "defaults"]);
//! ```

use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

use crate::env::EnvSource;
use crate::error::ConfigResult;
use crate::processor::EnvironmentPostProcessor;

/// Name of the source created by [`ConfigStore::from_env`].
pub const SYSTEM_ENVIRONMENT_SOURCE_NAME: &str = "systemEnvironment";

/// How a source answers lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Keys must match exactly.
    Map,
    /// Keys also match their environment-variable spelling.
    Environment,
}

/// A named set of properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySource {
    name: String,
    kind: SourceKind,
    properties: IndexMap<String, String>,
}

impl PropertySource {
    /// Create an empty map source.
    pub fn map(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SourceKind::Map,
            properties: IndexMap::new(),
        }
    }

    /// Create a map source from existing properties, keeping their order.
    pub fn from_properties<I, K, V>(name: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            kind: SourceKind::Map,
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Create an environment source with relaxed key matching.
    pub fn environment<I, K, V>(name: impl Into<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            kind: SourceKind::Environment,
            ..Self::from_properties(name, vars)
        }
    }

    /// Snapshot the process environment.
    pub fn system_environment() -> Self {
        Self::environment(SYSTEM_ENVIRONMENT_SOURCE_NAME, std::env::vars())
    }

    /// Load a TOML file as a map source named `file:<path>`.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        crate::file::load_toml_file(path.as_ref())
    }

    /// Parse a TOML document as a map source with dotted keys.
    pub fn from_toml_str(name: impl Into<String>, content: &str) -> ConfigResult<Self> {
        let name = name.into();
        let properties = crate::file::flatten_toml(&name, content)?;
        Ok(Self::from_properties(name, properties))
    }

    /// Add a property.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// The source name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lookup flavour.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Look up a property.
    pub fn get(&self, key: &str) -> Option<&str> {
        if let Some(value) = self.properties.get(key) {
            return Some(value.as_str());
        }
        match self.kind {
            SourceKind::Map => None,
            SourceKind::Environment => {
                let relaxed = relaxed_env_name(key);
                if relaxed == key {
                    return None;
                }
                self.properties.get(&relaxed).map(String::as_str)
            }
        }
    }

    /// Check if a property is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the source holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Environment-variable spelling of a property key.
///
/// `datasource.pool.initialization-fail-timeout` becomes
/// `DATASOURCE_POOL_INITIALIZATION_FAIL_TIMEOUT`.
pub fn relaxed_env_name(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '.' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Ordered stack of property sources, highest priority first.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    sources: Vec<PropertySource>,
}

impl ConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a snapshot of the process environment.
    pub fn from_env() -> Self {
        let mut store = Self::new();
        store.add_last(PropertySource::system_environment());
        store
    }

    /// Append a TOML file as the lowest-priority layer.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> ConfigResult<Self> {
        let source = PropertySource::from_toml_file(path)?;
        self.add_last(source);
        Ok(self)
    }

    /// Insert a source with the highest priority.
    ///
    /// A source with the same name is replaced in place.
    pub fn add_first(&mut self, source: PropertySource) {
        match self.position(&source.name) {
            Some(index) => {
                debug!(source = %source.name, "Replacing property source in place");
                self.sources[index] = source;
            }
            None => {
                debug!(source = %source.name, "Adding property source with highest priority");
                self.sources.insert(0, source);
            }
        }
    }

    /// Insert a source with the lowest priority.
    ///
    /// A source with the same name is replaced in place.
    pub fn add_last(&mut self, source: PropertySource) {
        match self.position(&source.name) {
            Some(index) => {
                debug!(source = %source.name, "Replacing property source in place");
                self.sources[index] = source;
            }
            None => {
                debug!(source = %source.name, "Adding property source with lowest priority");
                self.sources.push(source);
            }
        }
    }

    /// Replace the source called `name`, keeping its position.
    ///
    /// Returns `false` if no such source exists; the store is unchanged.
    pub fn replace(&mut self, name: &str, source: PropertySource) -> bool {
        match self.position(name) {
            Some(index) => {
                debug!(source = %name, "Replacing property source in place");
                self.sources[index] = source;
                true
            }
            None => false,
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.sources.iter().position(|s| s.name == name)
    }

    /// Remove a source by name.
    pub fn remove(&mut self, name: &str) -> Option<PropertySource> {
        let index = self.position(name)?;
        Some(self.sources.remove(index))
    }

    /// Check whether a source exists.
    pub fn contains_source(&self, name: &str) -> bool {
        self.sources.iter().any(|s| s.name == name)
    }

    /// Get a source by name.
    pub fn source(&self, name: &str) -> Option<&PropertySource> {
        self.sources.iter().find(|s| s.name == name)
    }

    /// Source names in priority order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name.as_str()).collect()
    }

    /// Iterate over sources in priority order.
    pub fn sources(&self) -> impl Iterator<Item = &PropertySource> {
        self.sources.iter()
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the store has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Resolve a property against all sources.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.sources.iter().find_map(|s| s.get(key))
    }

    /// Check whether any source defines a property.
    pub fn contains_property(&self, key: &str) -> bool {
        self.property(key).is_some()
    }

    /// A read-only view that ignores one named source.
    pub fn excluding<'a>(&'a self, name: &'a str) -> StoreView<'a> {
        StoreView {
            store: self,
            excluded: name,
        }
    }

    /// Run a post-processor against this store.
    pub fn apply<P: EnvironmentPostProcessor + ?Sized>(&mut self, processor: &P) -> P::Outcome {
        debug!(processor = processor.name(), "Applying environment post-processor");
        processor.post_process(self)
    }
}

impl EnvSource for ConfigStore {
    fn get(&self, name: &str) -> Option<String> {
        self.property(name).map(String::from)
    }
}

/// Read-only view over a [`ConfigStore`] without one source.
#[derive(Debug, Clone, Copy)]
pub struct StoreView<'a> {
    store: &'a ConfigStore,
    excluded: &'a str,
}

impl StoreView<'_> {
    /// Resolve a property, skipping the excluded source.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.store
            .sources
            .iter()
            .filter(|s| s.name != self.excluded)
            .find_map(|s| s.get(key))
    }
}

impl EnvSource for StoreView<'_> {
    fn get(&self, name: &str) -> Option<String> {
        self.property(name).map(String::from)
    }
}

//! Resolution orchestrator.
//!
//! Resolution paths, first success wins:
//!
//! 1. Each connection-string variable in [`CONNECTION_STRING_VARIABLES`]
//!    order, parsed by [`parse_connection_string`]. Credentials missing from
//!    the URL are then filled in from explicit user/password variables.
//! 2. Discrete host/port/database/credential variables
//!    ([`resolve_discrete`]).
//!
//! Nothing here fails: when no path applies, resolution reports absence and
//! the host application keeps whatever datasource it configured statically.

use dsenv_config::{EnvSource, PropertySource, first_present, has_text};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::descriptor::ConnectionDescriptor;
use crate::discrete::resolve_discrete;
use crate::keys::{
    DATASOURCE_PASSWORD, DATASOURCE_URL, DATASOURCE_USERNAME, INITIALIZATION_FAIL_TIMEOUT,
    RETRY_INDEFINITELY,
};
use crate::parser::parse_connection_string;
use crate::variables::{
    CONNECTION_STRING_VARIABLES, EXPLICIT_USERNAME_VARIABLES, PASSWORD_VARIABLES,
};

/// Resolve a connection target from `env`.
pub fn resolve<E: EnvSource + ?Sized>(env: &E) -> Option<ConnectionDescriptor> {
    match resolve_from_connection_string(env) {
        Some(descriptor) => Some(enrich_with_explicit_credentials(descriptor, env)),
        None => resolve_discrete(env),
    }
}

fn resolve_from_connection_string<E: EnvSource + ?Sized>(env: &E) -> Option<ConnectionDescriptor> {
    CONNECTION_STRING_VARIABLES.iter().find_map(|variable| {
        let value = env.get(variable).filter(|v| has_text(v))?;
        parse_connection_string(&value, variable)
    })
}

fn enrich_with_explicit_credentials<E: EnvSource + ?Sized>(
    descriptor: ConnectionDescriptor,
    env: &E,
) -> ConnectionDescriptor {
    if !descriptor.is_missing_credentials() {
        return descriptor;
    }
    let username = if descriptor.has_username() {
        None
    } else {
        first_present(env, EXPLICIT_USERNAME_VARIABLES)
    };
    let password = if descriptor.password().is_some() {
        None
    } else {
        first_present(env, PASSWORD_VARIABLES)
    };
    descriptor.with_missing_credentials(username, password)
}

/// The property overrides derived from a resolved descriptor.
///
/// Keys are inserted in a fixed order (URL, username, password, fail-fast
/// timeout) so identical input always produces an identical set.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DatasourceOverrides {
    properties: IndexMap<String, String>,
}

impl DatasourceOverrides {
    /// Create an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the overrides for `descriptor`.
    ///
    /// The fail-fast timeout is forced to retry indefinitely unless `env`
    /// already defines it.
    pub fn for_descriptor<E: EnvSource + ?Sized>(
        descriptor: &ConnectionDescriptor,
        env: &E,
    ) -> Self {
        let mut overrides = Self::new();
        overrides.insert(DATASOURCE_URL, descriptor.url());
        if let Some(username) = descriptor.username() {
            overrides.insert(DATASOURCE_USERNAME, username);
        }
        if let Some(password) = descriptor.password() {
            overrides.insert(DATASOURCE_PASSWORD, password);
        }

        if env.contains(INITIALIZATION_FAIL_TIMEOUT) {
            debug!(property = INITIALIZATION_FAIL_TIMEOUT, "Respecting existing value");
        } else {
            overrides.insert(INITIALIZATION_FAIL_TIMEOUT, RETRY_INDEFINITELY);
            info!(
                property = INITIALIZATION_FAIL_TIMEOUT,
                value = RETRY_INDEFINITELY,
                "Keeping pool initialization retrying while MySQL becomes available"
            );
        }
        overrides
    }

    fn insert(&mut self, key: &str, value: &str) {
        self.properties.insert(key.to_string(), value.to_string());
    }

    /// Get an override.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Check for an override.
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Iterate over overrides in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate with the password replaced by `********`.
    pub fn iter_redacted(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().map(|(k, v)| {
            if k == DATASOURCE_PASSWORD {
                (k, "********")
            } else {
                (k, v)
            }
        })
    }

    /// A copy with the password replaced by `********`.
    pub fn redacted(&self) -> Self {
        Self {
            properties: self
                .iter_redacted()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Number of overrides.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether there is nothing to override.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Turn the overrides into a named property source.
    pub fn to_property_source(&self, name: &str) -> PropertySource {
        PropertySource::from_properties(name, self.iter())
    }
}

impl fmt::Debug for DatasourceOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_redacted()).finish()
    }
}

/// Outcome of a resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved target, if any path applied.
    pub descriptor: Option<ConnectionDescriptor>,
    /// Overrides to install; empty when nothing resolved.
    pub overrides: DatasourceOverrides,
}

impl Resolution {
    /// Resolve `env` and derive its overrides.
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Self {
        match resolve(env) {
            Some(descriptor) => {
                let overrides = DatasourceOverrides::for_descriptor(&descriptor, env);
                Self {
                    descriptor: Some(descriptor),
                    overrides,
                }
            }
            None => Self::default(),
        }
    }

    /// Whether a connection target was found.
    pub fn is_resolved(&self) -> bool {
        self.descriptor.is_some()
    }
}

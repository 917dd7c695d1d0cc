//! # dsenv-config
//!
//! Layered configuration store for dsenv.
//!
//! This crate provides the pieces the datasource resolvers plug into:
//! - [`ConfigStore`], an ordered stack of named [`PropertySource`]s where the
//!   first source that knows a key wins
//! - Environment sources ([`EnvSource`], [`StdEnvSource`], [`MapEnvSource`])
//!   and the lookup helpers resolvers use to scan candidate variable names
//! - TOML files as property sources, flattened into dotted keys
//! - The [`EnvironmentPostProcessor`] hook for components that rewrite the
//!   store once at startup
//! - Environment-controlled logging bootstrap
//!
//! ## Layering
//!
//! ```rust
//! use dsenv_config::{ConfigStore, PropertySource};
//!
//! let mut store = ConfigStore::new();
//! store.add_last(PropertySource::environment(
//!     "systemEnvironment",
//!     [("DATASOURCE_POOL_INITIALIZATION_FAIL_TIMEOUT", "30")],
//! ));
//!
//! // Environment sources answer relaxed property names.
//! assert_eq!(
//!     store.property("datasource.pool.initialization-fail-timeout"),
//!     Some("30")
//! );
//! ```

pub mod env;
pub mod error;
mod file;
pub mod logging;
pub mod processor;
pub mod store;

pub use env::{EnvSource, MapEnvSource, StdEnvSource, first_non_blank, first_present, has_text};
pub use error::{ConfigError, ConfigResult};
pub use processor::EnvironmentPostProcessor;
pub use store::{
    ConfigStore, PropertySource, SYSTEM_ENVIRONMENT_SOURCE_NAME, SourceKind, StoreView,
    relaxed_env_name,
};

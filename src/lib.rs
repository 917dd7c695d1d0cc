//! # dsenv
//!
//! Resolve a MySQL datasource from the environment variables hosting
//! platforms inject, before anything reads database settings.
//!
//! dsenv provides:
//! - A layered configuration store with environment and TOML file layers
//! - A connection-string parser that tolerates unescaped credentials
//! - Discrete host/port/user variable resolution with proxy fallbacks
//! - A post-processor that installs the result as the top-priority layer
//!
//! ## Quick Start
//!
//! ```rust
//! use dsenv::prelude::*;
//!
//! let mut store = ConfigStore::new();
//! store.add_last(PropertySource::environment(
//!     "systemEnvironment",
//!     [("MYSQL_URL", "mysql://root:pw@db.internal:3307/app")],
//! ));
//!
//! let (outcome, _) = store.apply(&MysqlEnvironmentPostProcessor::new());
//! assert!(outcome.is_installed());
//! assert_eq!(store.property(DATASOURCE_USERNAME), Some("root"));
//! assert_eq!(store.property(INITIALIZATION_FAIL_TIMEOUT), Some("0"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Layered configuration store and environment sources.
pub mod config {
    pub use dsenv_config::*;
}

/// MySQL datasource resolution.
pub mod mysql {
    pub use dsenv_mysql::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{
        ConfigStore, EnvSource, EnvironmentPostProcessor, MapEnvSource, PropertySource,
        StdEnvSource,
    };
    pub use crate::mysql::keys::{
        DATASOURCE_PASSWORD, DATASOURCE_URL, DATASOURCE_USERNAME, INITIALIZATION_FAIL_TIMEOUT,
        OVERRIDE_SOURCE_NAME,
    };
    pub use crate::mysql::{
        ConnectionDescriptor, MysqlEnvironmentPostProcessor, OverlayOutcome, Resolution, resolve,
    };
}

// Re-export key types at the crate root
pub use config::{ConfigError, ConfigStore};
pub use mysql::{ConnectionDescriptor, MysqlEnvironmentPostProcessor, Resolution};

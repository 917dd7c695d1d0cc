//! # dsenv-mysql
//!
//! Resolves a MySQL datasource from the environment variables hosting
//! platforms inject, and writes it into a [`ConfigStore`] before anything
//! reads database settings.
//!
//! Platforms disagree on how they expose a database:
//! - a full connection string (`MYSQL_URL`, `DATABASE_URL`, `JAWSDB_URL`, ...)
//! - discrete variables (`MYSQLHOST`, `MYSQLPORT`, `MYSQLUSER`, ...)
//! - public TCP proxy variables (`RAILWAY_TCP_PROXY_DOMAIN`, ...)
//!
//! All of them are normalized into a single [`ConnectionDescriptor`] with a
//! `jdbc:mysql://` URL carrying sensible driver defaults.
//!
//! ## Example
//!
//! ```rust
//! use dsenv_config::MapEnvSource;
//! use dsenv_mysql::Resolution;
//!
//! let env = MapEnvSource::new()
//!     .set("MYSQLHOST", "10.0.0.5")
//!     .set("MYSQLUSER", "")
//!     .set("MYSQLPASSWORD", "secret");
//!
//! let resolution = Resolution::from_env(&env);
//! let descriptor = resolution.descriptor.unwrap();
//! assert_eq!(descriptor.port(), 3306);
//! assert_eq!(descriptor.username(), Some(""));
//! assert_eq!(descriptor.password(), Some("secret"));
//! assert_eq!(resolution.overrides.get("datasource.pool.initialization-fail-timeout"), Some("0"));
//! ```
//!
//! [`ConfigStore`]: dsenv_config::ConfigStore

pub mod descriptor;
pub mod discrete;
mod encoding;
pub mod error;
pub mod keys;
pub mod options;
pub mod overlay;
pub mod parser;
pub mod processor;
pub mod resolver;
pub mod variables;

pub use descriptor::{ConnectionDescriptor, build_jdbc_url};
pub use discrete::resolve_discrete;
pub use error::{ParseRejection, ParseResult};
pub use options::{DEFAULT_OPTIONS, ParameterSet};
pub use overlay::{OverlayOutcome, install_overlay};
pub use parser::{parse_connection_string, try_parse_connection_string};
pub use processor::MysqlEnvironmentPostProcessor;
pub use resolver::{DatasourceOverrides, Resolution, resolve};

//! Error types for configuration loading.

use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building a configuration store.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration file could not be read.
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid TOML.
    #[error("Invalid TOML in '{path}': {message}")]
    Toml {
        /// Path (or name) of the document.
        path: String,
        /// Parser message.
        message: String,
    },

    /// A property source could not be installed.
    #[error("Invalid property source: {0}")]
    InvalidLayer(String),
}

impl ConfigError {
    /// Create a TOML error.
    pub fn toml(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Toml {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid layer error.
    pub fn invalid_layer(msg: impl Into<String>) -> Self {
        Self::InvalidLayer(msg.into())
    }
}

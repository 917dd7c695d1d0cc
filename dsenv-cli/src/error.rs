//! CLI error types and result alias.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    #[diagnostic(code(dsenv::config), help("check the paths passed with --config"))]
    Config(#[from] dsenv_config::ConfigError),

    /// No datasource could be resolved from the environment
    #[error("No MySQL configuration resolved from the environment")]
    #[diagnostic(
        code(dsenv::unresolved),
        help("set one of MYSQL_URL, DATABASE_URL, ... or MYSQLHOST")
    )]
    Unresolved,

    /// Output could not be rendered
    #[error("Format error: {0}")]
    #[diagnostic(code(dsenv::format))]
    Format(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Unresolved => 2,
            _ => 1,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Format(format!("Failed to render JSON: {}", err))
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::Format(format!("Failed to render TOML: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Unresolved.exit_code(), 2);
        assert_eq!(CliError::Format("x".into()).exit_code(), 1);
    }
}

//! Startup hook wiring resolution into the configuration store.

use dsenv_config::{ConfigStore, EnvironmentPostProcessor};
use tracing::{debug, info, warn};

use crate::keys::OVERRIDE_SOURCE_NAME;
use crate::overlay::{OverlayOutcome, install_overlay};
use crate::resolver::Resolution;
use crate::variables::CONNECTION_STRING_VARIABLES;

/// Post-processor that resolves MySQL settings from platform variables and
/// installs them as the `platformMysqlOverrides` source.
///
/// ```rust
/// use dsenv_config::{ConfigStore, PropertySource};
/// use dsenv_mysql::{MysqlEnvironmentPostProcessor, OverlayOutcome};
///
/// let mut store = ConfigStore::new();
/// store.add_last(PropertySource::environment("systemEnvironment", [("MYSQLHOST", "10.0.0.5")]));
///
/// let (outcome, _) = store.apply(&MysqlEnvironmentPostProcessor::new());
/// assert_eq!(outcome, OverlayOutcome::Inserted);
/// assert!(store.property("datasource.url").unwrap().starts_with("jdbc:mysql://10.0.0.5:3306"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlEnvironmentPostProcessor;

impl MysqlEnvironmentPostProcessor {
    /// Create the post-processor.
    pub fn new() -> Self {
        Self
    }

    /// Resolve against `store`, ignoring any overlay a previous run installed.
    pub fn resolve(&self, store: &ConfigStore) -> Resolution {
        Resolution::from_env(&store.excluding(OVERRIDE_SOURCE_NAME))
    }
}

impl EnvironmentPostProcessor for MysqlEnvironmentPostProcessor {
    type Outcome = (OverlayOutcome, Resolution);

    fn name(&self) -> &str {
        "mysql-environment"
    }

    fn post_process(&self, store: &mut ConfigStore) -> Self::Outcome {
        let resolution = self.resolve(store);

        let Some(descriptor) = resolution.descriptor.as_ref() else {
            warn!(
                expected = ?CONNECTION_STRING_VARIABLES,
                "No MySQL environment variables detected. Expected a connection string variable or host/port variables such as MYSQLHOST"
            );
            return (OverlayOutcome::Skipped, resolution);
        };

        let outcome = install_overlay(store, OVERRIDE_SOURCE_NAME, &resolution.overrides);

        info!(
            source = %descriptor.source(),
            host = %descriptor.host(),
            port = descriptor.port(),
            database = descriptor.database().unwrap_or("<default>"),
            user_provided = descriptor.has_username(),
            "Detected MySQL configuration"
        );
        debug!(url = %descriptor.url(), outcome = ?outcome, "Effective JDBC URL");

        (outcome, resolution)
    }
}

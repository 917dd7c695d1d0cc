//! Property keys written into the configuration store.

/// Name of the property source holding the resolved datasource settings.
pub const OVERRIDE_SOURCE_NAME: &str = "platformMysqlOverrides";

/// JDBC connection URL.
pub const DATASOURCE_URL: &str = "datasource.url";

/// Connection username.
pub const DATASOURCE_USERNAME: &str = "datasource.username";

/// Connection password.
pub const DATASOURCE_PASSWORD: &str = "datasource.password";

/// How long pool initialization waits for the database; `0` keeps retrying.
pub const INITIALIZATION_FAIL_TIMEOUT: &str = "datasource.pool.initialization-fail-timeout";

/// Value written for [`INITIALIZATION_FAIL_TIMEOUT`] when the operator set none.
pub const RETRY_INDEFINITELY: &str = "0";

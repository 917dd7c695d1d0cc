//! Resolved connection target.

use std::fmt;

use crate::options::ParameterSet;

/// Scheme prefix of generated URLs.
pub const JDBC_MYSQL_PREFIX: &str = "jdbc:mysql://";

/// Build `jdbc:mysql://<host>[:<port>][/<database>][?<query>]`.
///
/// `params` is merged with [`DEFAULT_OPTIONS`](crate::options::DEFAULT_OPTIONS)
/// before rendering, so the query string is never empty in practice.
pub fn build_jdbc_url(
    host: &str,
    port: u16,
    database: Option<&str>,
    params: ParameterSet,
) -> String {
    let params = params.with_defaults();

    let mut url = String::with_capacity(64);
    url.push_str(JDBC_MYSQL_PREFIX);
    url.push_str(host);
    if port > 0 {
        url.push(':');
        url.push_str(&port.to_string());
    }
    if let Some(db) = database.filter(|db| !db.trim().is_empty()) {
        url.push('/');
        url.push_str(db);
    }
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.to_query_string());
    }
    url
}

/// A fully resolved MySQL connection target.
///
/// `username` and `password` distinguish three states: `None` (not supplied,
/// leave existing configuration alone), `Some("")` (explicitly blank) and
/// `Some(value)`.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    url: String,
    username: Option<String>,
    password: Option<String>,
    host: String,
    port: u16,
    database: Option<String>,
    source: String,
}

impl ConnectionDescriptor {
    /// Assemble a descriptor, rendering its JDBC URL from the parts.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        database: Option<String>,
        params: ParameterSet,
        username: Option<String>,
        password: Option<String>,
        source: impl Into<String>,
    ) -> Self {
        let host = host.into();
        let database = database.filter(|db| !db.trim().is_empty());
        let url = build_jdbc_url(&host, port, database.as_deref(), params);
        Self {
            url,
            username,
            password,
            host,
            port,
            database,
            source: source.into(),
        }
    }

    /// Fill in credentials that are still missing.
    ///
    /// A field already present, even as an empty string, is kept.
    pub fn with_missing_credentials(
        mut self,
        username: Option<String>,
        password: Option<String>,
    ) -> Self {
        if self.username.is_none() {
            self.username = username;
        }
        if self.password.is_none() {
            self.password = password;
        }
        self
    }

    /// The driver-qualified connection URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The username, if one was supplied.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The password, if one was supplied.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The database host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The database port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The database name, if any.
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// Which variable or strategy produced this descriptor.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether a username was supplied.
    pub fn has_username(&self) -> bool {
        self.username.is_some()
    }

    /// Whether either credential is still missing.
    pub fn is_missing_credentials(&self) -> bool {
        self.username.is_none() || self.password.is_none()
    }
}

impl fmt::Debug for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionDescriptor")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_url_full() {
        let url = build_jdbc_url(
            "db.example.com",
            3307,
            Some("app"),
            ParameterSet::parse_query("opt=1"),
        );
        assert_eq!(
            url,
            "jdbc:mysql://db.example.com:3307/app?opt=1&useSSL=false&serverTimezone=UTC&allowPublicKeyRetrieval=true&useUnicode=true&characterEncoding=utf8"
        );
    }

    #[test]
    fn test_build_url_without_database() {
        let url = build_jdbc_url("10.0.0.5", 3306, None, ParameterSet::new());
        assert!(url.starts_with("jdbc:mysql://10.0.0.5:3306?useSSL=false"));

        let blank = build_jdbc_url("10.0.0.5", 3306, Some("  "), ParameterSet::new());
        assert_eq!(url, blank);
    }

    #[test]
    fn test_with_missing_credentials_keeps_present_values() {
        let descriptor = ConnectionDescriptor::new(
            "h",
            3306,
            None,
            ParameterSet::new(),
            Some(String::new()),
            None,
            "test",
        );
        assert!(descriptor.is_missing_credentials());

        let enriched =
            descriptor.with_missing_credentials(Some("env-user".into()), Some("env-pass".into()));
        assert_eq!(enriched.username(), Some(""));
        assert_eq!(enriched.password(), Some("env-pass"));
        assert!(!enriched.is_missing_credentials());
    }

    #[test]
    fn test_debug_redacts_password() {
        let descriptor = ConnectionDescriptor::new(
            "h",
            3306,
            Some("db".into()),
            ParameterSet::new(),
            Some("root".into()),
            Some("hunter2".into()),
            "MYSQL_URL",
        );
        let debug = format!("{:?}", descriptor);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("********"));
        assert!(debug.contains("root"));
    }
}

//! Environment variable names recognized by the resolvers, in lookup order.

/// Port used when none is given or the given one is unusable.
pub const DEFAULT_PORT: u16 = 3306;

/// Full connection-string variables.
pub const CONNECTION_STRING_VARIABLES: &[&str] = &[
    "MYSQL_URL",
    "MYSQL_PUBLIC_URL",
    "DATABASE_URL",
    "CLEARDB_DATABASE_URL",
    "JAWSDB_URL",
    "JAWSDB_MARIA_URL",
];

/// Discrete host variables.
pub const HOST_VARIABLES: &[&str] = &["MYSQLHOST", "MYSQLHOSTNAME", "MYSQL_HOST", "MYSQL_HOSTNAME"];

/// Public TCP proxy host variables, consulted when no host variable is set.
pub const PROXY_HOST_VARIABLES: &[&str] = &[
    "RAILWAY_TCP_PROXY_DOMAIN",
    "RAILWAY_TCP_PROXY_HOST",
    "RAILWAY_TCP_HOST",
];

/// Discrete port variables.
pub const PORT_VARIABLES: &[&str] = &["MYSQLPORT", "MYSQL_PORT"];

/// Public TCP proxy port variables, consulted when no port variable is set.
pub const PROXY_PORT_VARIABLES: &[&str] = &[
    "RAILWAY_TCP_PROXY_PORT",
    "RAILWAY_TCP_APPLICATION_PORT",
    "RAILWAY_TCP_PORT",
];

/// Database name variables.
pub const DATABASE_VARIABLES: &[&str] = &["MYSQLDATABASE", "MYSQL_DATABASE"];

/// Username variables for discrete resolution.
pub const USERNAME_VARIABLES: &[&str] =
    &["MYSQLUSER", "MYSQL_USER", "MYSQLUSERNAME", "MYSQL_USERNAME"];

/// Username variables used to fill in a connection string that carried none.
pub const EXPLICIT_USERNAME_VARIABLES: &[&str] = &["MYSQLUSER", "MYSQL_USER"];

/// Password variables.
pub const PASSWORD_VARIABLES: &[&str] = &["MYSQLPASSWORD", "MYSQL_PASSWORD", "MYSQL_ROOT_PASSWORD"];

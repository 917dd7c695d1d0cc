//! Resolution from separate host/port/database/credential variables.

use dsenv_config::{EnvSource, first_non_blank, first_present};
use tracing::debug;

use crate::descriptor::ConnectionDescriptor;
use crate::options::ParameterSet;
use crate::variables::{
    DATABASE_VARIABLES, DEFAULT_PORT, HOST_VARIABLES, PASSWORD_VARIABLES, PORT_VARIABLES,
    PROXY_HOST_VARIABLES, PROXY_PORT_VARIABLES, USERNAME_VARIABLES,
};

/// Source label of descriptors built by [`resolve_discrete`].
pub const DISCRETE_SOURCE: &str = "environment variables";

/// Build a descriptor from discrete variables.
///
/// Returns `None` when neither a host variable nor a proxy host variable has
/// a value.
pub fn resolve_discrete<E: EnvSource + ?Sized>(env: &E) -> Option<ConnectionDescriptor> {
    let host = first_non_blank(env, HOST_VARIABLES)
        .or_else(|| first_non_blank(env, PROXY_HOST_VARIABLES));
    let Some(host) = host else {
        debug!("No MySQL host variable set");
        return None;
    };

    let port_value =
        first_non_blank(env, PORT_VARIABLES).or_else(|| first_non_blank(env, PROXY_PORT_VARIABLES));
    let port = parse_port(port_value.as_deref());

    let database = first_non_blank(env, DATABASE_VARIABLES);
    let username = first_present(env, USERNAME_VARIABLES);
    let password = first_present(env, PASSWORD_VARIABLES);

    Some(ConnectionDescriptor::new(
        host,
        port,
        database,
        ParameterSet::new(),
        username,
        password,
        DISCRETE_SOURCE,
    ))
}

/// Parse a port, falling back to [`DEFAULT_PORT`] for anything that is not a
/// positive integer.
pub fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|v| v.trim().parse::<u16>().ok())
        .filter(|p| *p > 0)
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsenv_config::MapEnvSource;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_host_no_descriptor() {
        let env = MapEnvSource::new()
            .set("MYSQLPORT", "3307")
            .set("MYSQLUSER", "root")
            .set("MYSQLHOST", "   ");
        assert!(resolve_discrete(&env).is_none());
    }

    #[test]
    fn test_host_only_defaults() {
        let env = MapEnvSource::new().set("MYSQLHOST", "10.0.0.5");
        let d = resolve_discrete(&env).unwrap();
        assert_eq!(d.host(), "10.0.0.5");
        assert_eq!(d.port(), 3306);
        assert_eq!(d.database(), None);
        assert_eq!(d.username(), None);
        assert_eq!(d.password(), None);
        assert_eq!(d.source(), DISCRETE_SOURCE);
        assert_eq!(
            d.url(),
            "jdbc:mysql://10.0.0.5:3306?useSSL=false&serverTimezone=UTC&allowPublicKeyRetrieval=true&useUnicode=true&characterEncoding=utf8"
        );
    }

    #[test]
    fn test_host_priority() {
        let env = MapEnvSource::new()
            .set("MYSQL_HOSTNAME", "fourth")
            .set("MYSQL_HOST", "third")
            .set("MYSQLHOSTNAME", "")
            .set("RAILWAY_TCP_PROXY_DOMAIN", "proxy");
        assert_eq!(resolve_discrete(&env).unwrap().host(), "third");
    }

    #[test]
    fn test_proxy_fallback() {
        let env = MapEnvSource::new()
            .set("RAILWAY_TCP_HOST", "tcp.example.net")
            .set("RAILWAY_TCP_PROXY_PORT", "41234")
            .set("MYSQLDATABASE", "railway");
        let d = resolve_discrete(&env).unwrap();
        assert_eq!(d.host(), "tcp.example.net");
        assert_eq!(d.port(), 41234);
        assert_eq!(d.database(), Some("railway"));
    }

    #[test]
    fn test_primary_port_beats_proxy_port() {
        let env = MapEnvSource::new()
            .set("MYSQLHOST", "h")
            .set("MYSQL_PORT", "3310")
            .set("RAILWAY_TCP_PROXY_PORT", "41234");
        assert_eq!(resolve_discrete(&env).unwrap().port(), 3310);
    }

    #[test]
    fn test_invalid_port_uses_default() {
        let env = MapEnvSource::new().set("MYSQLHOST", "h").set("MYSQLPORT", "abc");
        assert_eq!(resolve_discrete(&env).unwrap().port(), 3306);
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(None), 3306);
        assert_eq!(parse_port(Some(" 3307 ")), 3307);
        assert_eq!(parse_port(Some("0")), 3306);
        assert_eq!(parse_port(Some("-1")), 3306);
        assert_eq!(parse_port(Some("99999")), 3306);
        assert_eq!(parse_port(Some("")), 3306);
    }

    #[test]
    fn test_explicit_empty_username() {
        let env = MapEnvSource::new()
            .set("MYSQLHOST", "10.0.0.5")
            .set("MYSQLUSER", "")
            .set("MYSQL_USER", "ignored")
            .set("MYSQLPASSWORD", "secret");
        let d = resolve_discrete(&env).unwrap();
        assert_eq!(d.username(), Some(""));
        assert_eq!(d.password(), Some("secret"));
        assert_eq!(d.port(), 3306);
    }

    #[test]
    fn test_username_and_password_fallback_names() {
        let env = MapEnvSource::new()
            .set("MYSQLHOST", "h")
            .set("MYSQL_USERNAME", "app")
            .set("MYSQL_ROOT_PASSWORD", "rootpw");
        let d = resolve_discrete(&env).unwrap();
        assert_eq!(d.username(), Some("app"));
        assert_eq!(d.password(), Some("rootpw"));
    }
}

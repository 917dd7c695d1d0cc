//! Structured fuzz target for full resolution.
//!
//! Builds an environment from arbitrary values for the recognized variable
//! names and checks that resolution is deterministic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_environment
//! ```

#![no_main]

use arbitrary::Arbitrary;
use dsenv_config::MapEnvSource;
use dsenv_mysql::Resolution;
use libfuzzer_sys::fuzz_target;

/// A structured environment for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzEnv {
    mysql_url: Option<String>,
    database_url: Option<String>,
    host: Option<String>,
    proxy_domain: Option<String>,
    port: Option<String>,
    user: Option<String>,
    password: Option<String>,
    database: Option<String>,
}

impl FuzzEnv {
    fn to_env(&self) -> MapEnvSource {
        let vars = [
            ("MYSQL_URL", &self.mysql_url),
            ("DATABASE_URL", &self.database_url),
            ("MYSQLHOST", &self.host),
            ("RAILWAY_TCP_PROXY_DOMAIN", &self.proxy_domain),
            ("MYSQLPORT", &self.port),
            ("MYSQLUSER", &self.user),
            ("MYSQLPASSWORD", &self.password),
            ("MYSQLDATABASE", &self.database),
        ];
        vars.into_iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| (name, v.as_str())))
            .fold(MapEnvSource::new(), |env, (name, value)| env.set(name, value))
    }
}

fuzz_target!(|input: FuzzEnv| {
    let env = input.to_env();
    let first = Resolution::from_env(&env);
    let second = Resolution::from_env(&env);
    assert_eq!(first, second);
    assert_eq!(first.is_resolved(), !first.overrides.is_empty());
});

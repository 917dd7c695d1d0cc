//! `dsenv sources` command - List configuration sources in priority order.

use dsenv_config::ConfigStore;
use dsenv_mysql::MysqlEnvironmentPostProcessor;

use crate::cli::SourcesArgs;
use crate::error::CliResult;
use crate::output;

/// Run the sources command
pub fn run(args: SourcesArgs) -> CliResult<()> {
    let mut store = crate::load_store(&args.config)?;
    if args.resolve {
        store.apply(&MysqlEnvironmentPostProcessor::new());
    }

    output::header("Configuration sources");
    for line in describe(&store) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per source: position, name and property count.
pub fn describe(store: &ConfigStore) -> Vec<String> {
    store
        .sources()
        .enumerate()
        .map(|(index, source)| {
            format!("{}. {} ({} properties)", index + 1, source.name(), source.len())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsenv_config::PropertySource;

    #[test]
    fn test_describe_in_priority_order() {
        let mut store = ConfigStore::new();
        store.add_last(PropertySource::environment("systemEnvironment", [("MYSQLHOST", "h")]));
        store.add_last(PropertySource::map("file:app.toml"));
        store.apply(&MysqlEnvironmentPostProcessor::new());

        assert_eq!(
            describe(&store),
            vec![
                "1. platformMysqlOverrides (2 properties)",
                "2. systemEnvironment (1 properties)",
                "3. file:app.toml (0 properties)",
            ]
        );
    }
}

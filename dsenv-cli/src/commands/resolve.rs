//! `dsenv resolve` command - Resolve the environment and print the overrides.

use dsenv_config::EnvironmentPostProcessor;
use dsenv_mysql::{DatasourceOverrides, MysqlEnvironmentPostProcessor};

use crate::cli::{OutputFormat, ResolveArgs};
use crate::error::{CliError, CliResult};
use crate::output::{self, kv};

/// Run the resolve command
pub fn run(args: ResolveArgs) -> CliResult<()> {
    let mut store = crate::load_store(&args.config)?;
    let processor = MysqlEnvironmentPostProcessor::new();
    let (outcome, resolution) = processor.post_process(&mut store);

    let Some(descriptor) = resolution.descriptor.as_ref() else {
        output::warn("No MySQL environment variables detected");
        return Err(CliError::Unresolved);
    };

    output::header("Resolved datasource");
    kv("Source", descriptor.source());
    kv("Host", descriptor.host());
    kv("Port", &descriptor.port().to_string());
    kv("Database", descriptor.database().unwrap_or("<default>"));
    kv("Layer", &format!("{:?}", outcome));
    output::newline();

    let overrides = if args.show_secrets {
        resolution.overrides
    } else {
        resolution.overrides.redacted()
    };
    print!("{}", render(&overrides, args.format)?);

    output::success("Overrides installed");
    Ok(())
}

/// Render overrides in the requested format.
pub fn render(overrides: &DatasourceOverrides, format: OutputFormat) -> CliResult<String> {
    let rendered = match format {
        OutputFormat::Env => overrides
            .iter()
            .map(|(k, v)| format!("{}={}\n", k, v))
            .collect(),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(overrides)?),
        OutputFormat::Toml => toml::to_string(overrides)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsenv_config::MapEnvSource;
    use dsenv_mysql::Resolution;

    fn overrides() -> DatasourceOverrides {
        let env = MapEnvSource::new().set("MYSQL_URL", "mysql://root:pw@db:3307/app");
        Resolution::from_env(&env).overrides
    }

    #[test]
    fn test_render_env() {
        let out = render(&overrides(), OutputFormat::Env).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("datasource.url=jdbc:mysql://db:3307/app?"));
        assert_eq!(lines[1], "datasource.username=root");
        assert_eq!(lines[2], "datasource.password=pw");
        assert_eq!(lines[3], "datasource.pool.initialization-fail-timeout=0");
    }

    #[test]
    fn test_render_json_redacted() {
        let out = render(&overrides().redacted(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["datasource.password"], "********");
        assert_eq!(value["datasource.username"], "root");
    }

    #[test]
    fn test_render_toml() {
        let out = render(&overrides(), OutputFormat::Toml).unwrap();
        assert!(out.contains("\"datasource.username\" = \"root\""));
    }
}

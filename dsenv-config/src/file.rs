//! TOML configuration files as property sources.

use indexmap::IndexMap;
use std::path::Path;
use toml::{Table, Value};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::store::PropertySource;

/// Read a TOML file into a property source named `file:<path>`.
pub(crate) fn load_toml_file(path: &Path) -> ConfigResult<PropertySource> {
    let shown = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: shown.clone(),
        source: e,
    })?;

    let source = PropertySource::from_toml_str(format!("file:{}", shown), &content)?;
    info!(path = %shown, properties = source.len(), "Loaded configuration file");
    Ok(source)
}

/// Flatten a TOML document into dotted keys.
pub(crate) fn flatten_toml(name: &str, content: &str) -> ConfigResult<IndexMap<String, String>> {
    let table: Table = content
        .parse()
        .map_err(|e: toml::de::Error| ConfigError::toml(name, e.message()))?;

    let mut properties = IndexMap::new();
    flatten_table("", &table, &mut properties);
    debug!(source = %name, properties = properties.len(), "Flattened TOML document");
    Ok(properties)
}

fn flatten_table(prefix: &str, table: &Table, out: &mut IndexMap<String, String>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        flatten_value(path, value, out);
    }
}

fn flatten_value(path: String, value: &Value, out: &mut IndexMap<String, String>) {
    match value {
        Value::Table(table) => flatten_table(&path, table, out),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_value(format!("{}[{}]", path, index), item, out);
            }
        }
        Value::String(s) => {
            out.insert(path, s.clone());
        }
        Value::Integer(i) => {
            out.insert(path, i.to_string());
        }
        Value::Float(f) => {
            out.insert(path, f.to_string());
        }
        Value::Boolean(b) => {
            out.insert(path, b.to_string());
        }
        Value::Datetime(dt) => {
            out.insert(path, dt.to_string());
        }
    }
}

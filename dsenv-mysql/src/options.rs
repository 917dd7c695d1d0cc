//! Driver options carried in the query string of the JDBC URL.

use indexmap::IndexMap;
use std::fmt;

/// Driver options appended to every generated URL unless the operator already
/// supplied a case-insensitive match for the key.
pub const DEFAULT_OPTIONS: [(&str, &str); 5] = [
    ("useSSL", "false"),
    ("serverTimezone", "UTC"),
    ("allowPublicKeyRetrieval", "true"),
    ("useUnicode", "true"),
    ("characterEncoding", "utf8"),
];

/// Ordered set of driver parameters.
///
/// Keys keep the casing they were written with; presence checks for defaults
/// are case-insensitive. Iteration order is insertion order and decides the
/// order of the rendered query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    params: IndexMap<String, String>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`).
    ///
    /// Pairs are `&`-separated `key=value` or bare `key`. Blank pairs and
    /// blank keys are dropped; the first occurrence of a key wins. Keys and
    /// values are kept verbatim, percent-escapes included.
    pub fn parse_query(query: &str) -> Self {
        let mut set = Self::new();
        for pair in query.split('&') {
            if pair.trim().is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            set.insert_if_absent(key, value);
        }
        set
    }

    /// Insert a parameter unless the exact key is already present.
    ///
    /// Blank keys are ignored. Returns `true` if the parameter was added.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if key.trim().is_empty() || self.params.contains_key(&key) {
            return false;
        }
        self.params.insert(key, value.into());
        true
    }

    /// Check for a key, ignoring ASCII case.
    pub fn contains_ignore_case(&self, key: &str) -> bool {
        self.params.keys().any(|k| k.eq_ignore_ascii_case(key))
    }

    /// Get a value by exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Add every entry of [`DEFAULT_OPTIONS`] whose key is not already present
    /// in any casing. Existing entries are never touched.
    pub fn with_defaults(mut self) -> Self {
        for (key, value) in DEFAULT_OPTIONS {
            if !self.contains_ignore_case(key) {
                self.params.insert(key.to_string(), value.to_string());
            }
        }
        self
    }

    /// Render as a query string: `key` for empty values, else `key=value`,
    /// joined with `&`.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| {
                if value.is_empty() {
                    key.clone()
                } else {
                    format!("{}={}", key, value)
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Iterate over parameters in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.insert_if_absent(key, value);
        }
        set
    }
}

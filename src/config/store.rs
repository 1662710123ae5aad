use std::collections::BTreeMap;

use super::error::ConfigError;

/// Section holding credential values and host overrides.
pub const CREDENTIALS_SECTION: &str = "Credentials";

/// An in-memory configuration store organized into named sections.
///
/// Built from TOML or JSON documents whose top level is a table of
/// sections:
///
/// ```toml
/// [Credentials]
/// aws_access_key_id = "AKIA..."
/// s3_host = "s3.eu-west-1.amazonaws.com"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let root: toml::Table = toml::from_str(contents)?;
        let mut store = Self::new();
        for (section, value) in root {
            let toml::Value::Table(entries) = value else {
                return Err(ConfigError::NotASection(section));
            };
            for (key, value) in entries {
                let value = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    _ => return Err(ConfigError::InvalidValue { section, key }),
                };
                store.set(&section, key, value);
            }
        }
        Ok(store)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let root: serde_json::Map<String, serde_json::Value> = serde_json::from_str(contents)?;
        let mut store = Self::new();
        for (section, value) in root {
            let serde_json::Value::Object(entries) = value else {
                return Err(ConfigError::NotASection(section));
            };
            for (key, value) in entries {
                let value = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::Bool(b) => b.to_string(),
                    _ => return Err(ConfigError::InvalidValue { section, key }),
                };
                store.set(&section, key, value);
            }
        }
        Ok(store)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    pub fn has_option(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    pub fn section(&self, section: &str) -> Option<&BTreeMap<String, String>> {
        self.sections.get(section)
    }

    pub fn set(&mut self, section: &str, key: impl Into<String>, value: impl Into<String>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, section: &str, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(section, key, value);
        self
    }

    /// Overlays `other` on top of `self`; keys present in both take the
    /// value from `other`.
    pub fn merge(&mut self, other: ConfigStore) {
        for (section, entries) in other.sections {
            self.sections.entry(section).or_default().extend(entries);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

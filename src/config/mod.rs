//! Running-configuration container.
//!
//! [`ConfigMap`] keeps the dual personality of Crawlino's dynamic config
//! object: it is an insertion-ordered string map, and every key doubles as a
//! named field read and written through the same backing storage. There is no
//! schema; values are arbitrary JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Result alias for configuration lookups.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors surfaced by [`ConfigMap`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration key not found: {0:?}")]
    KeyNotFound(String),
}

/// Ordered key/value configuration with field-style access.
///
/// Reading or writing the field `x` is exactly reading or writing the mapping
/// key `"x"`; both paths share one store, so the equivalence cannot drift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap {
    entries: Map<String, Value>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field-style read. Fails when the key was never set.
    pub fn get(&self, key: &str) -> ConfigResult<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))
    }

    /// Mapping-style read returning `None` instead of an error.
    pub fn try_get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Inserts or overwrites; any value type is accepted.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Value)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<Map<String, Value>> for ConfigMap {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

//! Process-wide configuration registry.
//!
//! Holds the single running [`ConfigMap`] for the application plus one
//! configuration entry per named crawler. [`ConfigRegistry`] is a cheap
//! `Clone` handle over shared state guarded by a single lock; the module also
//! exposes [`current_config`] as the process-lifetime instance the rest of
//! the application reaches for when no registry is threaded through
//! explicitly.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use serde_json::Value;
use thiserror::Error;

use crate::config::ConfigMap;

/// Result alias used by registry lookups.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors surfaced by the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no crawler registered under {0:?}")]
    CrawlerNotFound(String),
    #[error("running configuration has not been initialized")]
    Unconfigured,
}

/// Anything that can hand the registry a name and a configuration document.
///
/// Mirrors the original registration flow where a crawler registers itself
/// under its own name during setup.
pub trait NamedConfig {
    fn name(&self) -> &str;
    fn to_config(&self) -> Value;
}

#[derive(Debug, Default)]
struct RegistryState {
    running_config: Option<ConfigMap>,
    crawlers: HashMap<String, Value>,
}

/// Thread-safe registry handle.
#[derive(Clone, Debug)]
pub struct ConfigRegistry {
    inner: Arc<RwLock<RegistryState>>,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryState::default())),
        }
    }

    /// Replaces the process-wide running configuration unconditionally.
    pub fn set_running_config(&self, config: ConfigMap) {
        let mut guard = self.inner.write().expect("registry lock poisoned");
        guard.running_config = Some(config);
    }

    /// Current running configuration, or [`RegistryError::Unconfigured`] when
    /// start-up has not populated it yet.
    pub fn running_config(&self) -> RegistryResult<ConfigMap> {
        self.try_running_config().ok_or(RegistryError::Unconfigured)
    }

    pub fn try_running_config(&self) -> Option<ConfigMap> {
        let guard = self.inner.read().expect("registry lock poisoned");
        guard.running_config.clone()
    }

    /// Stores `config` under `name`. Last write wins: re-registering an
    /// existing name silently replaces the prior entry.
    pub fn register_crawler(&self, name: impl Into<String>, config: Value) {
        let name = name.into();
        let mut guard = self.inner.write().expect("registry lock poisoned");
        if guard.crawlers.insert(name.clone(), config).is_some() {
            log::debug!("crawler {name:?} re-registered, replacing previous config");
        } else {
            log::debug!("crawler {name:?} registered");
        }
    }

    /// Registers a crawler under the name it reports for itself.
    pub fn register(&self, crawler: &dyn NamedConfig) {
        self.register_crawler(crawler.name(), crawler.to_config());
    }

    pub fn crawler_config(&self, name: &str) -> RegistryResult<Value> {
        let guard = self.inner.read().expect("registry lock poisoned");
        guard
            .crawlers
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::CrawlerNotFound(name.to_string()))
    }

    pub fn crawler_names(&self) -> Vec<String> {
        let guard = self.inner.read().expect("registry lock poisoned");
        guard.crawlers.keys().cloned().collect()
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static CURRENT_CONFIG: Lazy<ConfigRegistry> = Lazy::new(ConfigRegistry::new);

/// Registry shared by the whole process, created lazily on first access and
/// alive until exit. Crawler entries are never removed.
pub fn current_config() -> &'static ConfigRegistry {
    &CURRENT_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn running_config_starts_unset() {
        let registry = ConfigRegistry::new();
        assert!(matches!(
            registry.running_config(),
            Err(RegistryError::Unconfigured)
        ));
        assert!(registry.try_running_config().is_none());
    }

    #[test]
    fn running_config_overwrite_is_unconditional() {
        let registry = ConfigRegistry::new();

        let mut first = ConfigMap::new();
        first.set("threads", 4);
        registry.set_running_config(first);

        let mut second = ConfigMap::new();
        second.set("threads", 16);
        registry.set_running_config(second);

        let current = registry.running_config().unwrap();
        assert_eq!(current.get("threads").unwrap(), &json!(16));
    }

    #[test]
    fn crawler_registration_is_last_write_wins() {
        let registry = ConfigRegistry::new();
        registry.register_crawler("news", json!({"depth": 1}));
        registry.register_crawler("news", json!({"depth": 9}));

        assert_eq!(
            registry.crawler_config("news").unwrap(),
            json!({"depth": 9})
        );
    }

    #[test]
    fn unknown_crawler_is_an_error() {
        let registry = ConfigRegistry::new();
        assert!(matches!(
            registry.crawler_config("ghost"),
            Err(RegistryError::CrawlerNotFound(name)) if name == "ghost"
        ));
    }

    #[test]
    fn registers_through_named_config() {
        struct Spider;

        impl NamedConfig for Spider {
            fn name(&self) -> &str {
                "spider"
            }

            fn to_config(&self) -> Value {
                json!({"start_url": "https://example.com"})
            }
        }

        let registry = ConfigRegistry::new();
        registry.register(&Spider);
        let config = registry.crawler_config("spider").unwrap();
        assert_eq!(config["start_url"], json!("https://example.com"));
    }

    #[test]
    fn handles_share_state() {
        let registry = ConfigRegistry::new();
        let clone = registry.clone();
        clone.register_crawler("shared", json!(null));
        assert!(registry.crawler_config("shared").is_ok());
    }
}

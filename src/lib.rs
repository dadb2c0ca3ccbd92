//! # crawlino-rs
//!
//! A Rust-first take on the configuration core of the classic Python
//! Crawlino crawler.
//!
//! The crate is still early-stage. It covers the shared state model of the
//! application (running configuration plus per-crawler registrations) and the
//! utilities everything else leans on; fetching and extraction live in
//! sibling crates.
//!
//! ## Features
//!
//! - Ordered key/value configuration with field-style access
//! - Process-wide registry of per-crawler configurations
//! - Structural conversion of JSON documents into object graphs
//! - Deterministic config-file resolution (working dir, then `~/.crawlino`)
//! - CLI verbosity to severity-threshold mapping
//!
//! ## Example
//!
//! ```
//! use crawlino_rs::{ConfigMap, current_config};
//!
//! let mut config = ConfigMap::new();
//! config.set("user_agent", "crawlino/0.1");
//! current_config().set_running_config(config);
//!
//! let running = current_config().running_config()?;
//! assert_eq!(running.get("user_agent")?.as_str(), Some("crawlino/0.1"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod convert;
pub mod locator;
pub mod logging;
pub mod registry;
pub mod text;

pub use crate::config::{ConfigError, ConfigMap, ConfigResult};

pub use crate::convert::{
    ConvertError,
    ConvertResult,
    ObjectGraph,
    ObjectNode,
    convert_value,
    convert_value_visited,
    json_to_object,
};

pub use crate::locator::{CRAWLINO_DIR, LocatorError, crawlino_home, find_file, find_file_in};

pub use crate::logging::{QUIET_THRESHOLD, level_filter, resolve_log_level};

pub use crate::registry::{
    ConfigRegistry,
    NamedConfig,
    RegistryError,
    RegistryResult,
    current_config,
};

pub use crate::text::{ACTION_PATTERN, ActionCall, parse_action, un_camel};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

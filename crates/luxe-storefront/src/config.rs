//! Storefront configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

/// Storefront configuration file.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Where persisted state lives.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Simulated service timings.
    #[serde(default)]
    pub timings: TimingConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file (JSON if the extension is `.json`, TOML otherwise).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Configuration for tests and tooling: in-memory storage, no delays.
    pub fn instant() -> Self {
        Self {
            storage: StorageConfig::default(),
            timings: TimingConfig {
                network_latency_ms: 0,
                search_debounce_ms: 0,
                checkout_delay_ms: 0,
            },
            logging: LoggingConfig::default(),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Storage backend selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Keep state in memory only.
    #[default]
    Memory,
    /// One JSON file per key under `dir`.
    File { dir: PathBuf },
}

/// Simulated service timings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingConfig {
    /// Delay before mock product/auth calls resolve.
    #[serde(default = "default_network_latency_ms")]
    pub network_latency_ms: u64,

    /// Quiet period before a typed search query is applied.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Simulated payment processing time.
    #[serde(default = "default_checkout_delay_ms")]
    pub checkout_delay_ms: u64,
}

impl TimingConfig {
    pub fn network_latency(&self) -> Duration {
        Duration::from_millis(self.network_latency_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            network_latency_ms: default_network_latency_ms(),
            search_debounce_ms: default_search_debounce_ms(),
            checkout_delay_ms: default_checkout_delay_ms(),
        }
    }
}

fn default_network_latency_ms() -> u64 {
    400
}

fn default_search_debounce_ms() -> u64 {
    250
}

fn default_checkout_delay_ms() -> u64 {
    1200
}

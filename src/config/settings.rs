//! Application settings configuration
//!
//! Defines certificate inspection, WHOIS and store settings. Everything is
//! passed explicitly into the scanner; there is no ambient global state.

use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Certificate inspection settings
#[derive(Debug, Clone, Deserialize)]
pub struct SslSettings {
    pub connect_timeout_secs: u64,
    pub handshake_timeout_secs: u64,
}

impl Default for SslSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            handshake_timeout_secs: 10,
        }
    }
}

impl SslSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.handshake_timeout_secs)
    }
}

/// WHOIS settings
#[derive(Debug, Clone, Deserialize)]
pub struct WhoisSettings {
    pub timeout_secs: u64,
    pub retry_count: u32,
    pub backoff_base_ms: u64,
}

impl Default for WhoisSettings {
    /// A single attempt by default: a failed lookup is recorded as degraded
    /// rather than retried, keeping scan latency bounded.
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            retry_count: 1,
            backoff_base_ms: 1000,
        }
    }
}

impl WhoisSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }
}

/// Assessment store settings
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub database_url: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_url: "sqlite://trustscan.db".to_string(),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub ssl: SslSettings,
    #[serde(default)]
    pub whois: WhoisSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }
}

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{Result, ShippingError};

pub const DEFAULT_CONFIG_PATH: &str = "fio_shipping.toml";
pub const DEFAULT_FIO_BASE_URL: &str = "https://rest.fnar.net";
pub const FIO_API_KEY_ENV: &str = "FIO_API_KEY";
pub const FIO_USERNAME_ENV: &str = "FIO_USERNAME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingConfig {
    pub fio: FioConfig,
    pub calculator: CalculatorConfig,
    pub logging: LoggingConfig,
}

/// Where the active configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    File,
    /// Defaults were written to a new file
    Created,
    /// Defaults only, nothing written
    Defaults,
}

impl ConfigOrigin {
    pub fn announce(self, config_path: &str) {
        match self {
            ConfigOrigin::File => tracing::info!("📋 Loaded configuration from {}", config_path),
            ConfigOrigin::Created => {
                tracing::warn!("📋 Created default configuration at {}", config_path);
                tracing::warn!("💡 Edit {} to set your FIO credentials", config_path);
            }
            ConfigOrigin::Defaults => {
                tracing::info!("📋 No configuration at {}, using defaults", config_path)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FioConfig {
    /// Base URL of the FIO REST API
    pub base_url: String,
    /// FIO username; falls back to FIO_USERNAME when empty
    #[serde(default)]
    pub username: String,
    /// FIO API key; falls back to FIO_API_KEY when empty
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Planets fetched and evaluated at the same time
    pub max_concurrent_planets: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 0=warnings only, 1=basic, 2=debug, 3=trace
    pub verbosity: u8,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            fio: FioConfig {
                base_url: DEFAULT_FIO_BASE_URL.to_string(),
                username: String::new(),
                api_key: String::new(),
            },
            calculator: CalculatorConfig {
                max_concurrent_planets: crate::operations::DEFAULT_MAX_CONCURRENT_PLANETS,
            },
            logging: LoggingConfig { verbosity: 1 },
        }
    }
}

impl ShippingConfig {
    /// Load configuration from file. A missing file yields the defaults, which
    /// are also written to `config_path` when `create_missing` is set.
    ///
    /// Logs nothing; call [`ConfigOrigin::announce`] once logging is up.
    pub fn load(config_path: &str, create_missing: bool) -> Result<(Self, ConfigOrigin)> {
        if Path::new(config_path).exists() {
            let config_str = fs::read_to_string(config_path)
                .map_err(|e| ShippingError::Config(format!("failed to read {}: {}", config_path, e)))?;
            let config: ShippingConfig = toml::from_str(&config_str)
                .map_err(|e| ShippingError::Config(format!("failed to parse {}: {}", config_path, e)))?;
            return Ok((config, ConfigOrigin::File));
        }

        let config = ShippingConfig::default();
        if create_missing {
            config.save(config_path)?;
            Ok((config, ConfigOrigin::Created))
        } else {
            Ok((config, ConfigOrigin::Defaults))
        }
    }

    pub fn save(&self, config_path: &str) -> Result<()> {
        if let Some(parent) = Path::new(config_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| ShippingError::Config(format!("failed to create {}: {}", parent.display(), e)))?;
            }
        }

        let config_str = toml::to_string_pretty(self)
            .map_err(|e| ShippingError::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(config_path, config_str)
            .map_err(|e| ShippingError::Config(format!("failed to write {}: {}", config_path, e)))?;
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.fio.base_url.trim().is_empty() {
            return Err("fio.base_url must not be empty".to_string());
        }
        if !self.fio.base_url.starts_with("http://") && !self.fio.base_url.starts_with("https://") {
            return Err("fio.base_url must start with http:// or https://".to_string());
        }
        if self.calculator.max_concurrent_planets == 0 {
            return Err("calculator.max_concurrent_planets must be greater than 0".to_string());
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Configuration Summary:");
        tracing::info!("   🌐 FIO API: {}", self.fio.base_url);
        tracing::info!(
            "   👤 FIO user: {}",
            if self.fio.username.is_empty() { "(from environment)" } else { self.fio.username.as_str() }
        );
        tracing::info!("   🪐 Concurrent planets: {}", self.calculator.max_concurrent_planets);
    }
}

impl FioConfig {
    /// (api_key, username), taking the environment for any value left empty.
    pub fn resolve_credentials(&self) -> Result<(String, String)> {
        let pick = |configured: &str, var: &str| {
            if configured.is_empty() {
                env::var(var).unwrap_or_default()
            } else {
                configured.to_string()
            }
        };

        let api_key = pick(&self.api_key, FIO_API_KEY_ENV);
        let username = pick(&self.username, FIO_USERNAME_ENV);

        if api_key.is_empty() || username.is_empty() {
            return Err(ShippingError::Config(format!(
                "set fio.api_key and fio.username or the {} and {} environment variables",
                FIO_API_KEY_ENV, FIO_USERNAME_ENV
            )));
        }
        Ok((api_key, username))
    }
}

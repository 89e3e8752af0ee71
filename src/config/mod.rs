#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_PRICING_ENDPOINT: &str = "http://localhost:8082";
pub const DEFAULT_MAPS_ENDPOINT: &str = "http://localhost:9191";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;

/// Resolved settings: built-in defaults, then the TOML file, then command
/// line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pricing_endpoint: String,
    pub maps_endpoint: String,
    pub price_timeout_seconds: u64,
    pub address_timeout_seconds: u64,
    /// `None` keeps vehicles in memory for the lifetime of the process.
    pub data_file: Option<String>,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pricing_endpoint: DEFAULT_PRICING_ENDPOINT.to_string(),
            maps_endpoint: DEFAULT_MAPS_ENDPOINT.to_string(),
            price_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            address_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            data_file: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl Settings {
    pub fn apply_toml(&mut self, config: &TomlConfig) {
        if let Some(pricing) = &config.pricing {
            if let Some(endpoint) = &pricing.endpoint {
                self.pricing_endpoint = endpoint.clone();
            }
            if let Some(timeout) = pricing.timeout_seconds {
                self.price_timeout_seconds = timeout;
            }
        }
        if let Some(maps) = &config.maps {
            if let Some(endpoint) = &maps.endpoint {
                self.maps_endpoint = endpoint.clone();
            }
            if let Some(timeout) = maps.timeout_seconds {
                self.address_timeout_seconds = timeout;
            }
        }
        if let Some(data_file) = config.store.as_ref().and_then(|s| s.data_file.clone()) {
            self.data_file = Some(data_file);
        }
        self.verbose |= config.verbose();
        self.json_logs |= config.json_logs();
    }

    pub fn from_toml(config: &TomlConfig) -> Self {
        let mut settings = Self::default();
        settings.apply_toml(config);
        settings
    }
}

impl ConfigProvider for Settings {
    fn pricing_endpoint(&self) -> &str {
        &self.pricing_endpoint
    }

    fn maps_endpoint(&self) -> &str {
        &self.maps_endpoint
    }

    fn price_timeout(&self) -> Duration {
        Duration::from_secs(self.price_timeout_seconds)
    }

    fn address_timeout(&self) -> Duration {
        Duration::from_secs(self.address_timeout_seconds)
    }

    fn data_file(&self) -> Option<&str> {
        self.data_file.as_deref()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("pricing.endpoint", &self.pricing_endpoint)?;
        validation::validate_url("maps.endpoint", &self.maps_endpoint)?;
        validation::validate_positive_number(
            "pricing.timeout_seconds",
            self.price_timeout_seconds,
            1,
        )?;
        validation::validate_positive_number(
            "maps.timeout_seconds",
            self.address_timeout_seconds,
            1,
        )?;

        if let Some(data_file) = &self.data_file {
            validation::validate_path("store.data_file", data_file)?;
            validation::validate_file_extensions(
                "store.data_file",
                std::slice::from_ref(data_file),
                &["json"],
            )?;
        }
        Ok(())
    }
}

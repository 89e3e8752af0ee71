use crate::utils::error::{Result, VehicleError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of a `vehicles.toml` file. Every section is optional; anything
/// left out falls back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pricing: Option<RemoteServiceConfig>,
    pub maps: Option<RemoteServiceConfig>,
    pub store: Option<StoreConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteServiceConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub data_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| VehicleError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| VehicleError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAPS_ENDPOINT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VehicleError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

fn validate_remote(section: &str, remote: &RemoteServiceConfig) -> Result<()> {
    if let Some(endpoint) = &remote.endpoint {
        validation::validate_url(&format!("{}.endpoint", section), endpoint)?;
    }
    if let Some(timeout) = remote.timeout_seconds {
        validation::validate_positive_number(&format!("{}.timeout_seconds", section), timeout, 1)?;
    }
    Ok(())
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(pricing) = &self.pricing {
            validate_remote("pricing", pricing)?;
        }
        if let Some(maps) = &self.maps {
            validate_remote("maps", maps)?;
        }
        if let Some(data_file) = self.store.as_ref().and_then(|s| s.data_file.as_ref()) {
            validation::validate_path("store.data_file", data_file)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[pricing]
endpoint = "http://pricing.internal:8082"
timeout_seconds = 2

[maps]
endpoint = "http://maps.internal:9191"

[store]
data_file = "./data/vehicles.json"

[logging]
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        let pricing = config.pricing.as_ref().unwrap();
        assert_eq!(
            pricing.endpoint.as_deref(),
            Some("http://pricing.internal:8082")
        );
        assert_eq!(pricing.timeout_seconds, Some(2));
        assert_eq!(config.maps.as_ref().unwrap().timeout_seconds, None);
        assert_eq!(
            config.store.as_ref().unwrap().data_file.as_deref(),
            Some("./data/vehicles.json")
        );
        assert!(config.json_logs());
        assert!(!config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_config() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.pricing.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VEHICLES_TEST_MAPS_ENDPOINT", "https://maps.example.com");

        let toml_content = r#"
[maps]
endpoint = "${VEHICLES_TEST_MAPS_ENDPOINT}"

[pricing]
endpoint = "${VEHICLES_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.maps.unwrap().endpoint.as_deref(),
            Some("https://maps.example.com")
        );
        assert_eq!(
            config.pricing.unwrap().endpoint.as_deref(),
            Some("${VEHICLES_TEST_UNSET_VARIABLE}")
        );

        std::env::remove_var("VEHICLES_TEST_MAPS_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let invalid_url = TomlConfig::from_toml_str(
            r#"
[pricing]
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(invalid_url.validate().is_err());

        let zero_timeout = TomlConfig::from_toml_str(
            r#"
[maps]
timeout_seconds = 0
"#,
        )
        .unwrap();
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[pricing\nendpoint =").unwrap_err();
        assert!(matches!(err, VehicleError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[store]\ndata_file = \"fleet.json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.store.unwrap().data_file.as_deref(),
            Some("fleet.json")
        );
    }
}

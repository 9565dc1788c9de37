use crate::config::{FleetSettings, DEFAULT_TIMEOUT_SECONDS};
use crate::core::ResourceKind;
use crate::utils::error::{FleetError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// `fleet.toml` 的結構
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    pub api: ApiConfig,
    pub endpoints: Option<HashMap<String, String>>,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: String,
}

impl FleetConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FleetError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FleetError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FLEET_API_TOKEN})；未設定的變數原樣保留
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FleetError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_settings(self) -> Result<FleetSettings> {
        if self.api.base_url.trim().is_empty() {
            return Err(FleetError::MissingConfigError {
                field: "api.base_url".to_string(),
            });
        }

        let mut settings = FleetSettings::new(self.api.base_url)
            .with_timeout_seconds(self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS));

        if let Some(headers) = self.api.headers {
            settings.headers = headers;
        }

        for (key, path) in self.endpoints.unwrap_or_default() {
            let kind = ResourceKind::from_config_key(&key).ok_or_else(|| {
                FleetError::InvalidConfigValueError {
                    field: format!("endpoints.{}", key),
                    value: path.clone(),
                    reason: format!(
                        "Unknown resource. Valid keys: {}",
                        ResourceKind::ALL
                            .iter()
                            .map(|k| k.config_key())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                }
            })?;
            settings.endpoints.insert(kind, path);
        }

        if let Some(export) = self.export {
            settings.output_path = export.output_path;
        }

        Ok(settings)
    }
}

impl Validate for FleetConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_settings()?.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
base_url = "http://localhost:5328/api"
timeout_seconds = 5

[api.headers]
X-Client = "fleet-admin"

[endpoints]
docking_cycli = "docking-cyclus"

[export]
output_path = "./snapshots"
"#;

        let settings = FleetConfig::from_toml_str(toml_content)
            .unwrap()
            .into_settings()
            .unwrap();

        assert_eq!(settings.api_base_url(), "http://localhost:5328/api");
        assert_eq!(settings.timeout_seconds, 5);
        assert_eq!(settings.headers.get("X-Client").unwrap(), "fleet-admin");
        assert_eq!(
            settings.endpoint_path(ResourceKind::DockingCyclus),
            "docking-cyclus"
        );
        assert_eq!(settings.output_path(), "./snapshots");
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let settings = FleetConfig::from_toml_str("[api]\nbase_url = \"https://api.example.com\"\n")
            .unwrap()
            .into_settings()
            .unwrap();
        assert_eq!(settings.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(settings.endpoint_path(ResourceKind::Zone), "zones");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FLEET_TEST_BASE_URL", "https://fleet.test/api");

        let config = FleetConfig::from_toml_str(
            "[api]\nbase_url = \"${FLEET_TEST_BASE_URL}\"\n",
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://fleet.test/api");

        std::env::remove_var("FLEET_TEST_BASE_URL");
    }

    #[test]
    fn test_unknown_endpoint_key_is_rejected() {
        let config = FleetConfig::from_toml_str(
            "[api]\nbase_url = \"https://api.example.com\"\n\n[endpoints]\npilots = \"pilots\"\n",
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(FleetError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let config = FleetConfig::from_toml_str("[api]\nbase_url = \"invalid-url\"\n").unwrap();
        assert!(config.validate().is_err());
        assert!(FleetConfig::from_toml_str("[api]\n").is_err());
    }

    #[test]
    fn test_empty_base_url_is_missing() {
        let config = FleetConfig::from_toml_str("[api]\nbase_url = \"\"\n").unwrap();
        assert!(matches!(
            config.into_settings(),
            Err(FleetError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nbase_url = \"https://api.example.com\"\ntimeout_seconds = 12\n")
            .unwrap();

        let config = FleetConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api.timeout_seconds, Some(12));
    }
}

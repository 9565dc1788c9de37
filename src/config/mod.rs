pub mod cli;
#[cfg(feature = "cli")]
pub mod commands;
pub mod toml_config;

pub use cli::LocalStorage;
#[cfg(feature = "cli")]
pub use commands::CliConfig;
pub use toml_config::FleetConfig;

use crate::core::{ConfigProvider, ResourceKind};
use crate::utils::error::{FleetError, Result};
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://drone.ziasvannes.tech/api";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_OUTPUT_PATH: &str = "./output";

/// 最終生效的設定：預設值 ← TOML 檔 ← 命令列參數
#[derive(Debug, Clone)]
pub struct FleetSettings {
    pub api_base_url: String,
    pub timeout_seconds: u64,
    pub headers: HashMap<String, String>,
    pub endpoints: HashMap<ResourceKind, String>,
    pub output_path: String,
}

impl FleetSettings {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, kind: ResourceKind, path: impl Into<String>) -> Self {
        self.endpoints.insert(kind, path.into());
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<String>) -> Self {
        self.output_path = output_path.into();
        self
    }
}

impl Default for FleetSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            headers: HashMap::new(),
            endpoints: HashMap::new(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

impl ConfigProvider for FleetSettings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn extra_headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn endpoint_path(&self, kind: ResourceKind) -> String {
        self.endpoints
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| kind.default_path().to_string())
    }
}

impl Validate for FleetSettings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api_base_url)?;
        validate_positive_number("api.timeout_seconds", self.timeout_seconds, 1)?;
        validate_path("export.output_path", &self.output_path)?;

        for (kind, path) in &self.endpoints {
            if path.trim_matches('/').trim().is_empty() {
                return Err(FleetError::InvalidConfigValueError {
                    field: format!("endpoints.{}", kind.config_key()),
                    value: path.clone(),
                    reason: "Endpoint path cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

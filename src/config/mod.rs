#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

use crate::core::{ConfigProvider, ProviderConfig};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_required_field, validate_url, Validate,
};
use toml_config::{LogFormat, TomlConfig};

/// Where the backend listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3030";

/// Effective settings after the file and command line are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub provider: Option<ProviderConfig>,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            provider: None,
            log_format: LogFormat::default(),
            verbose: false,
        }
    }
}

impl Settings {
    pub fn from_toml(file: TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            base_url: file
                .base_url()
                .map(str::to_string)
                .unwrap_or(defaults.base_url),
            log_format: file.log_format().unwrap_or(defaults.log_format),
            verbose: file.verbose(),
            provider: file.provider,
        }
    }

    pub fn provider(&self) -> Result<&ProviderConfig> {
        validate_required_field("provider", &self.provider)
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("provider.api_key", &self.api_key)?;
        validate_non_empty_string("provider.auth_domain", &self.auth_domain)?;
        validate_non_empty_string("provider.project_id", &self.project_id)?;
        validate_non_empty_string("provider.storage_bucket", &self.storage_bucket)?;
        validate_non_empty_string("provider.messaging_sender_id", &self.messaging_sender_id)?;
        validate_non_empty_string("provider.app_id", &self.app_id)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn api_base_url(&self) -> &str {
        &self.base_url
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        if let Some(provider) = &self.provider {
            provider.validate()?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Resolved provider settings: defaults, then the config file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub model: String,
    pub api_base_url: String,
    pub api_key_env: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ConfigProvider for ProviderSettings {
    fn model(&self) -> &str {
        &self.model
    }

    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn api_key_env(&self) -> &str {
        &self.api_key_env
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Validate for ProviderSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("model", &self.model)?;
        validation::validate_url("api_base_url", &self.api_base_url)?;
        validation::validate_env_var_name("api_key_env", &self.api_key_env)?;
        if let Some(timeout) = self.request_timeout_secs {
            validation::validate_positive_number("request_timeout_secs", timeout, 1)?;
        }
        Ok(())
    }
}

use crate::config::toml_config::TomlConfig;
use crate::config::ProviderSettings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "option-scale")]
#[command(about = "Compare two options and let the AI weigh the pros and cons")]
pub struct CliConfig {
    #[arg(long, short = 'a', help = "First option; runs a single comparison when given")]
    pub option_a: Option<String>,

    #[arg(long, short = 'b', help = "Second option; runs a single comparison when given")]
    pub option_b: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub api_base_url: Option<String>,

    #[arg(long, help = "Environment variable holding the API key")]
    pub api_key_env: Option<String>,

    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    #[arg(long, help = "TOML file with a [provider] section")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Print the comparison as JSON instead of panels")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Either option on the command line selects a single non-interactive run.
    pub fn is_one_shot(&self) -> bool {
        self.option_a.is_some() || self.option_b.is_some()
    }

    pub fn provider_settings(&self) -> Result<ProviderSettings> {
        let mut settings = ProviderSettings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading provider config from {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        if let Some(model) = &self.model {
            settings.model = model.clone();
        }
        if let Some(base_url) = &self.api_base_url {
            settings.api_base_url = base_url.clone();
        }
        if let Some(api_key_env) = &self.api_key_env {
            settings.api_key_env = api_key_env.clone();
        }
        if self.request_timeout_secs.is_some() {
            settings.request_timeout_secs = self.request_timeout_secs;
        }

        settings.validate()?;
        Ok(settings)
    }
}

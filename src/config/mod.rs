#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Resolved settings: file values, with an explicit server URL taking precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub endpoint_path: String,
    pub submit_label: String,
    pub busy_label: String,
}

impl Settings {
    pub fn resolve(file: &TomlConfig, server_override: Option<&str>) -> Self {
        Self {
            server_url: server_override.unwrap_or(file.server_url()).to_string(),
            endpoint_path: file.endpoint_path().to_string(),
            submit_label: file.submit_label().to_string(),
            busy_label: file.busy_label().to_string(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(config: &CliConfig) -> Result<Self> {
        let file = match &config.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        Ok(Self::resolve(&file, config.server.as_deref()))
    }
}

impl ConfigProvider for Settings {
    fn server_url(&self) -> &str {
        &self.server_url
    }

    fn endpoint_path(&self) -> &str {
        &self.endpoint_path
    }

    fn submit_label(&self) -> &str {
        &self.submit_label
    }

    fn busy_label(&self) -> &str {
        &self.busy_label
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("server", &self.server_url)?;
        validation::validate_endpoint_path("endpoint_path", &self.endpoint_path)?;
        validation::validate_non_empty_string("submit_label", &self.submit_label)?;
        validation::validate_non_empty_string("busy_label", &self.busy_label)?;
        Ok(())
    }
}

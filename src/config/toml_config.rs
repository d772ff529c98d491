use crate::adapters::http::DEPLOY_ENDPOINT;
use crate::adapters::page::DEFAULT_SUBMIT_LABEL;
use crate::core::handler::DEFAULT_BUSY_LABEL;
use crate::core::ConfigProvider;
use crate::utils::error::{DeployError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub endpoint_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    pub submit_label: Option<String>,
    pub busy_label: Option<String>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DeployError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DeployError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values; unset ones are kept.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DeployError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn server_url(&self) -> &str {
        self.server.base_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    fn endpoint_path(&self) -> &str {
        self.server.endpoint_path.as_deref().unwrap_or(DEPLOY_ENDPOINT)
    }

    fn submit_label(&self) -> &str {
        self.form.submit_label.as_deref().unwrap_or(DEFAULT_SUBMIT_LABEL)
    }

    fn busy_label(&self) -> &str {
        self.form.busy_label.as_deref().unwrap_or(DEFAULT_BUSY_LABEL)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("server.base_url", self.server_url())?;
        validation::validate_endpoint_path("server.endpoint_path", self.endpoint_path())?;
        validation::validate_non_empty_string("form.submit_label", self.submit_label())?;
        validation::validate_non_empty_string("form.busy_label", self.busy_label())?;
        Ok(())
    }
}

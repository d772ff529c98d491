use serde::{Deserialize, Serialize};

/// Transmitted when the base path input is left empty.
pub const DEFAULT_BASE_PATH: &str = "/";

/// The two text inputs of the deploy form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    RepoUrl,
    BasePath,
}

/// JSON body of `POST /api/deploy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployRequest {
    pub url: String,
    pub base_path: String,
}

impl DeployRequest {
    /// Builds the request from raw input values. The repository URL is sent
    /// as typed, even when empty; an empty base path becomes `/`.
    pub fn from_inputs(url: impl Into<String>, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        Self {
            url: url.into(),
            base_path: if base_path.is_empty() {
                DEFAULT_BASE_PATH.to_string()
            } else {
                base_path
            },
        }
    }
}

/// Success payload returned by the deployer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployResponse {
    pub slug: String,
    pub url: String,
}

/// Result of the request phase. Failures carry the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    Deployed(DeployResponse),
    Failed(String),
}

impl DeployOutcome {
    pub fn is_deployed(&self) -> bool {
        matches!(self, DeployOutcome::Deployed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Success,
    Error,
}

impl PanelKind {
    pub fn class_name(&self) -> &'static str {
        match self {
            PanelKind::Success => "success",
            PanelKind::Error => "error",
        }
    }
}

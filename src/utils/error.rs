use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server error: {status} {body}")]
    Server { status: u16, body: String },

    #[error("Invalid response from deployer: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("Failed to render result panel: {0}")]
    Render(#[from] askama::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DeployError {
    /// Configuration problems are reported before any request is made.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DeployError::Io(_)
                | DeployError::ConfigValidationError { .. }
                | DeployError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message() {
        let err = DeployError::Server {
            status: 500,
            body: "internal failure".to_string(),
        };
        assert_eq!(err.to_string(), "Server error: 500 internal failure");
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_config_errors_are_classified() {
        let err = DeployError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "bad".to_string(),
        };
        assert!(err.is_config_error());
    }
}

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    http::HttpTransport,
    page::{PageState, SubmitTrigger},
};
pub use config::{toml_config::TomlConfig, Settings};
pub use core::handler::SubmissionHandler;
pub use domain::model::{DeployOutcome, DeployRequest, DeployResponse, PanelKind};
pub use utils::error::{DeployError, Result};

pub mod handler;
pub mod render;

pub use crate::domain::model::{
    DeployOutcome, DeployRequest, DeployResponse, FormField, PanelKind,
};
pub use crate::domain::ports::{ConfigProvider, DeployTransport, FormView, SubmitEvent};
pub use crate::utils::error::Result;

use crate::domain::model::{DeployRequest, DeployResponse, FormField, PanelKind};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The page elements the submission handler touches.
pub trait FormView {
    fn input_value(&self, field: FormField) -> String;

    fn is_submit_disabled(&self) -> bool;
    fn set_submit_disabled(&mut self, disabled: bool);
    fn submit_label(&self) -> String;
    fn set_submit_label(&mut self, label: &str);

    fn set_loading_visible(&mut self, visible: bool);

    fn clear_result(&mut self);
    fn set_result_visible(&mut self, visible: bool);
    fn set_result_class(&mut self, kind: PanelKind);
    fn set_result_html(&mut self, html: &str);
}

/// The event that triggered a submission.
pub trait SubmitEvent {
    fn prevent_default(&mut self);
}

#[async_trait]
pub trait DeployTransport: Send + Sync {
    async fn deploy(&self, request: &DeployRequest) -> Result<DeployResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn server_url(&self) -> &str;
    fn endpoint_path(&self) -> &str;
    fn submit_label(&self) -> &str;
    fn busy_label(&self) -> &str;
}

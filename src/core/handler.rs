use crate::core::render::render_outcome;
use crate::core::{DeployOutcome, DeployRequest, DeployTransport, FormField, FormView, SubmitEvent};

pub const DEFAULT_BUSY_LABEL: &str = "Deploying...";

/// Submit control state recorded when a submission starts, restored on settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

pub struct SubmissionHandler<T: DeployTransport> {
    transport: T,
    busy_label: String,
}

impl<T: DeployTransport> SubmissionHandler<T> {
    pub fn new(transport: T) -> Self {
        Self::with_busy_label(transport, DEFAULT_BUSY_LABEL)
    }

    pub fn with_busy_label(transport: T, busy_label: impl Into<String>) -> Self {
        Self {
            transport,
            busy_label: busy_label.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs one submission end to end. The view stays borrowed until the
    /// result panel is shown, and the submit control is restored on every path.
    pub async fn handle_submit<E, V>(&self, event: &mut E, view: &mut V) -> DeployOutcome
    where
        E: SubmitEvent,
        V: FormView,
    {
        event.prevent_default();

        let request = DeployRequest::from_inputs(
            view.input_value(FormField::RepoUrl),
            view.input_value(FormField::BasePath),
        );

        let control = self.begin(view);
        let outcome = self.request(&request).await;
        self.settle(view, control, &outcome);

        outcome
    }

    pub fn begin<V: FormView>(&self, view: &mut V) -> SubmitControl {
        let control = SubmitControl {
            label: view.submit_label(),
            disabled: view.is_submit_disabled(),
        };

        view.set_submit_disabled(true);
        view.set_submit_label(&self.busy_label);
        view.set_loading_visible(true);
        view.clear_result();
        view.set_result_visible(false);

        tracing::debug!("Submission started");
        control
    }

    /// The only suspension point. Every failure is turned into
    /// `DeployOutcome::Failed` here and logged once.
    pub async fn request(&self, request: &DeployRequest) -> DeployOutcome {
        tracing::debug!(
            "Requesting deployment of {} (base path {})",
            request.url,
            request.base_path
        );

        match self.transport.deploy(request).await {
            Ok(response) => {
                tracing::info!("Deployed '{}' at {}", response.slug, response.url);
                DeployOutcome::Deployed(response)
            }
            Err(e) => {
                tracing::error!("Deployment request failed: {}", e);
                DeployOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn settle<V: FormView>(&self, view: &mut V, control: SubmitControl, outcome: &DeployOutcome) {
        view.set_submit_disabled(control.disabled);
        view.set_submit_label(&control.label);
        view.set_loading_visible(false);

        let (kind, html) = render_outcome(outcome);
        view.set_result_class(kind);
        view.set_result_html(&html);
        view.set_result_visible(true);

        tracing::debug!("Submission settled with {} panel", kind.class_name());
    }
}

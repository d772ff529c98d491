use crate::core::{FormField, FormView, PanelKind, SubmitEvent};

pub const DEFAULT_SUBMIT_LABEL: &str = "Deploy";

/// In-memory copy of the deploy page's elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub repo_url: String,
    pub base_path: String,
    pub submit_disabled: bool,
    pub submit_label: String,
    pub loading_visible: bool,
    pub result_visible: bool,
    pub result_class: Option<PanelKind>,
    pub result_html: String,
}

impl PageState {
    pub fn new(repo_url: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            base_path: base_path.into(),
            submit_disabled: false,
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            loading_visible: false,
            result_visible: false,
            result_class: None,
            result_html: String::new(),
        }
    }

    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// The panel currently shown to the user, if any.
    pub fn visible_panel(&self) -> Option<PanelKind> {
        if self.result_visible {
            self.result_class
        } else {
            None
        }
    }
}

impl FormView for PageState {
    fn input_value(&self, field: FormField) -> String {
        match field {
            FormField::RepoUrl => self.repo_url.clone(),
            FormField::BasePath => self.base_path.clone(),
        }
    }

    fn is_submit_disabled(&self) -> bool {
        self.submit_disabled
    }

    fn set_submit_disabled(&mut self, disabled: bool) {
        self.submit_disabled = disabled;
    }

    fn submit_label(&self) -> String {
        self.submit_label.clone()
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit_label = label.to_string();
    }

    fn set_loading_visible(&mut self, visible: bool) {
        tracing::trace!("loading indicator visible: {}", visible);
        self.loading_visible = visible;
    }

    fn clear_result(&mut self) {
        self.result_class = None;
        self.result_html.clear();
    }

    fn set_result_visible(&mut self, visible: bool) {
        self.result_visible = visible;
    }

    fn set_result_class(&mut self, kind: PanelKind) {
        self.result_class = Some(kind);
    }

    fn set_result_html(&mut self, html: &str) {
        self.result_html = html.to_string();
    }
}

/// A submission trigger that records whether default navigation was prevented.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubmitTrigger {
    default_prevented: bool,
}

impl SubmitTrigger {
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl SubmitEvent for SubmitTrigger {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

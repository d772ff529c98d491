use crate::core::{DeployOutcome, DeployResponse, PanelKind};
use crate::utils::error::Result;
use askama::Template;

/// Shown when a panel template itself cannot be rendered.
const RENDER_FAILURE_HTML: &str = "<p><strong>Error:</strong> Failed to render the result.</p>";

#[derive(Template)]
#[template(path = "success.html")]
struct SuccessPanel<'a> {
    slug: &'a str,
    url: &'a str,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPanel<'a> {
    message: &'a str,
}

pub fn render_success(response: &DeployResponse) -> Result<String> {
    let html = SuccessPanel {
        slug: &response.slug,
        url: &response.url,
    }
    .render()?;
    Ok(html)
}

pub fn render_error(message: &str) -> Result<String> {
    let html = ErrorPanel { message }.render()?;
    Ok(html)
}

/// Picks the panel for an outcome. A success that cannot be rendered is
/// reported as an error panel, so exactly one kind is always returned.
pub fn render_outcome(outcome: &DeployOutcome) -> (PanelKind, String) {
    let rendered = match outcome {
        DeployOutcome::Deployed(response) => {
            render_success(response).map(|html| (PanelKind::Success, html))
        }
        DeployOutcome::Failed(message) => render_error(message).map(|html| (PanelKind::Error, html)),
    };

    match rendered {
        Ok(panel) => panel,
        Err(e) => {
            tracing::error!("Result panel rendering failed: {}", e);
            let html = render_error(&e.to_string()).unwrap_or_else(|_| RENDER_FAILURE_HTML.to_string());
            (PanelKind::Error, html)
        }
    }
}

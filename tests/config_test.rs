use anyhow::Result;
use deploy_form::core::ConfigProvider;
use deploy_form::utils::validation::Validate;
use deploy_form::{
    HttpTransport, PageState, PanelKind, Settings, SubmissionHandler, SubmitTrigger, TomlConfig,
};
use httpmock::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_file_config_drives_endpoint_and_labels() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v2/deploy");
            then.status(200).json_body(serde_json::json!({
                "slug": "wise-dark-comet",
                "url": "http://wise-dark-comet.localhost:8000/"
            }));
        })
        .await;

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("deployer.toml");
    let config_content = format!(
        r#"
[server]
base_url = "{}"
endpoint_path = "/v2/deploy"

[form]
submit_label = "Ship it"
busy_label = "Shipping..."
"#,
        server.base_url()
    );
    tokio::fs::write(&config_path, config_content).await?;

    let file = TomlConfig::from_file(&config_path)?;
    let settings = Settings::resolve(&file, None);
    settings.validate()?;

    let transport = HttpTransport::from_config(&settings);
    assert_eq!(transport.endpoint(), server.url("/v2/deploy"));

    let handler = SubmissionHandler::with_busy_label(transport, settings.busy_label());
    let mut page =
        PageState::new("https://github.com/fake/repo.git", "").with_submit_label(settings.submit_label());

    handler.begin(&mut page);
    assert_eq!(page.submit_label, "Shipping...");
    assert!(page.submit_disabled);

    let mut page =
        PageState::new("https://github.com/fake/repo.git", "").with_submit_label(settings.submit_label());
    handler
        .handle_submit(&mut SubmitTrigger::default(), &mut page)
        .await;

    api_mock.assert_async().await;
    assert_eq!(page.visible_panel(), Some(PanelKind::Success));
    assert_eq!(page.submit_label, "Ship it");
    assert!(!page.submit_disabled);
    Ok(())
}

#[test]
fn test_missing_config_file_is_an_io_error() {
    let err = TomlConfig::from_file("/nonexistent/deployer.toml").unwrap_err();
    assert!(err.is_config_error());
}

use clap::Parser;
use deploy_form::core::ConfigProvider;
use deploy_form::utils::{logger, validation::Validate};
use deploy_form::{
    CliConfig, DeployOutcome, HttpTransport, PageState, Settings, SubmissionHandler, SubmitTrigger,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let settings = match Settings::from_cli(&config).and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(if e.is_config_error() { 2 } else { 1 });
        }
    };

    let transport = HttpTransport::from_config(&settings);
    tracing::info!("Submitting {} to {}", config.url, transport.endpoint());

    let handler = SubmissionHandler::with_busy_label(transport, settings.busy_label());
    let mut page = PageState::new(config.url.clone(), config.base_path.clone())
        .with_submit_label(settings.submit_label());
    let mut trigger = SubmitTrigger::default();

    let outcome = handler.handle_submit(&mut trigger, &mut page).await;
    tracing::debug!("Result panel ({:?}): {}", page.visible_panel(), page.result_html);

    match outcome {
        DeployOutcome::Deployed(response) => {
            println!("✅ Deployed '{}'", response.slug);
            println!("🔗 {}", response.url);
            Ok(())
        }
        DeployOutcome::Failed(message) => {
            eprintln!("❌ Error: {}", message);
            std::process::exit(1);
        }
    }
}

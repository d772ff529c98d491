use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "deploy-form")]
#[command(about = "Submit a repository to the mini deployer and show the result")]
pub struct CliConfig {
    #[arg(help = "Repository URL to deploy (sent as-is)")]
    pub url: String,

    #[arg(long, default_value = "", help = "Base path of the site; empty means '/'")]
    pub base_path: String,

    #[arg(long, help = "Deployer base URL [default: http://localhost:8000]")]
    pub server: Option<String>,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

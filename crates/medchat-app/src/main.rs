use anyhow::Result;
use clap::Parser;

use medchat::app::run_web_server;
use medchat::{configure_logging, AppConfig, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    configure_logging(cli.verbose)?;

    let config = AppConfig::from_cli(&cli)?;

    run_web_server(config).await
}

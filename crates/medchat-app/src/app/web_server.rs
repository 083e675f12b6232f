use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use medchat_llm_api::{mask_api_key, CompletionClient, OpenRouterClient};

use crate::config::AppConfig;
use crate::web::server::{WebServer, WebServerConfig};

/// Run the web server
pub async fn run_web_server(config: AppConfig) -> Result<()> {
    match config.api.api_key.as_deref() {
        Some(key) => info!(key = %mask_api_key(key), "using API key"),
        None => warn!(
            "no API key configured (set OPEN_ROUTER_API_KEY); chat requests will fail until one is provided"
        ),
    }
    info!(
        api_url = %config.api.api_url,
        model = %config.api.model,
        mask_upstream_errors = config.mask_upstream_errors,
        "starting medchat web server"
    );

    let client: Arc<dyn CompletionClient> = Arc::new(
        OpenRouterClient::new(config.api.clone()).context("Failed to build HTTP client")?,
    );

    let server_config = WebServerConfig {
        bind_addr: config.bind_addr,
        pkg_dir: config.pkg_dir,
        web_dir: config.web_dir,
        mask_upstream_errors: config.mask_upstream_errors,
    };

    // Create and start server
    WebServer::new(server_config, client).start().await
}

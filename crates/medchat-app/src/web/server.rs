use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};

use medchat_llm_api::CompletionClient;

use crate::web::routes::{self, AppState};

/// Web server configuration
pub struct WebServerConfig {
    pub bind_addr: SocketAddr,
    pub pkg_dir: PathBuf,
    pub web_dir: Option<PathBuf>,
    pub mask_upstream_errors: bool,
}

/// Web server instance
pub struct WebServer {
    config: WebServerConfig,
    client: Arc<dyn CompletionClient>,
}

impl WebServer {
    /// Create a new web server
    pub fn new(config: WebServerConfig, client: Arc<dyn CompletionClient>) -> Self {
        Self { config, client }
    }

    /// Build the full application: API routes, static assets and layers
    pub fn router(&self) -> Router {
        let app_state = AppState {
            client: self.client.clone(),
            mask_upstream_errors: self.config.mask_upstream_errors,
        };

        let mut app = routes::create_router(app_state);

        // wasm-pack output for the chat UI
        if !self.config.pkg_dir.exists() {
            warn!(
                dir = %self.config.pkg_dir.display(),
                "wasm package directory not found; build it with `wasm-pack build --target web crates/medchat-wasm`"
            );
        }
        app = app.nest_service("/pkg", ServeDir::new(&self.config.pkg_dir));

        // Serve static files if web_dir is provided
        if let Some(web_dir) = &self.config.web_dir {
            if web_dir.exists() {
                info!(dir = %web_dir.display(), "serving static files");
                app = app.nest_service("/static", ServeDir::new(web_dir));
            } else {
                warn!(dir = %web_dir.display(), "static directory does not exist, skipping");
            }
        }

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        app.layer(cors).layer(TraceLayer::new_for_http())
    }

    /// Start the web server
    pub async fn start(self) -> Result<()> {
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(&self.config.bind_addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.config.bind_addr))?;

        info!(
            addr = %self.config.bind_addr,
            model = %self.client.model(),
            "web server listening on http://{}",
            self.config.bind_addr
        );

        axum::serve(listener, app).await.context("Web server failed")?;

        Ok(())
    }
}

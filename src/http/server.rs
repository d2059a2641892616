//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the echo application as the next stage
//! - Wire up middleware (path gate, timeout, tracing)
//! - Bind server to listener and shut down on signal

use std::time::Duration;

use axum::{http::Uri, routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::layer::BlockPathLayer;
use crate::rules::RuleError;

/// HTTP server fronting an echo application with the path gate.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Compile the configured rules and build the router.
    pub fn new(config: ServerConfig) -> Result<Self, RuleError> {
        let gate = BlockPathLayer::new(&config.blockpath, config.name.clone())?;
        let router = Self::build_router(&config, gate);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, gate: BlockPathLayer) -> Router {
        Router::new()
            .route("/{*path}", any(echo_handler))
            .route("/", any(echo_handler))
            .layer(gate)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// Router with all layers applied, for embedding or in-process tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            name = %self.config.name,
            rules = self.config.blockpath.elements.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Next stage for the standalone server: answers with the requested path.
async fn echo_handler(uri: Uri) -> String {
    uri.path().to_string()
}

//! Local preview server for a built web directory.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Configuration for the preview server.
#[derive(Debug, Clone)]
pub struct PreviewServerConfig {
    /// Server directory holding `app/` and `public/`
    pub dir: PathBuf,

    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Open browser on start
    pub open: bool,
}

impl Default for PreviewServerConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("_build/web"),
            host: "127.0.0.1".to_string(),
            port: 3000,
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Directory not found: {}. Run 'folio web build' first.", .0.display())]
    MissingDir(PathBuf),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),
}

/// Serves `app/config.json` under `/app` and everything in `public/` at the root.
pub struct PreviewServer {
    config: PreviewServerConfig,
}

impl PreviewServer {
    pub fn new(config: PreviewServerConfig) -> Self {
        Self { config }
    }

    /// Socket address the server will bind to.
    pub fn addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        addr.parse().map_err(|_| ServerError::InvalidAddress(addr))
    }

    /// Routes for the configured directory.
    pub fn router(&self) -> Router {
        Router::new()
            .nest_service("/app", ServeDir::new(self.config.dir.join("app")))
            .fallback_service(ServeDir::new(self.config.dir.join("public")))
            .layer(CorsLayer::permissive())
    }

    /// Run until the process is stopped.
    pub async fn start(self) -> Result<(), ServerError> {
        if !self.config.dir.exists() {
            return Err(ServerError::MissingDir(self.config.dir.clone()));
        }

        let addr = self.addr()?;
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        let url = format!("http://{}", addr);
        tracing::info!("Serving {} at {}", self.config.dir.display(), url);

        if self.config.open {
            let _ = open::that(&url);
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

//! ServerBuilder for fluent API to build the HTTP server
//!
//! # Example
//!
//! ```ignore
//! ServerBuilder::new()
//!     .with_config(AppConfig::from_yaml_file("backoffice.yaml")?)
//!     .serve()
//!     .await?;
//! ```

use crate::config::AppConfig;
use crate::server::routes;
use crate::server::state::AppState;
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

/// Builder for the backoffice HTTP server
pub struct ServerBuilder {
    config: AppConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a builder with default configuration
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Add routes that don't fit the CRUD pattern (webhooks, static
    /// pages, ...). Merged after the built-in routes.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the application state and router, returning both so callers
    /// (tests, demos) can seed the collections directly.
    pub fn build_with_state(self) -> (Router, AppState) {
        let state = AppState::in_memory(self.config);
        let mut app = routes::router(state.clone());
        for custom in self.custom_routes {
            app = app.merge(custom);
        }
        (app, state)
    }

    /// Build the final router
    pub fn build(self) -> Router {
        self.build_with_state().0
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds the configured address and handles SIGTERM and Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.addr.clone();
        let app = self.build();
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[test]
    fn test_build_produces_router() {
        let _router = ServerBuilder::new().build();
    }

    #[test]
    fn test_build_with_state_exposes_collections() {
        let (_router, state) = ServerBuilder::new().build_with_state();
        assert_eq!(state.config.page_size, 10);
    }

    #[test]
    fn test_with_config_overrides_defaults() {
        let config = AppConfig::from_yaml_str("page_size: 25").unwrap();
        let (_router, state) = ServerBuilder::new().with_config(config).build_with_state();
        assert_eq!(state.config.page_size, 25);
    }

    #[test]
    fn test_custom_routes_merge() {
        let custom = Router::new().route("/custom", get(|| async { "ok" }));
        let _router = ServerBuilder::new().with_custom_routes(custom).build();
    }
}

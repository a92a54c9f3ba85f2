//! HTTP server for the pagination service.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::router::{create_router, AppState};

/// Pagination window server.
pub struct PagingServer {
    config: Arc<Config>,
}

impl PagingServer {
    /// Creates a new server.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Builds the router with middleware attached.
    pub fn app(&self) -> axum::Router {
        let state = AppState {
            config: self.config.clone(),
        };

        create_router(state).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any)
                        .expose_headers(Any),
                ),
        )
    }

    /// Runs the server.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr: SocketAddr = self.config.bind_address().parse()?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Runs the server on an already bound listener.
    pub async fn serve(
        self,
        listener: TcpListener,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let app = self.app();

        info!(
            "Pagination service is listening at http://{}",
            listener.local_addr()?
        );
        info!(
            "Default radius: {}, max radius: {}",
            self.config.default_radius, self.config.max_radius
        );

        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        self.config.bind_address()
    }

    /// Returns the base URL for the service.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.bind_address())
    }
}

/// Builder for creating a pagination server.
pub struct PagingServerBuilder {
    config: Config,
}

impl PagingServerBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Sets the configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the host address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Sets the port.
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Sets the radius used when a request omits one.
    pub fn default_radius(mut self, radius: i64) -> Self {
        self.config.default_radius = radius;
        self
    }

    /// Sets the largest radius a request may ask for.
    pub fn max_radius(mut self, radius: i64) -> Self {
        self.config.max_radius = radius;
        self
    }

    /// Builds the server.
    pub fn build(self) -> PagingServer {
        PagingServer::new(self.config)
    }
}

impl Default for PagingServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

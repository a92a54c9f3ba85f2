//! Common test utilities.

use tokio::net::TcpListener;

use cert_paging::{Config, PagingServer};

/// Test server wrapper.
pub struct TestServer {
    pub base_url: String,
}

impl TestServer {
    /// Creates and starts a test server on a random port.
    pub async fn start() -> Self {
        Self::start_with(Config::default()).await
    }

    /// Starts a test server with the given configuration; host and port are overridden.
    pub async fn start_with(config: Config) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let config = Config {
            host: "127.0.0.1".to_string(),
            port,
            ..config
        };
        let base_url = format!("http://127.0.0.1:{}", port);

        let server = PagingServer::new(config);

        // Listener is already bound, so requests queue until serve() accepts.
        tokio::spawn(async move {
            server.serve(listener).await.unwrap();
        });

        Self { base_url }
    }

    /// Returns the pagination URL for the given query string.
    pub fn pagination_url(&self, query: &str) -> String {
        format!("{}/pagination?{}", self.base_url, query)
    }
}

//! Web server for anonboard.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::board::SharedStore;
use crate::config::{Config, WebConfig};
use crate::Result;

use super::handlers::AppState;
use super::router::create_router;

/// Web server for the board API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Web configuration.
    web_config: WebConfig,
}

impl WebServer {
    /// Create a new web server around an existing store.
    pub fn new(config: &Config, store: SharedStore) -> Result<Self> {
        Ok(Self {
            addr: config.server.socket_addr()?,
            app_state: Arc::new(AppState::new(store, config.passwords)),
            web_config: config.web.clone(),
        })
    }

    /// Create a new web server with an empty store.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            addr: config.server.socket_addr()?,
            app_state: Arc::new(AppState::with_password_config(config.passwords)),
            web_config: config.web.clone(),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the web server.
    pub async fn run(self) -> std::result::Result<(), std::io::Error> {
        let router = create_router(self.app_state, &self.web_config);

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::result::Result<SocketAddr, std::io::Error> {
        let router = create_router(self.app_state, &self.web_config);

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PasswordConfig, ServerConfig};

    fn create_test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Use random port
            },
            passwords: PasswordConfig::minimal(),
            ..Default::default()
        }
    }

    #[test]
    fn test_web_server_new() {
        let server = WebServer::from_config(&create_test_config()).unwrap();
        assert_eq!(server.addr().ip().to_string(), "127.0.0.1");
    }

    #[test]
    fn test_web_server_invalid_host() {
        let mut config = create_test_config();
        config.server.host = "not a host".to_string();
        assert!(WebServer::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_web_server_run() {
        let server = WebServer::from_config(&create_test_config()).unwrap();
        let addr = server.run_with_addr().await.unwrap();

        let client = reqwest::Client::new();
        let resp = client
            .get(format!("http://{}/health", addr))
            .send()
            .await
            .unwrap();

        assert!(resp.status().is_success());
        assert_eq!(resp.text().await.unwrap(), "OK");
    }

    #[tokio::test]
    async fn test_web_server_serves_api() {
        let server = WebServer::from_config(&create_test_config()).unwrap();
        let addr = server.run_with_addr().await.unwrap();

        let resp = reqwest::get(format!("http://{}/api/threads/general", addr))
            .await
            .unwrap();

        assert!(resp.status().is_success());
        assert_eq!(resp.text().await.unwrap(), "[]");
    }
}

//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use board_api::{create_app, create_app_state, AppState};
use board_common::{AppConfig, BoardConfig};
use board_core::traits::{CommentRepository, ReactionRepository};
use board_service::ServiceContext;
use reqwest::{Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::memory::{InMemoryComments, InMemoryReactions};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Start a test server backed by fresh in-memory repositories
    pub async fn start() -> Result<Self> {
        Self::start_with_state(memory_state()).await
    }

    /// Start a test server against the database in `DATABASE_URL`
    pub async fn start_with_database() -> Result<Self> {
        let mut config = test_config()?;
        config.database.run_migrations = true;
        let state = create_app_state(config).await?;
        Self::start_with_state(state).await
    }

    /// Start a test server with prepared state
    pub async fn start_with_state(state: AppState) -> Result<Self> {
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let shutdown = async {
                let _ = shutdown_rx.await;
            };
            board_api::run_server(app, listener, shutdown).await.ok();
        });

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with a raw body and no content type
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        Ok(self.client.post(self.url(path)).body(body).send().await?)
    }

    /// Make a request with an arbitrary method and optional `Origin`
    pub async fn request(&self, method: Method, path: &str, origin: Option<&str>) -> Result<Response> {
        let mut builder = self.client.request(method, self.url(path));
        if let Some(origin) = origin {
            builder = builder.header("Origin", origin);
        }
        Ok(builder.send().await?)
    }

    /// Stop accepting connections and wait for in-flight requests
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.await?;
        }
        Ok(())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// AppState over fresh in-memory repositories
pub fn memory_state() -> AppState {
    state_with(
        Arc::new(InMemoryComments::new()),
        Arc::new(InMemoryReactions::new()),
    )
}

/// AppState over the given repositories with default limits
pub fn state_with(
    comments: Arc<dyn CommentRepository>,
    reactions: Arc<dyn ReactionRepository>,
) -> AppState {
    AppState::new(ServiceContext::new(comments, reactions, &BoardConfig::default()))
}

/// Create a test configuration from the environment
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if a database is available for tests
pub async fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

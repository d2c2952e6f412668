//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use hrms_api::{create_app, create_app_state_with_store};
use hrms_common::AppConfig;
use hrms_core::Session;
use hrms_db::CredentialStore;
use hrms_service::dto::ToolResult;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Header carrying the caller's session id
pub const SESSION_HEADER: &str = "x-session-id";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Shared with the running server
    pub store: CredentialStore,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with the given config over a fresh in-memory store
    pub async fn start(config: AppConfig) -> Result<Self> {
        let store = CredentialStore::memory();
        let state = create_app_state_with_store(config, store.clone())?;

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            addr,
            client,
            store,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Submit the connect form
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).form(fields).send().await?)
    }

    /// Invoke a tool without a session header
    pub async fn invoke(&self, tool: &str, args: &Value) -> Result<Response> {
        let url = format!("{}/tools/{}", self.base_url(), tool);
        Ok(self.client.post(&url).json(args).send().await?)
    }

    /// Invoke a tool on behalf of a caller session
    pub async fn invoke_as(&self, session_id: &str, tool: &str, args: &Value) -> Result<Response> {
        let url = format!("{}/tools/{}", self.base_url(), tool);
        Ok(self
            .client
            .post(&url)
            .header(SESSION_HEADER, session_id)
            .json(args)
            .send()
            .await?)
    }

    /// Invoke a tool and decode the result, expecting HTTP 200
    pub async fn call_tool(&self, tool: &str, args: Value) -> Result<ToolResult> {
        assert_json(self.invoke(tool, &args).await?, StatusCode::OK).await
    }

    /// Run the full connect flow and return the Sync Code
    pub async fn mint_code(&self) -> Result<String> {
        let response = self
            .post_form("/connect", &[("username", "alice"), ("password", "secret")])
            .await?;
        let status = response.status();
        let html = response.text().await?;
        if status != StatusCode::OK {
            anyhow::bail!("Connect failed with {status}: {html}");
        }
        crate::extract_sync_code(&html)
            .ok_or_else(|| anyhow::anyhow!("No sync code in page: {html}"))
    }

    /// Read a session straight from the store
    pub async fn session(&self, session_id: &str) -> Result<Option<Session>> {
        Ok(self.store.session_repo().get(session_id).await?)
    }

    /// Write a session straight into the store
    pub async fn seed_session(&self, session: &Session) -> Result<()> {
        self.store.session_repo().put(session).await?;
        Ok(())
    }
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

/// Error code of a failed tool result
pub fn error_code(result: &ToolResult) -> Option<&str> {
    match result {
        ToolResult::Error { code, .. } => Some(code),
        ToolResult::Success { .. } => None,
    }
}

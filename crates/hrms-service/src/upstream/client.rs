//! Upstream HR backend client
//!
//! Login and refresh against the auth endpoints, plus bearer-signed calls
//! for everything else. Every request is bounded by the configured timeout.

use hrms_common::UpstreamConfig;
use hrms_core::{parse_token_grant, TokenGrant};
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, StatusCode};
use serde_json::json;
use tracing::{debug, instrument, warn};

use super::request::{DownstreamRequest, DownstreamResponse};
use crate::services::error::{ServiceError, ServiceResult, DEFAULT_RETRY_AFTER_SECS};

/// Client for the upstream HR backend
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Build a client with the configured request timeout
    ///
    /// # Errors
    /// Returns `ServiceError::Transport` if the HTTP client cannot be created
    pub fn new(config: &UpstreamConfig) -> ServiceResult<Self> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Exchange a username and password for a token grant
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> ServiceResult<TokenGrant> {
        let response = self
            .http
            .post(self.config.login_url())
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let body = response.text().await?;
                Ok(parse_token_grant(&body)?)
            }
            StatusCode::UNAUTHORIZED => Err(ServiceError::InvalidCredentials),
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get(RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
                Err(ServiceError::RateLimited { retry_after })
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                warn!(status = status.as_u16(), "Upstream login failed");
                Err(ServiceError::Upstream {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    /// Exchange a refresh token for a new access token
    ///
    /// Any failure, transport included, is reported as `RefreshFailed`.
    #[instrument(skip_all)]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<TokenGrant> {
        let response = self
            .http
            .post(self.config.refresh_url())
            .json(&json!({ "refresh": refresh_token }))
            .send()
            .await
            .map_err(|e| ServiceError::RefreshFailed(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ServiceError::RefreshFailed(format!(
                "upstream returned {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::RefreshFailed(e.to_string()))?;
        parse_token_grant(&body).map_err(|e| ServiceError::RefreshFailed(e.to_string()))
    }

    /// Send a request signed with the given access token
    #[instrument(skip(self, access_token), fields(method = %request.method, path = %request.path))]
    pub async fn send(
        &self,
        request: &DownstreamRequest,
        access_token: &str,
    ) -> ServiceResult<DownstreamResponse> {
        let mut builder = self
            .http
            .request(request.method.clone(), self.config.url(&request.path))
            .bearer_auth(access_token);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, "Upstream responded");

        Ok(DownstreamResponse { status, body })
    }
}

//! Scriptable stand-in for the upstream HR backend
//!
//! Serves the login and refresh endpoints plus a catch-all for data
//! endpoints, and records every request it sees.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const REFRESH_PATH: &str = "/api/auth/token/refresh/";

/// Canned reply for the auth endpoints
#[derive(Debug, Clone)]
pub struct Scripted {
    pub status: u16,
    pub body: String,
    pub retry_after: Option<String>,
    /// Hold the reply back this long, to trip client timeouts
    pub delay: Option<Duration>,
}

impl Scripted {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            retry_after: None,
            delay: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            retry_after: None,
            delay: None,
        }
    }

    pub fn with_retry_after(mut self, value: &str) -> Self {
        self.retry_after = Some(value.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn respond(self) -> Response {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.into_response()
    }

    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response();
        if let Some(value) = self.retry_after {
            if let Ok(value) = HeaderValue::from_str(&value) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }
        response
    }
}

/// A request as the mock received it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug)]
struct MockState {
    login: Scripted,
    refresh: Scripted,
    accepted_tokens: HashSet<String>,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<MockState>>;

/// Running mock upstream
pub struct MockUpstream {
    pub addr: SocketAddr,
    state: Shared,
    _handle: JoinHandle<()>,
}

impl MockUpstream {
    /// Start a mock that issues `{A1, R1}` on login, `A2` on refresh and
    /// accepts `A1` on data endpoints
    pub async fn start() -> Result<Self> {
        let state = Arc::new(Mutex::new(MockState {
            login: Scripted::json(200, json!({ "access": "A1", "refresh": "R1" })),
            refresh: Scripted::json(200, json!({ "access": "A2" })),
            accepted_tokens: HashSet::from(["A1".to_string()]),
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route(LOGIN_PATH, post(login))
            .route(REFRESH_PATH, post(refresh))
            .fallback(data)
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn set_login(&self, reply: Scripted) {
        self.lock().login = reply;
    }

    pub fn set_refresh(&self, reply: Scripted) {
        self.lock().refresh = reply;
    }

    /// Replace the set of access tokens data endpoints accept
    pub fn accept_only(&self, tokens: &[&str]) {
        self.lock().accepted_tokens = tokens.iter().map(|t| (*t).to_string()).collect();
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests().into_iter().filter(|r| r.path == path).collect()
    }

    /// Authorization headers sent to data endpoints, in order
    pub fn data_authorizations(&self) -> Vec<Option<String>> {
        self.requests()
            .into_iter()
            .filter(|r| r.path != LOGIN_PATH && r.path != REFRESH_PATH)
            .map(|r| r.authorization)
            .collect()
    }
}

fn record(state: &Shared, method: Method, uri: &Uri, headers: &HeaderMap, body: &Bytes) {
    let request = RecordedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(body).ok(),
    };
    state
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .requests
        .push(request);
}

async fn login(State(state): State<Shared>, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    record(&state, Method::POST, &uri, &headers, &body);
    let reply = state
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .login
        .clone();
    reply.respond().await
}

async fn refresh(State(state): State<Shared>, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    record(&state, Method::POST, &uri, &headers, &body);
    let reply = state
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .refresh
        .clone();
    reply.respond().await
}

async fn data(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    record(&state, method.clone(), &uri, &headers, &body);

    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string);
    let accepted = token.is_some_and(|t| {
        state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .accepted_tokens
            .contains(&t)
    });

    if !accepted {
        return (
            StatusCode::UNAUTHORIZED,
            axum::Json(json!({ "detail": "Given token not valid for any token type" })),
        )
            .into_response();
    }

    let status = if method == Method::POST {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    (
        status,
        axum::Json(json!({
            "path": uri.path(),
            "query": uri.query(),
            "results": []
        })),
    )
        .into_response()
}

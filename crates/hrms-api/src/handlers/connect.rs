//! Connect page handlers
//!
//! A plain HTML login form. A successful upstream login shows a one-time
//! Sync Code the user hands to the assistant.

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use hrms_core::DomainError;
use hrms_service::dto::ConnectForm;
use hrms_service::{PairingService, ServiceError};
use tracing::warn;

use crate::state::AppState;

const FORM_PAGE: &str = r#"<html>
    <body style="font-family: sans-serif; text-align: center; padding-top: 50px;">
        <h2>Link your HRMS Account</h2>
        <form action="/connect" method="post">
            <input type="text" name="username" placeholder="Username" style="padding:10px;" required><br><br>
            <input type="password" name="password" placeholder="Password" style="padding:10px;" required><br><br>
            <button type="submit" style="padding:10px 20px;">Get Sync Code</button>
        </form>
    </body>
</html>"#;

/// Login form
///
/// GET /connect
pub async fn connect_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// Log in upstream and show a Sync Code
///
/// POST /connect
pub async fn handle_connect(State(state): State<AppState>, Form(form): Form<ConnectForm>) -> Response {
    let Some((username, password)) = form.credentials() else {
        return page(
            StatusCode::BAD_REQUEST,
            "<h1>Login Failed</h1><p>Missing username or password.</p><a href='/connect'>Try again</a>",
        );
    };

    match PairingService::new(state.service_context())
        .mint(username, password)
        .await
    {
        Ok(code) => page(
            StatusCode::OK,
            &format!(
                "<h1>Connected!</h1><p>Sync Code: <b style='font-size: 24px;'>{code}</b></p>\
                 <p>Give this code to your assistant.</p>"
            ),
        ),
        Err(e) => failure_page(&e),
    }
}

fn failure_page(err: &ServiceError) -> Response {
    match err {
        ServiceError::InvalidCredentials => page(
            StatusCode::UNAUTHORIZED,
            "<h1>Error</h1><p>Invalid credentials.</p><a href='/connect'>Try again</a>",
        ),
        ServiceError::RateLimited { retry_after } => {
            let mut response = page(
                StatusCode::TOO_MANY_REQUESTS,
                &format!(
                    "<h1>Rate Limited</h1><p>Too many login attempts. \
                     Try again after {retry_after} seconds.</p>"
                ),
            );
            if let Ok(value) = HeaderValue::from_str(&retry_after.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
            response
        }
        ServiceError::Upstream { status, .. } => {
            warn!(status, "Connect failed upstream");
            page(
                StatusCode::BAD_GATEWAY,
                &format!("<h1>Error</h1><p>Login failed ({status}).</p>"),
            )
        }
        ServiceError::Domain(
            DomainError::StoreUnavailable(_) | DomainError::CodeSpaceExhausted { .. },
        ) => {
            warn!(error = %err, "Connect failed in the credential store");
            page(
                StatusCode::SERVICE_UNAVAILABLE,
                "<h1>Error</h1><p>Service temporarily unavailable. Please try again shortly.</p>",
            )
        }
        ServiceError::Domain(DomainError::ValidationError(_)) => page(
            StatusCode::BAD_REQUEST,
            "<h1>Login Failed</h1><p>Missing username or password.</p><a href='/connect'>Try again</a>",
        ),
        _ => {
            warn!(error = %err, "Connect failed");
            page(
                StatusCode::BAD_GATEWAY,
                "<h1>Error</h1><p>Login failed. The HR system could not be reached.</p>",
            )
        }
    }
}

fn page(status: StatusCode, body: &str) -> Response {
    (status, Html(format!("<html><body>{body}</body></html>"))).into_response()
}

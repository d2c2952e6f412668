//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use hrms_common::AppConfig;
use hrms_core::{Session, TokenSet};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Unique session id for per-caller tests
pub fn unique_session_id() -> String {
    format!("caller-{}", unique_suffix())
}

/// Configuration pointing at `upstream_base_url` with an in-memory store
///
/// `overrides` replace or extend the defaults.
pub fn test_config(upstream_base_url: &str, overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("HRMS_API_BASE_URL".to_string(), upstream_base_url.to_string()),
        ("DATABASE_URL".to_string(), "memory://".to_string()),
        ("SERVER_URL".to_string(), "http://connect.test".to_string()),
        ("UPSTREAM_TIMEOUT_SECONDS".to_string(), "5".to_string()),
    ]);
    for (key, value) in overrides {
        vars.insert((*key).to_string(), (*value).to_string());
    }
    AppConfig::from_source(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Session holding `access` and an optional refresh token
pub fn session(session_id: &str, access: &str, refresh: Option<&str>) -> Session {
    Session::new(session_id, TokenSet::new(access, refresh.map(str::to_string)))
}

/// Pull the six-digit Sync Code out of the connect success page
pub fn extract_sync_code(html: &str) -> Option<String> {
    let start = html.find("Sync Code:")?;
    html[start..]
        .as_bytes()
        .windows(6)
        .find(|w| w.iter().all(u8::is_ascii_digit))
        .map(|w| String::from_utf8_lossy(w).into_owned())
}

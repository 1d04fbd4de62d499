use std::env;
use std::path::Path;
use std::time::Duration;

use crate::models::QueryDefaults;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_FEED_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_PAGE: &str = "1";
pub const DEFAULT_LIMIT: &str = "100";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_feed_base_url() -> String {
    sanitize_base_url(&env::var("FEED_BASE_URL").unwrap_or_default())
}

pub fn get_default_language() -> String {
    match env::var("FEED_DEFAULT_LANGUAGE") {
        Ok(lang) if !lang.trim().is_empty() => lang.trim().to_string(),
        _ => DEFAULT_LANGUAGE.to_string(),
    }
}

/// Optional per-request timeout. Unset, blank, zero or unparsable values mean
/// requests may hang indefinitely.
pub fn get_request_timeout() -> Option<Duration> {
    let raw = env::var("FEED_REQUEST_TIMEOUT_SECS").ok()?;
    match raw.trim().parse::<u64>() {
        Ok(0) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(e) => {
            tracing::warn!(%e, value = %raw, "Ignoring invalid FEED_REQUEST_TIMEOUT_SECS");
            None
        }
    }
}

pub fn query_defaults() -> QueryDefaults {
    QueryDefaults {
        language: get_default_language(),
        ..QueryDefaults::default()
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_FEED_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

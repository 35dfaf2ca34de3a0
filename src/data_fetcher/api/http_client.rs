//! HTTP client creation and configuration utilities

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;

use crate::error::AppError;

/// Creates the HTTP client used for every API call.
///
/// Both headers the API requires are installed as defaults, so individual
/// requests never handle the credential themselves.
///
/// # Arguments
/// * `api_key` - Bearer token sent in the `Authorization` header
/// * `timeout_seconds` - Per-request timeout; `None` keeps reqwest's default
pub fn create_http_client(api_key: &str, timeout_seconds: Option<u64>) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
        AppError::config_error(format!("API key is not a valid header value: {e}"))
    })?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    let mut builder = Client::builder()
        .default_headers(headers)
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST);

    if let Some(seconds) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }

    Ok(builder.build()?)
}

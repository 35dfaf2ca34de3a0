use reqwest::Client;

use super::http_client::create_http_client;
use super::retry::{RetryPolicy, Sleeper, TokioSleeper};
use crate::config::Config;
use crate::error::AppError;

/// Client for the RobotEvents API.
///
/// Carries everything a request needs (HTTP client with auth headers, API
/// base, retry policy, sleeper) so no call reads credentials from the
/// environment. All requests are issued sequentially by the caller.
#[derive(Debug, Clone)]
pub struct ApiClient<S = TokioSleeper> {
    pub(super) http: Client,
    pub(super) api_domain: String,
    pub(super) retry: RetryPolicy,
    pub(super) sleeper: S,
}

impl ApiClient<TokioSleeper> {
    /// Builds a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let api_key = config.require_api_key()?;
        let http = create_http_client(api_key, config.http_timeout_seconds)?;
        Ok(Self::with_sleeper(
            http,
            &config.api_domain,
            RetryPolicy::from_config(config),
            TokioSleeper,
        ))
    }
}

impl<S: Sleeper> ApiClient<S> {
    pub fn with_sleeper(
        http: Client,
        api_domain: impl Into<String>,
        retry: RetryPolicy,
        sleeper: S,
    ) -> Self {
        Self {
            http,
            api_domain: api_domain.into(),
            retry,
            sleeper,
        }
    }

    pub fn api_domain(&self) -> &str {
        &self.api_domain
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }
}

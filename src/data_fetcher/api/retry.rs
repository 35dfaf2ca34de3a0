//! Rate-limit retry policy and the sleep abstraction it waits through

use reqwest::header::{HeaderMap, RETRY_AFTER};
use std::future::Future;
use std::time::Duration;

use crate::config::Config;
use crate::constants::rate_limit::{DEFAULT_RETRY_AFTER_SECONDS, EXTRA_WAIT_SECONDS};

/// Something that can pause the current task. Production code uses
/// [`TokioSleeper`]; tests plug in a recorder so nothing actually waits.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// How long to wait after a 429 and how many times to try again.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub default_retry_after: Duration,
    pub extra_wait: Duration,
    /// `None` retries for as long as the server keeps answering 429.
    pub max_rate_limit_retries: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            default_retry_after: Duration::from_secs(DEFAULT_RETRY_AFTER_SECONDS),
            extra_wait: Duration::from_secs(EXTRA_WAIT_SECONDS),
            max_rate_limit_retries: None,
        }
    }
}

impl RetryPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_rate_limit_retries: config.max_rate_limit_retries,
            ..Self::default()
        }
    }

    /// Wait before the next attempt: the server's Retry-After (or the default) plus the extra second.
    pub fn wait_for(&self, retry_after: Option<Duration>) -> Duration {
        retry_after.unwrap_or(self.default_retry_after) + self.extra_wait
    }

    /// True once `retries_so_far` has used up the configured cap.
    pub fn exhausted(&self, retries_so_far: u32) -> bool {
        self.max_rate_limit_retries
            .is_some_and(|max| retries_so_far >= max)
    }
}

/// Reads a Retry-After header given in whole seconds.
pub fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

//! Test utilities: a sleeper that records instead of waiting, and JSON
//! fixtures shaped like RobotEvents API responses.

use serde_json::{Value, json};
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::data_fetcher::api::{ApiClient, RetryPolicy, Sleeper, create_http_client};

/// Records every requested sleep and returns immediately.
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    slept: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    /// Durations requested so far, in order.
    pub fn recorded(&self) -> Vec<Duration> {
        self.slept
            .lock()
            .map(|slept| slept.clone())
            .unwrap_or_default()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        if let Ok(mut slept) = self.slept.lock() {
            slept.push(duration);
        }
        std::future::ready(())
    }
}

/// API key used by [`test_client`].
pub const TEST_API_KEY: &str = "test-key";

/// Builds an API client against `api_domain` (usually a mock server URI)
/// with the default unbounded retry policy.
///
/// # Panics
/// Panics if the HTTP client cannot be built.
pub fn test_client(api_domain: &str, sleeper: RecordingSleeper) -> ApiClient<RecordingSleeper> {
    let http = create_http_client(TEST_API_KEY, None).expect("Failed to create test HTTP client");
    ApiClient::with_sleeper(http, api_domain, RetryPolicy::default(), sleeper)
}

/// A list response page.
pub fn page_json(data: Vec<Value>, next_page_url: Option<String>) -> Value {
    json!({
        "meta": {
            "current_page": 1,
            "per_page": 25,
            "next_page_url": next_page_url,
        },
        "data": data,
    })
}

pub fn event_json(id: u64, sku: &str) -> Value {
    json!({
        "id": id,
        "sku": sku,
        "name": format!("Event {sku}"),
    })
}

pub fn team_json(id: u64, number: &str, team_name: &str) -> Value {
    json!({
        "id": id,
        "number": number,
        "team_name": team_name,
        "organization": "Test Robotics",
        "registered": true,
    })
}

pub fn skill_json(team_id: u64, skill_type: &str, score: i64) -> Value {
    json!({
        "id": team_id * 1000 + score as u64,
        "team": { "id": team_id, "name": format!("team-{team_id}"), "code": null },
        "type": skill_type,
        "score": score,
        "attempts": 1,
    })
}

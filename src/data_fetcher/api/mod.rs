pub mod urls;
pub mod http_client;
pub mod retry;
mod core;
mod event_api;
mod fetch_utils;
mod skills_api;

// Re-export URL utilities
pub use urls::*;
pub use http_client::create_http_client;
pub use retry::{RetryPolicy, Sleeper, TokioSleeper};
pub use core::ApiClient;
pub use fetch_utils::Query;

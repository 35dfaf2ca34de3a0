//! RobotEvents skills leaderboard library
//!
//! Resolves an event code, fetches each registered team's skills runs,
//! ranks teams by best driver + best programming score and exports the
//! result to an `.xlsx` workbook.
//!
//! # Examples
//!
//! ```rust,no_run
//! use skills_ranked::app::{RunRequest, run};
//! use skills_ranked::config::Config;
//! use skills_ranked::data_fetcher::ApiClient;
//! use skills_ranked::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load(None).await?;
//!     let client = ApiClient::from_config(&config)?;
//!
//!     let request = RunRequest::new("RE-VRC-24-1234", "leaderboard", config.season_id);
//!     let summary = run(&client, &request).await?;
//!     println!("wrote {}", summary.output.path().display());
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod export;
pub mod logging;
pub mod ranking;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::ApiClient;
pub use error::AppError;
pub use ranking::{Leaderboard, RankingRow};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Application-wide constants and configuration values
//!
//! This module centralizes the API defaults, rate-limit timings and export
//! layout so they are defined in exactly one place.

/// Base URL of the RobotEvents v2 REST API
pub const DEFAULT_API_DOMAIN: &str = "https://www.robotevents.com/api/v2";

/// Season id used for skills lookups when none is configured (current season)
pub const DEFAULT_SEASON_ID: u32 = 173;

/// Maximum number of idle connections kept per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Directory name used under the platform config dir
pub const APP_DIR_NAME: &str = "skills_ranked";

/// Default log file name
pub const LOG_FILE_NAME: &str = "skills_ranked.log";

/// Rate limit handling for HTTP 429 responses
pub mod rate_limit {
    /// Wait used when the server sends no usable Retry-After header
    pub const DEFAULT_RETRY_AFTER_SECONDS: u64 = 5;

    /// Added on top of every Retry-After value before retrying
    pub const EXTRA_WAIT_SECONDS: u64 = 1;
}

/// Environment variable names read by the configuration loader
pub mod env_vars {
    pub const API_KEY: &str = "API_KEY";
    pub const API_DOMAIN: &str = "SKILLS_RANKED_API_DOMAIN";
    pub const SEASON: &str = "SKILLS_RANKED_SEASON";
    pub const HTTP_TIMEOUT: &str = "SKILLS_RANKED_HTTP_TIMEOUT";
    pub const LOG_FILE: &str = "SKILLS_RANKED_LOG_FILE";
}

/// Spreadsheet layout
pub mod export {
    /// Header row, one label per column
    pub const HEADERS: [&str; 7] = [
        "Team number",
        "Team name",
        "Driver Scores",
        "Prog Scores",
        "Best Driver Score",
        "Best Prog Score",
        "Best Sum",
    ];

    pub const SHEET_NAME: &str = "Skills";

    pub const FILE_EXTENSION: &str = "xlsx";

    /// Appended to the event code to form the fallback file name
    pub const FALLBACK_SUFFIX: &str = "_skills";

    /// Column widths in characters, same order as `HEADERS`
    pub const COLUMN_WIDTHS: [f64; 7] = [12.0, 32.0, 24.0, 24.0, 18.0, 16.0, 10.0];
}

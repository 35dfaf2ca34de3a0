use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Non-200 responses other than 429
    #[error("API error ({status}) while {operation} (URL: {url})")]
    ApiStatus {
        status: u16,
        operation: String,
        url: String,
    },

    #[error("API rate limit still exceeded after {attempts} retries (URL: {url})")]
    RateLimitExhausted { attempts: u32, url: String },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing errors
    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Lookup errors
    #[error("Event not found for code: {code}")]
    EventNotFound { code: String },

    #[error("Event lookup failed for code {code}: {source}")]
    EventLookup {
        code: String,
        #[source]
        source: Box<AppError>,
    },

    #[error("Spreadsheet export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an error for a non-200, non-429 response
    pub fn api_status(status: u16, operation: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiStatus {
            status,
            operation: operation.into(),
            url: url.into(),
        }
    }

    /// Create an error for a request that kept hitting 429 past the configured cap
    pub fn rate_limit_exhausted(attempts: u32, url: impl Into<String>) -> Self {
        Self::RateLimitExhausted {
            attempts,
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an error for an event code that matched nothing
    pub fn event_not_found(code: impl Into<String>) -> Self {
        Self::EventNotFound { code: code.into() }
    }

    /// Wrap a failed event lookup request
    pub fn event_lookup(code: impl Into<String>, source: AppError) -> Self {
        Self::EventLookup {
            code: code.into(),
            source: Box::new(source),
        }
    }

    /// HTTP status carried by the error, if it came from an API response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::ApiStatus { status, .. } => Some(*status),
            AppError::EventLookup { source, .. } => source.status_code(),
            _ => None,
        }
    }

    /// Check if error means the API kept answering 429 past the retry cap
    pub fn is_rate_limit(&self) -> bool {
        match self {
            AppError::RateLimitExhausted { .. } => true,
            AppError::EventLookup { source, .. } => source.is_rate_limit(),
            _ => false,
        }
    }

    /// Check if error means the requested event could not be resolved
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::EventNotFound { .. } | AppError::EventLookup { .. }
        )
    }
}

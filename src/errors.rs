/*!
 * Error types for the subshelf library.
 *
 * The language and file name helpers never fail; these types cover the
 * surrounding configuration, CDN and API response code, using the
 * thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// CDN base URL could not be used
    #[error("Invalid CDN base URL '{url}': {reason}")]
    InvalidCdnUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// A required setting is empty
    #[error("Missing configuration value: {0}")]
    MissingValue(String),

    /// A setting has a value outside its allowed set
    #[error("Invalid value '{value}' for {field}")]
    InvalidValue {
        /// Setting name
        field: String,
        /// The rejected value
        value: String,
    },

    /// Config file could not be read or written
    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for the expected shape
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors reported to API clients
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request was malformed
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) => 404,
            Self::Internal(_) => 500,
        }
    }
}

/// Main library error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from serializing a response
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self::Internal(error.to_string())
    }
}

//! Error types for ZQLZ

use thiserror::Error;

/// Core error type for ZQLZ operations
///
/// Query synthesis itself never fails. These errors only surface where
/// untyped input from a form layer is decoded into typed models.
#[derive(Error, Debug)]
pub enum ZqlzError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Unknown field attribute: {0}")]
    UnknownAttribute(String),

    #[error("Invalid value for {attribute}: {message}")]
    InvalidValue { attribute: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for ZQLZ operations
pub type Result<T> = std::result::Result<T, ZqlzError>;

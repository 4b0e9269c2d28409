//! Error types for Helios

use thiserror::Error;

use crate::units::UnitsError;

/// Core errors that can occur in Helios
#[derive(Debug, Error)]
pub enum Error {
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Amount error: {0}")]
    Units(#[from] UnitsError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Protocol-level errors surfaced to the frontend
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    #[error("Invalid address: {address}")]
    InvalidAddress { address: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Validation failed: {}", .reasons.join("; "))]
    ValidationFailed { reasons: Vec<String> },

    #[error("Not available yet: {what}")]
    MissingPrerequisite { what: String },

    #[error("Store unavailable: {reason}")]
    StoreUnavailable { reason: String },
}

/// Result type alias for Helios operations
pub type Result<T> = std::result::Result<T, Error>;

impl ProtocolError {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "invalid_amount",
            Self::InvalidAddress { .. } => "invalid_address",
            Self::InvalidInput { .. } => "invalid_input",
            Self::ValidationFailed { .. } => "input_out_of_range",
            Self::MissingPrerequisite { .. } => "missing_prerequisite",
            Self::StoreUnavailable { .. } => "store_unavailable",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount { .. } | Self::InvalidAddress { .. } | Self::InvalidInput { .. } => {
                400
            }
            Self::ValidationFailed { .. } => 422,
            Self::MissingPrerequisite { .. } | Self::StoreUnavailable { .. } => 503,
        }
    }
}

impl From<UnitsError> for ProtocolError {
    fn from(err: UnitsError) -> Self {
        Self::InvalidAmount {
            message: err.to_string(),
        }
    }
}

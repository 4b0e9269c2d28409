//! Token factory state types
//!
//! Deployment requests, registry records and errors.

use alloy_primitives::{Address, B256, U256};
use helios_core::units::serde_decimal;
use helios_core::{BlockHeight, ProtocolError, UnitsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request to deploy a new token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenRequest {
    pub name: String,
    pub symbol: String,
    /// Base denom; derived from the symbol when absent
    #[serde(default)]
    pub denom: Option<String>,
    /// Human supply, e.g. "1000000"
    pub total_supply: String,
    /// Defaults to the configured decimals (18)
    #[serde(default)]
    pub decimals: Option<u8>,
    /// PNG logo as base64 or a `data:image/...;base64,` URL
    #[serde(default)]
    pub logo_base64: Option<String>,
}

/// A token recorded after its deployment transaction was mined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployedToken {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub denom: String,
    pub decimals: u8,
    #[serde(with = "serde_decimal")]
    pub total_supply: U256,
    #[serde(default)]
    pub deployed_at_block: Option<BlockHeight>,
    #[serde(default)]
    pub tx_hash: Option<B256>,
}

/// Token factory errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid supply: {0}")]
    Supply(#[from] UnitsError),

    #[error("Token store error: {0}")]
    Store(String),
}

impl TokenError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

impl From<TokenError> for ProtocolError {
    fn from(err: TokenError) -> Self {
        match err {
            invalid @ TokenError::InvalidField { .. } => ProtocolError::InvalidInput {
                message: invalid.to_string(),
            },
            TokenError::Supply(e) => e.into(),
            TokenError::Store(reason) => ProtocolError::StoreUnavailable { reason },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: CreateTokenRequest =
            serde_json::from_str(r#"{"name":"Sun","symbol":"SUN","totalSupply":"1000"}"#).unwrap();
        assert_eq!(req.denom, None);
        assert_eq!(req.decimals, None);
        assert_eq!(req.logo_base64, None);
    }

    #[test]
    fn test_error_mapping() {
        let err: ProtocolError = TokenError::invalid("symbol", "too long").into();
        assert_eq!(err.error_code(), "invalid_input");
        assert_eq!(err.to_string(), "Invalid input: Invalid symbol: too long");

        let err: ProtocolError = TokenError::Store("poisoned".into()).into();
        assert_eq!(err.status_code(), 503);
    }
}

//! Data Transfer Objects for API requests and responses

use alloy_primitives::U256;
use axum::{http::StatusCode, Json};
use chronos::{BlockOption, CallPayload, DepositEstimate, ExpirationEstimate};
use helios_core::units::serde_decimal;
use helios_core::{BlockHeight, ProtocolError};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    /// Every failed check, for validation errors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}

/// Error half of every handler result
pub type ApiFailure = (StatusCode, Json<ApiError>);

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            reasons: Vec::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }

    /// Map a domain error onto its HTTP status and JSON body
    pub fn from_protocol(err: impl Into<ProtocolError>) -> ApiFailure {
        let err = err.into();
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut body = Self::new(err.error_code(), err.to_string());
        if let ProtocolError::ValidationFailed { reasons } = err {
            body.reasons = reasons;
        }
        (status, Json(body))
    }
}

/// Current block as last reported by the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainHeadResponse {
    pub current_block: Option<BlockHeight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetChainHeadRequest {
    pub current_block: BlockHeight,
}

/// Preset frequency and duration choices for the job form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChronosOptionsResponse {
    pub frequency: Vec<BlockOption>,
    pub duration: Vec<BlockOption>,
}

/// Deposit preview request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    #[serde(default)]
    pub method_name: Option<String>,
    #[serde(default, with = "serde_decimal::option")]
    pub gas_price_wei: Option<U256>,
    /// Blocks between executions
    pub frequency: u64,
    /// Total schedule length in blocks
    pub duration: u64,
}

/// Inverse preview: how far a deposit reaches
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpirationRequest {
    /// Deposit in HLS, e.g. "0.5"
    pub deposit: String,
    pub frequency: u64,
    #[serde(default)]
    pub method_name: Option<String>,
    #[serde(default, with = "serde_decimal::option")]
    pub gas_price_wei: Option<U256>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpirationResponse {
    #[serde(flatten)]
    pub estimate: ExpirationEstimate,
    pub current_block: BlockHeight,
    #[serde(with = "serde_decimal")]
    pub per_execution_cost: U256,
    /// Schedule length as a scheduler-clock label
    pub duration_label: String,
}

/// Prepared createCron call with the estimate it was built from
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobResponse {
    #[serde(flatten)]
    pub payload: CallPayload,
    pub estimate: DepositEstimate,
    pub current_block: BlockHeight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelJobRequest {
    pub cron_id: i64,
}

//! Chronos State Types
//!
//! Preview and summary structures for the frontend, and protocol errors.

use alloy_primitives::U256;
use helios_core::units::serde_decimal;
use helios_core::{BlockHeight, ProtocolError, UnitsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gas::MethodCategory;

/// Deposit preview for a (method, frequency, duration) choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronDepositPreview {
    pub method_category: MethodCategory,
    pub frequency_blocks: u64,
    pub duration_blocks: u64,
    /// e.g. "15 minutes" (selector clock)
    pub frequency_label: String,
    /// e.g. "6 hours" (scheduler clock)
    pub duration_label: String,
    pub executions: u64,
    #[serde(with = "serde_decimal")]
    pub cost_per_execution_wei: U256,
    #[serde(with = "serde_decimal")]
    pub total_cost_wei: U256,
    /// Total cost plus safety buffer
    #[serde(with = "serde_decimal")]
    pub deposit_wei: U256,
    /// Deposit in HLS, e.g. "0.0216"
    pub deposit_hls: String,
    /// Largest deposit the horizon allows at this frequency
    #[serde(with = "serde_decimal")]
    pub max_deposit_wei: U256,
}

/// On-chain job data handed over by the chain reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronJobInfo {
    pub cron_id: u64,
    #[serde(default)]
    pub method: Option<String>,
    pub frequency: u64,
    pub expiration_block: BlockHeight,
    /// Balance of the job's cron wallet
    #[serde(with = "serde_decimal")]
    pub wallet_balance_wei: U256,
}

/// Remaining lifetime and funding of an existing job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronJobSummary {
    pub cron_id: u64,
    /// False until a current block is known; every count below is then zero
    pub head_known: bool,
    pub is_expired: bool,
    pub blocks_remaining: u64,
    pub time_remaining: String,
    /// Executions left before expiration
    pub scheduled_executions: u64,
    /// Executions the wallet balance can pay for
    pub fundable_executions: u64,
    /// Wallet runs dry before expiration
    pub underfunded: bool,
}

/// Chronos protocol errors
#[derive(Debug, Error)]
pub enum ChronosError {
    #[error("Input out of range: {}", .reasons.join("; "))]
    InputOutOfRange { reasons: Vec<String> },

    #[error("Missing prerequisite: {0}")]
    MissingPrerequisite(String),

    #[error("Invalid target address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    Amount(#[from] UnitsError),
}

impl From<ChronosError> for ProtocolError {
    fn from(err: ChronosError) -> Self {
        match err {
            ChronosError::InputOutOfRange { reasons } => ProtocolError::ValidationFailed { reasons },
            ChronosError::MissingPrerequisite(what) => ProtocolError::MissingPrerequisite { what },
            ChronosError::InvalidAddress(address) => ProtocolError::InvalidAddress { address },
            ChronosError::Amount(e) => e.into(),
        }
    }
}

//! Cron parameter validation
//!
//! Stateless bound checks run before any value reaches a transaction.
//! Each check yields a [`Check`]; composite validation collects every
//! failure instead of stopping at the first one.

use alloy_primitives::U256;
use helios_core::{BlockHeight, ValidationPolicy};
use serde::{Deserialize, Serialize};

use crate::state::ChronosError;

/// Outcome of a single bound check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Check {
    pub fn pass() -> Self {
        Self {
            is_valid: true,
            reason: None,
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Aggregated result of several checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub reasons: Vec<String>,
}

impl ValidationReport {
    pub fn from_checks(checks: impl IntoIterator<Item = Check>) -> Self {
        let reasons: Vec<String> = checks.into_iter().filter_map(|c| c.reason).collect();
        Self {
            is_valid: reasons.is_empty(),
            reasons,
        }
    }

    pub fn into_result(self) -> Result<(), ChronosError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ChronosError::InputOutOfRange {
                reasons: self.reasons,
            })
        }
    }
}

/// Parameters of a job-creation request, after cost estimation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronParams {
    pub frequency: u64,
    pub expiration_offset: u64,
    pub deposit_wei: U256,
    /// Deposit cap derived from the max horizon at this frequency
    pub horizon_max_wei: Option<U256>,
    pub current_block: BlockHeight,
}

pub fn check_frequency(frequency: u64, policy: &ValidationPolicy) -> Check {
    if frequency < policy.min_frequency {
        return Check::fail(format!("frequency must be >= {}", policy.min_frequency));
    }
    if frequency > policy.max_frequency {
        return Check::fail("frequency exceeds maximum");
    }
    Check::pass()
}

pub fn check_expiration_offset(offset: u64, policy: &ValidationPolicy) -> Check {
    if offset < policy.min_expiration_offset {
        return Check::fail(format!(
            "expiration offset must be >= {}",
            policy.min_expiration_offset
        ));
    }
    if offset > policy.max_expiration_offset {
        return Check::fail("expiration offset exceeds maximum");
    }
    Check::pass()
}

/// Cron IDs arrive signed from the form; anything negative is rejected
pub fn check_cron_id(cron_id: i64) -> Check {
    if cron_id < 0 {
        return Check::fail("invalid cron id");
    }
    Check::pass()
}

/// Deposit must be positive and inside the policy floor/ceiling
pub fn check_deposit_amount(deposit_wei: U256, policy: &ValidationPolicy) -> Check {
    if deposit_wei.is_zero() {
        return Check::fail("deposit amount must be greater than zero");
    }
    if deposit_wei < policy.min_deposit_wei {
        return Check::fail("deposit amount below minimum");
    }
    if deposit_wei > policy.max_deposit_wei {
        return Check::fail("deposit amount exceeds maximum");
    }
    Check::pass()
}

/// Independent of [`check_deposit_amount`]: the cap derived from the horizon
pub fn check_deposit_within_horizon(deposit_wei: U256, horizon_max_wei: U256) -> Check {
    if deposit_wei > horizon_max_wei {
        return Check::fail("deposit exceeds maximum for horizon");
    }
    Check::pass()
}

pub fn check_expiration_in_future(
    expiration_block: BlockHeight,
    current_block: BlockHeight,
) -> Check {
    if expiration_block <= current_block {
        return Check::fail("expiration not in the future");
    }
    Check::pass()
}

/// Validate a job-creation request. All failures are reported.
pub fn validate_create(policy: &ValidationPolicy, params: &CronParams) -> ValidationReport {
    let expiration_block = params
        .current_block
        .saturating_add(params.expiration_offset);

    let mut checks = vec![
        check_frequency(params.frequency, policy),
        check_expiration_offset(params.expiration_offset, policy),
        check_deposit_amount(params.deposit_wei, policy),
        check_expiration_in_future(expiration_block, params.current_block),
    ];
    if let Some(max) = params.horizon_max_wei {
        checks.push(check_deposit_within_horizon(params.deposit_wei, max));
    }

    ValidationReport::from_checks(checks)
}

/// Validate a job-update request. All failures are reported.
pub fn validate_update(
    policy: &ValidationPolicy,
    cron_id: i64,
    frequency: u64,
    expiration_offset: u64,
    current_block: BlockHeight,
) -> ValidationReport {
    let expiration_block = current_block.saturating_add(expiration_offset);
    ValidationReport::from_checks([
        check_cron_id(cron_id),
        check_frequency(frequency, policy),
        check_expiration_offset(expiration_offset, policy),
        check_expiration_in_future(expiration_block, current_block),
    ])
}

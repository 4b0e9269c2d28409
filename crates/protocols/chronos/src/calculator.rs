//! Chronos Deposit Calculator
//!
//! Pure math functions converting between a schedule and the deposit that
//! funds it. No I/O, no async.
//!
//! # Units
//!
//! - Amounts: wei (`U256`), 1 HLS = 10^18 wei
//! - Frequency, duration, horizon: blocks (`u64`)
//! - Safety buffer: basis points, applied once as
//!   `floor(total * (10_000 + buffer_bps) / 10_000)`

use alloy_primitives::U256;
use helios_core::{format_units, BlockHeight, ChronosConfig};
use serde::{Deserialize, Serialize};

use helios_core::units::serde_decimal;

use crate::block_time::BlockClock;
use crate::constants::{BPS_DENOM, NATIVE_DECIMALS};
use crate::gas::{classify_method, estimate_cost_per_execution, GasParams};
use crate::state::{CronDepositPreview, CronJobInfo, CronJobSummary};

/// Result of a deposit calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositEstimate {
    /// Deposit including the safety buffer
    #[serde(with = "serde_decimal")]
    pub amount: U256,
    pub executions: u64,
    #[serde(with = "serde_decimal")]
    pub per_execution_cost: U256,
    /// executions * per_execution_cost, before the buffer
    #[serde(with = "serde_decimal")]
    pub total_cost: U256,
}

impl DepositEstimate {
    fn zero(per_execution_cost: U256) -> Self {
        Self {
            amount: U256::ZERO,
            executions: 0,
            per_execution_cost,
            total_cost: U256::ZERO,
        }
    }
}

/// Result of converting a deposit back into a schedule length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpirationEstimate {
    pub expiration_block: BlockHeight,
    pub blocks: u64,
    pub possible_executions: u64,
}

fn apply_buffer(total: U256, safety_buffer_bps: u32) -> U256 {
    let factor = U256::from(BPS_DENOM) + U256::from(safety_buffer_bps);
    total.saturating_mul(factor) / U256::from(BPS_DENOM)
}

fn u64_saturating(value: U256) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

fn estimate_for_executions(
    executions: u64,
    per_execution_cost: U256,
    safety_buffer_bps: u32,
) -> DepositEstimate {
    let total_cost = U256::from(executions).saturating_mul(per_execution_cost);
    DepositEstimate {
        amount: apply_buffer(total_cost, safety_buffer_bps),
        executions,
        per_execution_cost,
        total_cost,
    }
}

/// Deposit required to run every `frequency_blocks` for `duration_blocks`.
///
/// Returns an all-zero estimate when either input is 0 ("not computable yet").
pub fn required_deposit(
    frequency_blocks: u64,
    duration_blocks: u64,
    per_execution_cost: U256,
    safety_buffer_bps: u32,
) -> DepositEstimate {
    if frequency_blocks == 0 || duration_blocks == 0 {
        return DepositEstimate::zero(per_execution_cost);
    }
    let executions = duration_blocks / frequency_blocks;
    estimate_for_executions(executions, per_execution_cost, safety_buffer_bps)
}

/// How far a deposit carries a job, capped at `max_horizon_blocks`.
///
/// A zero per-execution cost leaves `current_block` unchanged.
pub fn expiration_from_deposit(
    deposit_wei: U256,
    frequency_blocks: u64,
    per_execution_cost: U256,
    current_block: BlockHeight,
    max_horizon_blocks: u64,
) -> ExpirationEstimate {
    if per_execution_cost.is_zero() {
        return ExpirationEstimate {
            expiration_block: current_block,
            blocks: 0,
            possible_executions: 0,
        };
    }

    let possible_executions = u64_saturating(deposit_wei / per_execution_cost);
    let blocks = possible_executions
        .saturating_mul(frequency_blocks)
        .min(max_horizon_blocks);

    ExpirationEstimate {
        expiration_block: current_block.saturating_add(blocks),
        blocks,
        possible_executions,
    }
}

/// Largest deposit that still fits in the horizon at this frequency.
///
/// A zero frequency is treated as 1.
pub fn max_deposit_for_horizon(
    frequency_blocks: u64,
    max_horizon_blocks: u64,
    per_execution_cost: U256,
    safety_buffer_bps: u32,
) -> DepositEstimate {
    let max_executions = max_horizon_blocks / frequency_blocks.max(1);
    estimate_for_executions(max_executions, per_execution_cost, safety_buffer_bps)
}

/// Executions a wallet balance can still pay for
pub fn remaining_executions(balance_wei: U256, per_execution_cost: U256) -> u64 {
    if per_execution_cost.is_zero() {
        return 0;
    }
    u64_saturating(balance_wei / per_execution_cost)
}

/// Full deposit preview for the create-job wizard
pub fn deposit_preview(
    method: Option<&str>,
    explicit_gas_price_wei: Option<U256>,
    frequency_blocks: u64,
    duration_blocks: u64,
    config: &ChronosConfig,
) -> CronDepositPreview {
    let params = GasParams::from_config(config);
    let cost = estimate_cost_per_execution(method, explicit_gas_price_wei, &params);
    let estimate = required_deposit(
        frequency_blocks,
        duration_blocks,
        cost,
        config.safety_buffer_bps,
    );
    let max = max_deposit_for_horizon(
        frequency_blocks,
        config.max_horizon_blocks,
        cost,
        config.safety_buffer_bps,
    );

    tracing::debug!(
        frequency_blocks,
        duration_blocks,
        executions = estimate.executions,
        deposit_wei = %estimate.amount,
        "Computed deposit preview"
    );

    CronDepositPreview {
        method_category: classify_method(method, &config.no_multiplier_methods),
        frequency_blocks,
        duration_blocks,
        frequency_label: BlockClock::selector(config).label_for(frequency_blocks),
        duration_label: BlockClock::scheduler(config).label_for(duration_blocks),
        executions: estimate.executions,
        cost_per_execution_wei: cost,
        total_cost_wei: estimate.total_cost,
        deposit_hls: format_units(estimate.amount, NATIVE_DECIMALS),
        deposit_wei: estimate.amount,
        max_deposit_wei: max.amount,
    }
}

/// Remaining lifetime and funding of an existing job.
///
/// `current_block == 0` (chain not queried yet) yields a non-actionable
/// summary: `head_known` is false, nothing is expired, remaining and
/// scheduled counts are zero and the job is not flagged as underfunded.
pub fn summarize_job(
    job: &CronJobInfo,
    current_block: BlockHeight,
    config: &ChronosConfig,
) -> CronJobSummary {
    let params = GasParams::from_config(config);
    let cost = estimate_cost_per_execution(job.method.as_deref(), None, &params);
    let fundable_executions = remaining_executions(job.wallet_balance_wei, cost);
    let clock = BlockClock::scheduler(config);

    if current_block == 0 {
        return CronJobSummary {
            cron_id: job.cron_id,
            head_known: false,
            is_expired: false,
            blocks_remaining: 0,
            time_remaining: clock.label_for(0),
            scheduled_executions: 0,
            fundable_executions,
            underfunded: false,
        };
    }

    let is_expired = job.expiration_block <= current_block;
    let blocks_remaining = job.expiration_block.saturating_sub(current_block);
    let scheduled_executions = if job.frequency == 0 {
        0
    } else {
        blocks_remaining / job.frequency
    };

    CronJobSummary {
        cron_id: job.cron_id,
        head_known: true,
        is_expired,
        blocks_remaining,
        time_remaining: clock.label_for(blocks_remaining),
        scheduled_executions,
        fundable_executions,
        underfunded: !is_expired && fundable_executions < scheduled_executions,
    }
}

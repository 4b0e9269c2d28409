//! Gas Cost Estimator
//!
//! Per-execution cost in wei:
//!
//! ```text
//! cost = base_cost
//! cost = floor(cost * multiplier_bps / 10_000)     if method is a token operation
//! cost = max(cost, estimate_gas_limit * gas_price) if an explicit gas price is given
//! ```

use alloy_primitives::U256;
use helios_core::ChronosConfig;
use serde::{Deserialize, Serialize};

use crate::constants::BPS_DENOM;

/// How a target method is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MethodCategory {
    /// Billed at the base cost
    Standard,
    /// Billed at base cost times the token multiplier
    TokenOperation,
}

/// Inputs of the estimator, borrowed from [`ChronosConfig`]
#[derive(Debug, Clone, Copy)]
pub struct GasParams<'a> {
    pub base_cost_wei: U256,
    pub token_multiplier_bps: u32,
    pub estimate_gas_limit: u64,
    pub no_multiplier_methods: &'a [String],
}

impl<'a> GasParams<'a> {
    pub fn from_config(config: &'a ChronosConfig) -> Self {
        Self {
            base_cost_wei: config.base_cost_wei,
            token_multiplier_bps: config.token_multiplier_bps,
            estimate_gas_limit: config.estimate_gas_limit,
            no_multiplier_methods: &config.no_multiplier_methods,
        }
    }
}

/// Classify a method name. No method (or an empty one) is billed as standard.
pub fn classify_method(method: Option<&str>, no_multiplier_methods: &[String]) -> MethodCategory {
    match method.map(str::trim) {
        None | Some("") => MethodCategory::Standard,
        Some(name) if no_multiplier_methods.iter().any(|m| m == name) => {
            MethodCategory::Standard
        }
        Some(_) => MethodCategory::TokenOperation,
    }
}

/// Cost of a single execution in wei. Never fails.
pub fn estimate_cost_per_execution(
    method: Option<&str>,
    explicit_gas_price_wei: Option<U256>,
    params: &GasParams<'_>,
) -> U256 {
    let mut cost = params.base_cost_wei;

    if classify_method(method, params.no_multiplier_methods) == MethodCategory::TokenOperation {
        cost = cost.saturating_mul(U256::from(params.token_multiplier_bps)) / U256::from(BPS_DENOM);
    }

    if let Some(gas_price) = explicit_gas_price_wei {
        let floor = U256::from(params.estimate_gas_limit).saturating_mul(gas_price);
        cost = cost.max(floor);
    }

    tracing::debug!(
        method = method.unwrap_or("<none>"),
        cost_wei = %cost,
        "Estimated cost per execution"
    );
    cost
}

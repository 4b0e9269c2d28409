//! createErc20 call building

use alloy_primitives::{Address, U256};
use helios_core::units::serde_decimal;
use helios_core::{parse_units, Erc20Config};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::CREATE_ERC20_METHOD;
use crate::state::{CreateTokenRequest, TokenError};
use crate::validate::{derive_denom, logo_payload, validate_token_request};

/// Arguments of `createErc20`, supply already in base units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateErc20Args {
    pub name: String,
    pub symbol: String,
    pub denom: String,
    #[serde(with = "serde_decimal")]
    pub total_supply: U256,
    pub decimals: u8,
    /// Bare base64 payload, empty when no logo was supplied
    pub logo_base64: String,
}

impl CreateErc20Args {
    pub fn positional(&self) -> Vec<Value> {
        vec![
            Value::String(self.name.clone()),
            Value::String(self.symbol.clone()),
            Value::String(self.denom.clone()),
            Value::String(self.total_supply.to_string()),
            Value::from(self.decimals),
            Value::String(self.logo_base64.clone()),
        ]
    }
}

/// Ready-to-sign deployment call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedTokenDeployment {
    pub to: Address,
    pub method: String,
    pub args: CreateErc20Args,
    pub positional: Vec<Value>,
    pub gas_limit: u64,
}

/// Validate the request and build the `createErc20` call.
pub fn build_create_token_args(
    request: &CreateTokenRequest,
    config: &Erc20Config,
) -> Result<PreparedTokenDeployment, TokenError> {
    validate_token_request(request, config)?;

    let decimals = request.decimals.unwrap_or(config.default_decimals);
    let total_supply = parse_units(&request.total_supply, decimals)?;
    if total_supply.is_zero() {
        return Err(TokenError::invalid("totalSupply", "must be greater than zero"));
    }

    let args = CreateErc20Args {
        name: request.name.trim().to_string(),
        symbol: request.symbol.trim().to_string(),
        denom: request
            .denom
            .clone()
            .unwrap_or_else(|| derive_denom(&request.symbol)),
        total_supply,
        decimals,
        logo_base64: request
            .logo_base64
            .as_deref()
            .map(|logo| logo_payload(logo).trim().to_string())
            .unwrap_or_default(),
    };

    tracing::info!(
        symbol = %args.symbol,
        denom = %args.denom,
        supply = %args.total_supply,
        "Prepared createErc20 call"
    );

    Ok(PreparedTokenDeployment {
        to: config.precompile_address,
        method: CREATE_ERC20_METHOD.to_string(),
        positional: args.positional(),
        args,
        gas_limit: config.tx_gas_limit,
    })
}

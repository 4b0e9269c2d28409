//! Cron argument builder
//!
//! Turns validated parameters into the positional arguments of the Chronos
//! precompile calls:
//!
//! ```text
//! createCron(target, abi, methodName, params[], frequency, expirationBlock,
//!            gasLimit, maxGasPrice, amountToDeposit)
//! updateCron(cronId, newFrequency, newParams[], newExpirationBlock,
//!            newGasLimit, newMaxGasPrice)
//! cancelCron(cronId)
//! ```
//!
//! Every numeric argument is an integer (`u64` or `U256`). Token amounts in
//! `params[]` are scaled to base units with exact decimal arithmetic.

use alloy_primitives::{Address, U256};
use helios_core::units::serde_decimal;
use helios_core::{parse_address, parse_units, BlockHeight, ChronosConfig, ValidationPolicy};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calculator::{max_deposit_for_horizon, required_deposit, DepositEstimate};
use crate::constants::{DEFAULT_TOKEN_DECIMALS, METHOD_MINT_AND_BURN, NATIVE_DECIMALS};
use crate::gas::{estimate_cost_per_execution, GasParams};
use crate::state::ChronosError;
use crate::validate::{check_cron_id, validate_create, validate_update, CronParams};

/// Which form the parameters came from; selects the validation policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterSource {
    /// Raw block values typed by the user (frequency 1..=10)
    #[default]
    Manual,
    /// Dropdown presets resolved through the block clocks (frequency 1..=1000)
    Preset,
}

impl ParameterSource {
    pub fn policy<'a>(&self, config: &'a ChronosConfig) -> &'a ValidationPolicy {
        match self {
            Self::Manual => &config.manual_policy,
            Self::Preset => &config.preset_policy,
        }
    }
}

fn default_token_decimals() -> u8 {
    DEFAULT_TOKEN_DECIMALS
}

/// Request to create a cron job
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    /// Contract the job calls
    pub target_address: String,
    /// ABI of the target method as a JSON string
    pub abi_json: String,
    pub method_name: String,
    /// Human token amount for value-taking methods, e.g. "100"
    #[serde(default)]
    pub token_amount: Option<String>,
    #[serde(default = "default_token_decimals")]
    pub token_decimals: u8,
    /// Blocks between executions
    pub frequency: u64,
    /// Blocks from now until the job expires
    pub expiration_offset: u64,
    /// Explicit gas price; also becomes the job's max gas price
    #[serde(default, with = "serde_decimal::option")]
    pub gas_price_wei: Option<U256>,
    /// Explicit deposit in HLS; computed from the schedule when absent
    #[serde(default)]
    pub deposit: Option<String>,
    #[serde(default)]
    pub source: ParameterSource,
}

/// Request to update an existing cron job
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    /// Signed so a negative form value reaches validation instead of failing
    /// to parse. Ids above `i64::MAX` are not accepted.
    pub cron_id: i64,
    pub frequency: u64,
    pub expiration_offset: u64,
    #[serde(default)]
    pub method_name: Option<String>,
    #[serde(default)]
    pub token_amount: Option<String>,
    #[serde(default = "default_token_decimals")]
    pub token_decimals: u8,
    #[serde(default, with = "serde_decimal::option")]
    pub gas_price_wei: Option<U256>,
    #[serde(default)]
    pub source: ParameterSource,
}

/// Arguments of `createCron`, in call order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobArgs {
    pub target_address: Address,
    pub abi_json: String,
    pub method_name: String,
    pub method_args: Vec<String>,
    pub frequency: u64,
    pub expiration_block: BlockHeight,
    pub gas_limit: u64,
    #[serde(with = "serde_decimal")]
    pub max_gas_price: U256,
    #[serde(with = "serde_decimal")]
    pub amount_to_deposit: U256,
}

/// Arguments of `updateCron`, in call order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobArgs {
    pub cron_id: u64,
    pub new_frequency: u64,
    pub new_params: Vec<String>,
    pub new_expiration_block: BlockHeight,
    pub new_gas_limit: u64,
    #[serde(with = "serde_decimal")]
    pub new_max_gas_price: U256,
}

/// Arguments of `cancelCron`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelJobArgs {
    pub cron_id: u64,
}

fn strings(values: &[String]) -> Value {
    Value::Array(values.iter().cloned().map(Value::String).collect())
}

fn int(value: impl ToString) -> Value {
    Value::String(value.to_string())
}

impl CreateJobArgs {
    /// Positional argument list; integers as decimal strings
    pub fn positional(&self) -> Vec<Value> {
        vec![
            Value::String(self.target_address.to_checksum(None)),
            Value::String(self.abi_json.clone()),
            Value::String(self.method_name.clone()),
            strings(&self.method_args),
            int(self.frequency),
            int(self.expiration_block),
            int(self.gas_limit),
            int(self.max_gas_price),
            int(self.amount_to_deposit),
        ]
    }
}

impl UpdateJobArgs {
    pub fn positional(&self) -> Vec<Value> {
        vec![
            int(self.cron_id),
            int(self.new_frequency),
            strings(&self.new_params),
            int(self.new_expiration_block),
            int(self.new_gas_limit),
            int(self.new_max_gas_price),
        ]
    }
}

impl CancelJobArgs {
    pub fn positional(&self) -> Vec<Value> {
        vec![int(self.cron_id)]
    }
}

/// A Chronos call, tagged by kind so create/update arguments cannot be mixed up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "call", content = "args", rename_all = "camelCase")]
pub enum CronCallArgs {
    CreateCron(CreateJobArgs),
    UpdateCron(UpdateJobArgs),
    CancelCron(CancelJobArgs),
}

impl CronCallArgs {
    /// Precompile method name
    pub fn method(&self) -> &'static str {
        match self {
            Self::CreateCron(_) => "createCron",
            Self::UpdateCron(_) => "updateCron",
            Self::CancelCron(_) => "cancelCron",
        }
    }

    pub fn positional(&self) -> Vec<Value> {
        match self {
            Self::CreateCron(args) => args.positional(),
            Self::UpdateCron(args) => args.positional(),
            Self::CancelCron(args) => args.positional(),
        }
    }
}

impl From<CreateJobArgs> for CronCallArgs {
    fn from(args: CreateJobArgs) -> Self {
        Self::CreateCron(args)
    }
}

impl From<UpdateJobArgs> for CronCallArgs {
    fn from(args: UpdateJobArgs) -> Self {
        Self::UpdateCron(args)
    }
}

impl From<CancelJobArgs> for CronCallArgs {
    fn from(args: CancelJobArgs) -> Self {
        Self::CancelCron(args)
    }
}

/// Everything the transaction collaborator needs to submit a Chronos call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallPayload {
    pub to: Address,
    pub method: String,
    #[serde(flatten)]
    pub call: CronCallArgs,
    pub positional: Vec<Value>,
    /// Gas limit of the transaction envelope (not the per-execution limit)
    pub gas_limit: u64,
}

impl CallPayload {
    pub fn new(call: CronCallArgs, config: &ChronosConfig) -> Self {
        Self {
            to: config.precompile_address,
            method: call.method().to_string(),
            positional: call.positional(),
            call,
            gas_limit: config.tx_gas_limit,
        }
    }
}

/// Result of preparing a createCron call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedCreateJob {
    pub args: CreateJobArgs,
    pub estimate: DepositEstimate,
}

/// Encode the target method's arguments.
///
/// A token amount becomes a single base-unit decimal string; methods without
/// one get no arguments. `mintAndBurn` is encoded from its mint leg only.
pub fn encode_method_args(
    method_name: &str,
    token_amount: Option<&str>,
    decimals: u8,
) -> Result<Vec<String>, ChronosError> {
    let Some(amount) = token_amount.map(str::trim).filter(|a| !a.is_empty()) else {
        return Ok(Vec::new());
    };
    let scaled = parse_units(amount, decimals)?;
    if method_name == METHOD_MINT_AND_BURN {
        tracing::debug!(amount = %scaled, "mintAndBurn encoded with mint amount");
    }
    Ok(vec![scaled.to_string()])
}

fn require_block(current_block: Option<BlockHeight>) -> Result<BlockHeight, ChronosError> {
    current_block
        .filter(|&b| b > 0)
        .ok_or_else(|| ChronosError::MissingPrerequisite("current block height".to_string()))
}

/// Estimate, validate and encode a createCron call.
///
/// Fails with [`ChronosError::MissingPrerequisite`] until the chain head is
/// known, and with [`ChronosError::InputOutOfRange`] listing every violated bound.
pub fn prepare_create_job(
    request: &CreateJobRequest,
    current_block: Option<BlockHeight>,
    config: &ChronosConfig,
) -> Result<PreparedCreateJob, ChronosError> {
    let current_block = require_block(current_block)?;
    let target_address = parse_address(&request.target_address)
        .map_err(|_| ChronosError::InvalidAddress(request.target_address.clone()))?;

    let params = GasParams::from_config(config);
    let cost = estimate_cost_per_execution(
        Some(request.method_name.as_str()),
        request.gas_price_wei,
        &params,
    );
    let estimate = required_deposit(
        request.frequency,
        request.expiration_offset,
        cost,
        config.safety_buffer_bps,
    );

    // Computed or hand-entered, the deposit may not fund runs past the horizon
    let horizon_max = max_deposit_for_horizon(
        request.frequency,
        config.max_horizon_blocks,
        cost,
        config.safety_buffer_bps,
    );
    let deposit_wei = match request.deposit.as_deref() {
        Some(deposit) => parse_units(deposit, NATIVE_DECIMALS)?,
        None => estimate.amount,
    };

    let cron_params = CronParams {
        frequency: request.frequency,
        expiration_offset: request.expiration_offset,
        deposit_wei,
        horizon_max_wei: Some(horizon_max.amount),
        current_block,
    };
    let report = validate_create(request.source.policy(config), &cron_params);
    if !report.is_valid {
        tracing::warn!(reasons = ?report.reasons, "Rejected createCron parameters");
    }
    report.into_result()?;

    let method_args = encode_method_args(
        &request.method_name,
        request.token_amount.as_deref(),
        request.token_decimals,
    )?;

    let args = CreateJobArgs {
        target_address,
        abi_json: request.abi_json.clone(),
        method_name: request.method_name.clone(),
        method_args,
        frequency: request.frequency,
        expiration_block: current_block.saturating_add(request.expiration_offset),
        gas_limit: config.job_gas_limit,
        max_gas_price: request
            .gas_price_wei
            .unwrap_or(config.default_max_gas_price_wei),
        amount_to_deposit: deposit_wei,
    };

    tracing::info!(
        contract = %args.target_address,
        method = %args.method_name,
        frequency = args.frequency,
        expiration_block = args.expiration_block,
        deposit_wei = %args.amount_to_deposit,
        "Prepared createCron"
    );

    Ok(PreparedCreateJob { args, estimate })
}

/// Validate and encode an updateCron call
pub fn prepare_update_job(
    request: &UpdateJobRequest,
    current_block: Option<BlockHeight>,
    config: &ChronosConfig,
) -> Result<UpdateJobArgs, ChronosError> {
    let current_block = require_block(current_block)?;

    validate_update(
        request.source.policy(config),
        request.cron_id,
        request.frequency,
        request.expiration_offset,
        current_block,
    )
    .into_result()?;

    let has_amount = request
        .token_amount
        .as_deref()
        .is_some_and(|a| !a.trim().is_empty());
    let new_params = match request.method_name.as_deref().map(str::trim) {
        Some(method) if !method.is_empty() => encode_method_args(
            method,
            request.token_amount.as_deref(),
            request.token_decimals,
        )?,
        _ if has_amount => {
            return Err(ChronosError::InputOutOfRange {
                reasons: vec!["token amount requires a method name".to_string()],
            });
        }
        _ => Vec::new(),
    };

    let args = UpdateJobArgs {
        cron_id: request.cron_id as u64,
        new_frequency: request.frequency,
        new_params,
        new_expiration_block: current_block.saturating_add(request.expiration_offset),
        new_gas_limit: config.job_gas_limit,
        new_max_gas_price: request
            .gas_price_wei
            .unwrap_or(config.default_max_gas_price_wei),
    };

    tracing::info!(
        cron_id = args.cron_id,
        frequency = args.new_frequency,
        expiration_block = args.new_expiration_block,
        "Prepared updateCron"
    );

    Ok(args)
}

/// Validate and encode a cancelCron call
pub fn prepare_cancel_job(cron_id: i64) -> Result<CancelJobArgs, ChronosError> {
    if let Some(reason) = check_cron_id(cron_id).reason {
        return Err(ChronosError::InputOutOfRange {
            reasons: vec![reason],
        });
    }
    Ok(CancelJobArgs {
        cron_id: cron_id as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: &str = "0x742d35Cc6634c0532925a3B844BC9E7595F2bd08";

    fn mint_request() -> CreateJobRequest {
        CreateJobRequest {
            target_address: TARGET.to_string(),
            abi_json: r#"[{"name":"mint","type":"function"}]"#.to_string(),
            method_name: "mint".to_string(),
            token_amount: Some("100".to_string()),
            token_decimals: 18,
            frequency: 60,
            expiration_offset: 7_200,
            gas_price_wei: None,
            deposit: None,
            source: ParameterSource::Preset,
        }
    }

    #[test]
    fn test_encode_token_amount_exact() {
        let args = encode_method_args("mint", Some("100"), 18).unwrap();
        assert_eq!(args, vec!["100000000000000000000".to_string()]);

        let args = encode_method_args("burn", Some("0.000000000000000001"), 18).unwrap();
        assert_eq!(args, vec!["1".to_string()]);

        let args = encode_method_args("transfer", Some("2.5"), 6).unwrap();
        assert_eq!(args, vec!["2500000".to_string()]);
    }

    #[test]
    fn test_encode_no_amount() {
        assert!(encode_method_args("increment", None, 18).unwrap().is_empty());
        assert!(encode_method_args("ping", Some("  "), 18).unwrap().is_empty());
    }

    #[test]
    fn test_encode_mint_and_burn_uses_mint_amount() {
        let args = encode_method_args("mintAndBurn", Some("3"), 18).unwrap();
        assert_eq!(args, vec!["3000000000000000000".to_string()]);
    }

    #[test]
    fn test_encode_rejects_bad_amount() {
        assert!(matches!(
            encode_method_args("mint", Some("1.5.0"), 18),
            Err(ChronosError::Amount(_))
        ));
    }

    #[test]
    fn test_prepare_create_reference_case() {
        let config = ChronosConfig::default();
        let prepared = prepare_create_job(&mint_request(), Some(1_000), &config).unwrap();

        assert_eq!(prepared.estimate.executions, 120);
        assert_eq!(
            prepared.args.amount_to_deposit,
            U256::from(21_600_000_000_000_000u64)
        );
        assert_eq!(prepared.args.expiration_block, 8_200);
        assert_eq!(prepared.args.gas_limit, config.job_gas_limit);
        assert_eq!(prepared.args.max_gas_price, config.default_max_gas_price_wei);
        assert_eq!(prepared.args.method_args, vec!["100000000000000000000"]);

        let positional = prepared.args.positional();
        assert_eq!(positional.len(), 9);
        assert_eq!(positional[0], Value::String(TARGET.to_string()));
        assert_eq!(positional[2], Value::String("mint".to_string()));
        assert_eq!(
            positional[3],
            serde_json::json!(["100000000000000000000"])
        );
        assert_eq!(positional[4], Value::String("60".to_string()));
        assert_eq!(positional[5], Value::String("8200".to_string()));
        assert_eq!(positional[8], Value::String("21600000000000000".to_string()));
    }

    #[test]
    fn test_prepare_create_requires_block() {
        let config = ChronosConfig::default();
        for block in [None, Some(0)] {
            assert!(matches!(
                prepare_create_job(&mint_request(), block, &config),
                Err(ChronosError::MissingPrerequisite(_))
            ));
        }
    }

    #[test]
    fn test_prepare_create_manual_policy_rejects_preset_frequency() {
        let config = ChronosConfig::default();
        let mut request = mint_request();
        request.source = ParameterSource::Manual;
        match prepare_create_job(&request, Some(1_000), &config) {
            Err(ChronosError::InputOutOfRange { reasons }) => {
                assert_eq!(reasons, vec!["frequency exceeds maximum"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_prepare_create_reports_all_failures() {
        let config = ChronosConfig::default();
        let mut request = mint_request();
        request.source = ParameterSource::Manual;
        request.frequency = 0;
        request.expiration_offset = 20_000;
        match prepare_create_job(&request, Some(1_000), &config) {
            Err(ChronosError::InputOutOfRange { reasons }) => {
                assert!(reasons.contains(&"frequency must be >= 1".to_string()));
                assert!(reasons.contains(&"expiration offset exceeds maximum".to_string()));
                // Zero frequency gives a zero deposit
                assert!(reasons.contains(&"deposit amount must be greater than zero".to_string()));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_prepare_create_explicit_deposit() {
        let config = ChronosConfig::default();
        let mut request = mint_request();
        request.deposit = Some("0.05".to_string());
        let prepared = prepare_create_job(&request, Some(1_000), &config).unwrap();
        assert_eq!(
            prepared.args.amount_to_deposit,
            U256::from(50_000_000_000_000_000u64)
        );

        // 10 HLS is under the 1000 HLS ceiling but above the 2.592 HLS horizon cap
        request.deposit = Some("10".to_string());
        match prepare_create_job(&request, Some(1_000), &config) {
            Err(ChronosError::InputOutOfRange { reasons }) => {
                assert_eq!(reasons, vec!["deposit exceeds maximum for horizon"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_prepare_create_invalid_address() {
        let config = ChronosConfig::default();
        let mut request = mint_request();
        request.target_address = "0x1234".to_string();
        assert!(matches!(
            prepare_create_job(&request, Some(1_000), &config),
            Err(ChronosError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_prepare_create_gas_price_becomes_max() {
        let config = ChronosConfig::default();
        let mut request = mint_request();
        request.gas_price_wei = Some(U256::from(5_000_000_000u64));
        let prepared = prepare_create_job(&request, Some(1_000), &config).unwrap();
        assert_eq!(prepared.args.max_gas_price, U256::from(5_000_000_000u64));
        // 100_000 * 5 gwei = 5e14 > 1.5e14
        assert_eq!(
            prepared.estimate.per_execution_cost,
            U256::from(500_000_000_000_000u64)
        );
    }

    #[test]
    fn test_prepare_update() {
        let config = ChronosConfig::default();
        let request = UpdateJobRequest {
            cron_id: 12,
            frequency: 120,
            expiration_offset: 28_800,
            method_name: Some("mint".to_string()),
            token_amount: Some("1".to_string()),
            token_decimals: 18,
            gas_price_wei: None,
            source: ParameterSource::Preset,
        };
        let args = prepare_update_job(&request, Some(5_000), &config).unwrap();
        assert_eq!(args.cron_id, 12);
        assert_eq!(args.new_expiration_block, 33_800);
        assert_eq!(args.new_params, vec!["1000000000000000000"]);

        let positional = args.positional();
        assert_eq!(positional.len(), 6);
        assert_eq!(positional[0], Value::String("12".to_string()));
        assert_eq!(positional[1], Value::String("120".to_string()));
    }

    #[test]
    fn test_prepare_create_lowered_horizon() {
        // Preset bound left at its default while the horizon shrinks
        let config = ChronosConfig {
            max_horizon_blocks: 10_000,
            ..ChronosConfig::default()
        };
        let mut request = mint_request();
        request.expiration_offset = 500_000;
        match prepare_create_job(&request, Some(1_000), &config) {
            Err(ChronosError::InputOutOfRange { reasons }) => {
                assert_eq!(reasons, vec!["deposit exceeds maximum for horizon"]);
            }
            other => panic!("unexpected: {:?}", other),
        }

        // Within the lowered horizon the computed deposit passes
        request.expiration_offset = 7_200;
        let prepared = prepare_create_job(&request, Some(1_000), &config).unwrap();
        assert_eq!(prepared.estimate.executions, 120);
    }

    #[test]
    fn test_prepare_create_consistent_lowered_horizon() {
        let mut config = ChronosConfig {
            max_horizon_blocks: 10_000,
            ..ChronosConfig::default()
        };
        config.preset_policy.max_expiration_offset = 10_000;

        let mut request = mint_request();
        request.expiration_offset = 500_000;
        match prepare_create_job(&request, Some(1_000), &config) {
            Err(ChronosError::InputOutOfRange { reasons }) => {
                assert!(reasons.contains(&"expiration offset exceeds maximum".to_string()));
                assert!(reasons.contains(&"deposit exceeds maximum for horizon".to_string()));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_prepare_update_amount_without_method() {
        let config = ChronosConfig::default();
        let request = UpdateJobRequest {
            cron_id: 4,
            frequency: 5,
            expiration_offset: 100,
            method_name: None,
            token_amount: Some("2".to_string()),
            token_decimals: 18,
            gas_price_wei: None,
            source: ParameterSource::Manual,
        };
        match prepare_update_job(&request, Some(5_000), &config) {
            Err(ChronosError::InputOutOfRange { reasons }) => {
                assert_eq!(reasons, vec!["token amount requires a method name"]);
            }
            other => panic!("unexpected: {:?}", other),
        }

        // No amount and no method keeps the params empty
        let request = UpdateJobRequest {
            token_amount: None,
            ..request
        };
        let args = prepare_update_job(&request, Some(5_000), &config).unwrap();
        assert!(args.new_params.is_empty());
    }

    #[test]
    fn test_cron_id_upper_range() {
        let request: UpdateJobRequest = serde_json::from_str(&format!(
            r#"{{"cronId":{},"frequency":5,"expirationOffset":100}}"#,
            i64::MAX
        ))
        .unwrap();
        let args = prepare_update_job(&request, Some(10), &ChronosConfig::default()).unwrap();
        assert_eq!(args.cron_id, i64::MAX as u64);

        assert!(serde_json::from_str::<UpdateJobRequest>(
            r#"{"cronId":9223372036854775808,"frequency":5,"expirationOffset":100}"#
        )
        .is_err());
    }

    #[test]
    fn test_prepare_update_invalid_cron_id() {
        let config = ChronosConfig::default();
        let request = UpdateJobRequest {
            cron_id: -1,
            frequency: 5,
            expiration_offset: 100,
            method_name: None,
            token_amount: None,
            token_decimals: 18,
            gas_price_wei: None,
            source: ParameterSource::Manual,
        };
        match prepare_update_job(&request, Some(5_000), &config) {
            Err(ChronosError::InputOutOfRange { reasons }) => {
                assert_eq!(reasons, vec!["invalid cron id"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_prepare_cancel() {
        assert_eq!(prepare_cancel_job(9).unwrap(), CancelJobArgs { cron_id: 9 });
        assert!(prepare_cancel_job(-1).is_err());
    }

    #[test]
    fn test_call_payload_tagging() {
        let config = ChronosConfig::default();
        let payload = CallPayload::new(CancelJobArgs { cron_id: 4 }.into(), &config);
        assert_eq!(payload.method, "cancelCron");
        assert_eq!(payload.gas_limit, config.tx_gas_limit);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["call"], "cancelCron");
        assert_eq!(json["args"]["cronId"], 4);
        assert_eq!(json["positional"], serde_json::json!(["4"]));
        assert_eq!(
            json["to"].as_str().unwrap().to_lowercase(),
            "0x0000000000000000000000000000000000000830"
        );
    }

    #[test]
    fn test_request_defaults_from_json() {
        let request: CreateJobRequest = serde_json::from_str(&format!(
            r#"{{"targetAddress":"{}","abiJson":"[]","methodName":"ping","frequency":5,"expirationOffset":100}}"#,
            TARGET
        ))
        .unwrap();
        assert_eq!(request.source, ParameterSource::Manual);
        assert_eq!(request.token_decimals, 18);
        assert_eq!(request.gas_price_wei, None);
    }
}

//! Configuration types for Helios
//!
//! Every numeric policy the cron and token flows rely on lives here rather
//! than as a literal at the call site. Several of them differ between entry
//! points on purpose (two block clocks, two validation policies); see the
//! field docs for which context each one belongs to.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::constants::{CHRONOS_PRECOMPILE, ERC20_PRECOMPILE, NATIVE_DECIMALS};
use crate::errors::{Error, Result};
use crate::units::serde_decimal;
use crate::Network;

/// 1 HLS in wei
const WEI_PER_HLS: u128 = 1_000_000_000_000_000_000;

/// Numeric bounds applied before any cron parameters are encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationPolicy {
    /// Minimum blocks between executions (inclusive)
    pub min_frequency: u64,
    /// Maximum blocks between executions (inclusive)
    pub max_frequency: u64,
    /// Minimum expiration offset in blocks (inclusive)
    pub min_expiration_offset: u64,
    /// Maximum expiration offset in blocks (inclusive)
    pub max_expiration_offset: u64,
    /// Deposit floor in wei (0.001 HLS by default)
    #[serde(with = "serde_decimal")]
    pub min_deposit_wei: U256,
    /// Deposit ceiling in wei (1000 HLS by default)
    #[serde(with = "serde_decimal")]
    pub max_deposit_wei: U256,
}

impl ValidationPolicy {
    /// Policy of the manual (raw block values) cron form: frequency 1..=10
    pub fn manual() -> Self {
        Self {
            min_frequency: 1,
            max_frequency: 10,
            min_expiration_offset: 1,
            max_expiration_offset: 10_000,
            min_deposit_wei: U256::from(WEI_PER_HLS / 1_000),
            max_deposit_wei: U256::from(WEI_PER_HLS * 1_000),
        }
    }

    /// Policy of the preset-driven cron wizard: frequency 1..=1000 and
    /// expiration up to the scheduler horizon
    pub fn preset() -> Self {
        Self {
            max_frequency: 1_000,
            max_expiration_offset: DEFAULT_MAX_HORIZON_BLOCKS,
            ..Self::manual()
        }
    }
}

/// 30 days of 3-second blocks
const DEFAULT_MAX_HORIZON_BLOCKS: u64 = 864_000;

/// Chronos (cron scheduler) configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChronosConfig {
    /// Chronos precompile address (job creation/update/cancel target)
    pub precompile_address: Address,

    /// Base cost of one execution in wei (0.0001 HLS)
    #[serde(with = "serde_decimal")]
    pub base_cost_wei: U256,

    /// Multiplier for token-operation methods, in basis points (15_000 = 1.5x)
    pub token_multiplier_bps: u32,

    /// Methods billed at the base cost (no token multiplier)
    pub no_multiplier_methods: Vec<String>,

    /// Gas limit assumed when flooring the estimate with an explicit gas price
    pub estimate_gas_limit: u64,

    /// Per-execution gas limit sent in the job arguments
    pub job_gas_limit: u64,

    /// Gas limit of the create/update/cancel transaction envelope itself
    pub tx_gas_limit: u64,

    /// Max gas price per execution when the caller supplies none (wei)
    #[serde(with = "serde_decimal")]
    pub default_max_gas_price_wei: U256,

    /// Safety buffer on top of the computed deposit, in basis points (2_000 = 20%)
    pub safety_buffer_bps: u32,

    /// Longest schedule a deposit is allowed to fund, in blocks
    pub max_horizon_blocks: u64,

    /// Seconds per block used for expiration/duration math (scheduler clock)
    pub scheduler_seconds_per_block: u64,

    /// Seconds per block used by the frequency selector
    pub selector_seconds_per_block: u64,

    /// Bounds for the manual cron form
    pub manual_policy: ValidationPolicy,

    /// Bounds for requests whose values come from the preset dropdowns
    /// (`ParameterSource::Preset`), on create and update alike
    pub preset_policy: ValidationPolicy,
}

impl Default for ChronosConfig {
    fn default() -> Self {
        Self {
            precompile_address: CHRONOS_PRECOMPILE,
            base_cost_wei: U256::from(WEI_PER_HLS / 10_000),
            token_multiplier_bps: 15_000,
            no_multiplier_methods: vec![
                "increment".to_string(),
                "ping".to_string(),
                "trigger".to_string(),
            ],
            estimate_gas_limit: 100_000,
            job_gas_limit: 300_000,
            tx_gas_limit: 1_500_000,
            default_max_gas_price_wei: U256::from(10_000_000_000u64),
            safety_buffer_bps: 2_000,
            max_horizon_blocks: DEFAULT_MAX_HORIZON_BLOCKS,
            scheduler_seconds_per_block: 3,
            selector_seconds_per_block: 15,
            manual_policy: ValidationPolicy::manual(),
            preset_policy: ValidationPolicy::preset(),
        }
    }
}

/// ERC20 token factory configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc20Config {
    /// Token factory precompile address
    pub precompile_address: Address,

    /// Decimals used when a request does not specify any
    pub default_decimals: u8,

    /// Gas limit of the createErc20 transaction
    pub tx_gas_limit: u64,

    /// Largest accepted logo after base64 decoding
    pub max_logo_bytes: usize,
}

impl Default for Erc20Config {
    fn default() -> Self {
        Self {
            precompile_address: ERC20_PRECOMPILE,
            default_decimals: NATIVE_DECIMALS,
            tx_gas_limit: 3_000_000,
            max_logo_bytes: 64 * 1024,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Network the frontend talks to
    pub network: Network,

    /// Interface the API binds to
    #[serde(default = "default_api_host")]
    pub api_host: IpAddr,

    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    #[serde(default)]
    pub chronos: ChronosConfig,

    #[serde(default)]
    pub erc20: Erc20Config,
}

fn default_api_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_api_port() -> u16 {
    19042
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: Network::Testnet,
            api_host: default_api_host(),
            api_port: default_api_port(),
            chronos: ChronosConfig::default(),
            erc20: Erc20Config::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file. Missing sections fall back to defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let config: AppConfig = serde_json::from_str(&raw)
            .map_err(|e| Error::Serialization(format!("{}: {}", path.display(), e)))?;
        config.check()?;
        tracing::debug!(path = %path.display(), network = %config.network, "Loaded config");
        Ok(config)
    }

    /// Socket address the API server listens on
    pub fn api_addr(&self) -> SocketAddr {
        SocketAddr::new(self.api_host, self.api_port)
    }

    /// Reject configurations that would make the calculators meaningless
    pub fn check(&self) -> Result<()> {
        let chronos = &self.chronos;
        if chronos.scheduler_seconds_per_block == 0 || chronos.selector_seconds_per_block == 0 {
            return Err(Error::Config("seconds per block must be > 0".to_string()));
        }
        for (name, policy) in [
            ("manualPolicy", &chronos.manual_policy),
            ("presetPolicy", &chronos.preset_policy),
        ] {
            if policy.min_frequency == 0 || policy.min_frequency > policy.max_frequency {
                return Err(Error::Config(format!("{}: invalid frequency range", name)));
            }
            if policy.min_expiration_offset == 0
                || policy.min_expiration_offset > policy.max_expiration_offset
            {
                return Err(Error::Config(format!(
                    "{}: invalid expiration offset range",
                    name
                )));
            }
            if policy.min_deposit_wei > policy.max_deposit_wei {
                return Err(Error::Config(format!("{}: invalid deposit range", name)));
            }
            if policy.max_expiration_offset > chronos.max_horizon_blocks {
                return Err(Error::Config(format!(
                    "{}: maxExpirationOffset {} exceeds maxHorizonBlocks {}",
                    name, policy.max_expiration_offset, chronos.max_horizon_blocks
                )));
            }
        }
        if self.erc20.default_decimals > NATIVE_DECIMALS {
            return Err(Error::Config("erc20.defaultDecimals must be <= 18".to_string()));
        }
        Ok(())
    }
}

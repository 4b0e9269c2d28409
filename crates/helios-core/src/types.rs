//! Core type definitions for Helios

use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::errors::ProtocolError;

/// Network type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Block height
pub type BlockHeight = u64;

/// Parse a hex EVM address (`0x` + 40 hex chars).
///
/// Mixed-case input is accepted without checksum verification, matching what
/// browser wallets hand to the frontend.
pub fn parse_address(address: &str) -> Result<Address, ProtocolError> {
    let trimmed = address.trim();
    if !trimmed.starts_with("0x") || trimmed.len() != 42 {
        return Err(ProtocolError::InvalidAddress {
            address: address.to_string(),
        });
    }
    Address::from_str(trimmed).map_err(|_| ProtocolError::InvalidAddress {
        address: address.to_string(),
    })
}

/// Constants
pub mod constants {
    use alloy_primitives::{address, Address};

    /// Decimals of the native HLS token
    pub const NATIVE_DECIMALS: u8 = 18;

    /// Chronos (cron scheduler) precompile
    pub const CHRONOS_PRECOMPILE: Address = address!("0000000000000000000000000000000000000830");

    /// ERC20 token factory precompile
    pub const ERC20_PRECOMPILE: Address = address!("0000000000000000000000000000000000000806");

    /// Basis point denominator for ratios (10_000 = 100%)
    pub const BPS_DENOM: u32 = 10_000;
}

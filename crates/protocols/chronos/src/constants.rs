//! Chronos Constants
//!
//! Method names with special handling and the UI schedule presets.
//! Tunable numbers (costs, buffers, bounds) live in [`helios_core::ChronosConfig`].

pub use helios_core::constants::{BPS_DENOM, NATIVE_DECIMALS};

/// Dual-effect method: mints 2x and burns 1x per execution
pub const METHOD_MINT_AND_BURN: &str = "mintAndBurn";

/// Decimals assumed for token amounts in method arguments
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;

/// Seconds in a minute / hour / day
pub const MINUTE: u64 = 60;
pub const HOUR: u64 = 60 * MINUTE;
pub const DAY: u64 = 24 * HOUR;

/// Frequency choices offered by the selector (wall-clock seconds)
pub const FREQUENCY_PRESETS: &[u64] = &[MINUTE, 5 * MINUTE, 15 * MINUTE, 30 * MINUTE, HOUR];

/// Job lifetime choices offered by the wizard (wall-clock seconds)
pub const DURATION_PRESETS: &[u64] = &[HOUR, 6 * HOUR, 12 * HOUR, DAY, 7 * DAY, 30 * DAY];

//! Block Time Model
//!
//! Converts wall-clock durations to block counts and back under a fixed
//! seconds-per-block assumption.
//!
//! Two clocks are in use and are kept apart on purpose:
//! - scheduler clock (3 s/block): job lifetime and expiration math
//! - selector clock (15 s/block): the frequency dropdown
//!
//! Both are read from [`ChronosConfig`]; the associated constants mirror the defaults.

use helios_core::ChronosConfig;
use serde::{Deserialize, Serialize};

use crate::constants::{DAY, DURATION_PRESETS, FREQUENCY_PRESETS, HOUR, MINUTE};

/// A seconds-per-block assumption scoped to one usage context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockClock {
    pub seconds_per_block: u64,
}

impl BlockClock {
    /// Default scheduler clock (expiration and duration)
    pub const SCHEDULER: BlockClock = BlockClock {
        seconds_per_block: 3,
    };

    /// Default frequency selector clock
    pub const FREQUENCY_SELECTOR: BlockClock = BlockClock {
        seconds_per_block: 15,
    };

    pub fn scheduler(config: &ChronosConfig) -> Self {
        Self {
            seconds_per_block: config.scheduler_seconds_per_block,
        }
    }

    pub fn selector(config: &ChronosConfig) -> Self {
        Self {
            seconds_per_block: config.selector_seconds_per_block,
        }
    }

    pub fn blocks_for(&self, seconds: u64) -> u64 {
        blocks_for_duration(seconds, self.seconds_per_block)
    }

    pub fn seconds_for(&self, blocks: u64) -> u64 {
        seconds_for_blocks(blocks, self.seconds_per_block)
    }

    pub fn label_for(&self, blocks: u64) -> String {
        duration_label_for_blocks(blocks, self.seconds_per_block)
    }
}

/// A preset choice resolved to blocks under a given clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockOption {
    pub label: String,
    pub seconds: u64,
    pub blocks: u64,
}

/// `floor(seconds / seconds_per_block)`. A zero clock yields 0 blocks.
pub fn blocks_for_duration(seconds: u64, seconds_per_block: u64) -> u64 {
    if seconds_per_block == 0 {
        return 0;
    }
    seconds / seconds_per_block
}

pub fn seconds_for_blocks(blocks: u64, seconds_per_block: u64) -> u64 {
    blocks.saturating_mul(seconds_per_block)
}

/// Human label for a block count, in the coarsest non-zero unit.
///
/// `7200` blocks at 3 s -> "6 hours"; `28800` -> "1 day"; `1` -> "0 minutes".
pub fn duration_label_for_blocks(blocks: u64, seconds_per_block: u64) -> String {
    format_duration(seconds_for_blocks(blocks, seconds_per_block))
}

fn format_duration(seconds: u64) -> String {
    let days = seconds / DAY;
    if days > 0 {
        return plural(days, "day");
    }
    let hours = seconds / HOUR;
    if hours > 0 {
        return plural(hours, "hour");
    }
    plural(seconds / MINUTE, "minute")
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

fn resolve(presets: &[u64], clock: BlockClock) -> Vec<BlockOption> {
    presets
        .iter()
        .map(|&seconds| BlockOption {
            label: format_duration(seconds),
            seconds,
            blocks: clock.blocks_for(seconds),
        })
        .collect()
}

/// Frequency dropdown options, resolved with the selector clock
pub fn frequency_options(config: &ChronosConfig) -> Vec<BlockOption> {
    resolve(FREQUENCY_PRESETS, BlockClock::selector(config))
}

/// Duration dropdown options, resolved with the scheduler clock
pub fn duration_options(config: &ChronosConfig) -> Vec<BlockOption> {
    resolve(DURATION_PRESETS, BlockClock::scheduler(config))
}

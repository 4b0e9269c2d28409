//! Exact decimal <-> smallest-unit conversion
//!
//! Human amounts ("100", "0.0216") are scaled to integer base units by
//! digit manipulation only. No binary float is involved at any point, so
//! `parse_units("0.1", 18)` is exactly `100000000000000000`.

use alloy_primitives::U256;
use thiserror::Error;

/// Errors from parsing a decimal amount string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("Amount is empty")]
    Empty,

    #[error("Invalid amount '{0}': only digits and a single '.' are allowed")]
    InvalidFormat(String),

    #[error("Amount '{amount}' has more than {decimals} decimal places")]
    TooManyDecimals { amount: String, decimals: u8 },

    #[error("Amount '{0}' does not fit in 256 bits")]
    Overflow(String),
}

/// Parse a human-readable decimal amount into base units with `decimals` places.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256, UnitsError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(UnitsError::Empty);
    }

    let (int_part, frac_part) = match amount.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (amount, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(UnitsError::InvalidFormat(amount.to_string()));
    }
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(UnitsError::InvalidFormat(amount.to_string()));
    }

    // Trailing zeros past the precision carry no value ("1.50" at 1 decimal)
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.len() > decimals as usize {
        return Err(UnitsError::TooManyDecimals {
            amount: amount.to_string(),
            decimals,
        });
    }

    let mut digits = String::with_capacity(int_part.len() + decimals as usize);
    digits.push_str(int_part);
    digits.push_str(frac_part);
    for _ in frac_part.len()..decimals as usize {
        digits.push('0');
    }

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }

    U256::from_str_radix(digits, 10).map_err(|_| UnitsError::Overflow(amount.to_string()))
}

/// Format base units as a human-readable decimal string.
///
/// Trailing fractional zeros are dropped: `format_units(21600000000000000, 18) == "0.0216"`.
pub fn format_units(value: U256, decimals: u8) -> String {
    let raw = value.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return raw;
    }

    let padded = if raw.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - raw.len()), raw)
    } else {
        raw
    };

    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac_part)
    }
}

/// Serde adapter for `U256` as a plain decimal string (`"100000000000000"`).
///
/// The frontend hands amounts straight to `BigInt(...)`, which rejects the
/// `0x` form used by the default `U256` serializer.
pub mod serde_decimal {
    use alloy_primitives::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let raw = String::deserialize(deserializer)?;
        U256::from_str_radix(raw.trim(), 10).map_err(de::Error::custom)
    }

    /// Same as the parent module, for `Option<U256>`
    pub mod option {
        use alloy_primitives::U256;
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<U256>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.collect_str(v),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<U256>, D::Error> {
            let raw = Option::<String>::deserialize(deserializer)?;
            raw.map(|s| U256::from_str_radix(s.trim(), 10).map_err(de::Error::custom))
                .transpose()
        }
    }
}

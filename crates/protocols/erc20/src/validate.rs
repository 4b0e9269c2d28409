//! Token request validation

use base64::{engine::general_purpose::STANDARD, Engine as _};
use helios_core::Erc20Config;

use crate::constants::{
    DATA_URL_MARKER, DENOM_PREFIX, MAX_DENOM_LEN, MAX_NAME_LEN, MAX_SYMBOL_LEN, MIN_DENOM_LEN,
    MIN_SYMBOL_LEN,
};
use crate::state::{CreateTokenRequest, TokenError};
use helios_core::constants::NATIVE_DECIMALS;

/// Default base denom for a symbol: `"SUN"` -> `"asun"`
pub fn derive_denom(symbol: &str) -> String {
    format!("{}{}", DENOM_PREFIX, symbol.trim().to_ascii_lowercase())
}

/// Strip a `data:image/png;base64,` prefix if present
pub(crate) fn logo_payload(logo: &str) -> &str {
    match logo.find(DATA_URL_MARKER) {
        Some(idx) if logo.starts_with("data:") => &logo[idx + DATA_URL_MARKER.len()..],
        _ => logo,
    }
}

fn validate_name(name: &str) -> Result<(), TokenError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TokenError::invalid("name", "cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(TokenError::invalid(
            "name",
            format!("must be at most {} characters", MAX_NAME_LEN),
        ));
    }
    Ok(())
}

fn validate_symbol(symbol: &str) -> Result<(), TokenError> {
    let symbol = symbol.trim();
    if symbol.len() < MIN_SYMBOL_LEN || symbol.len() > MAX_SYMBOL_LEN {
        return Err(TokenError::invalid(
            "symbol",
            format!(
                "must be {} to {} characters",
                MIN_SYMBOL_LEN, MAX_SYMBOL_LEN
            ),
        ));
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(TokenError::invalid("symbol", "only letters and digits allowed"));
    }
    Ok(())
}

fn validate_denom(denom: &str) -> Result<(), TokenError> {
    if denom.len() < MIN_DENOM_LEN || denom.len() > MAX_DENOM_LEN {
        return Err(TokenError::invalid(
            "denom",
            format!("must be {} to {} characters", MIN_DENOM_LEN, MAX_DENOM_LEN),
        ));
    }
    if !denom.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err(TokenError::invalid("denom", "must start with a lowercase letter"));
    }
    if !denom
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(TokenError::invalid(
            "denom",
            "only lowercase letters and digits allowed",
        ));
    }
    Ok(())
}

fn validate_logo(logo: &str, max_bytes: usize) -> Result<(), TokenError> {
    let decoded = STANDARD
        .decode(logo_payload(logo).trim())
        .map_err(|e| TokenError::invalid("logo", format!("not valid base64: {}", e)))?;
    if decoded.len() > max_bytes {
        return Err(TokenError::invalid(
            "logo",
            format!("{} bytes exceeds limit of {}", decoded.len(), max_bytes),
        ));
    }
    Ok(())
}

/// Validate a deployment request. Stops at the first invalid field.
pub fn validate_token_request(
    request: &CreateTokenRequest,
    config: &Erc20Config,
) -> Result<(), TokenError> {
    validate_name(&request.name)?;
    validate_symbol(&request.symbol)?;

    let denom = request
        .denom
        .clone()
        .unwrap_or_else(|| derive_denom(&request.symbol));
    validate_denom(&denom)?;

    let decimals = request.decimals.unwrap_or(config.default_decimals);
    if decimals > NATIVE_DECIMALS {
        return Err(TokenError::invalid(
            "decimals",
            format!("must be at most {}", NATIVE_DECIMALS),
        ));
    }

    if request.total_supply.trim().is_empty() {
        return Err(TokenError::invalid("totalSupply", "cannot be empty"));
    }

    if let Some(logo) = request.logo_base64.as_deref() {
        validate_logo(logo, config.max_logo_bytes)?;
    }

    Ok(())
}

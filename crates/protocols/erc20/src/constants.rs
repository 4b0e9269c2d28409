//! Token factory constants

/// Precompile method name
pub const CREATE_ERC20_METHOD: &str = "createErc20";

/// Longest accepted token name
pub const MAX_NAME_LEN: usize = 64;

/// Symbol length bounds
pub const MIN_SYMBOL_LEN: usize = 1;
pub const MAX_SYMBOL_LEN: usize = 11;

/// Denom length bounds
pub const MIN_DENOM_LEN: usize = 3;
pub const MAX_DENOM_LEN: usize = 128;

/// Prefix of denoms derived from the symbol ("atoken" style base denom)
pub const DENOM_PREFIX: &str = "a";

/// Canvas exports arrive as data URLs; only the payload goes on-chain
pub const DATA_URL_MARKER: &str = ";base64,";

//! ERC20 Token Factory
//!
//! Helios exposes token creation as a precompile: a single `createErc20`
//! call registers a native denom and deploys its ERC20 representation.
//! This crate validates deployment requests, scales the supply to base
//! units and keeps a registry of deployed tokens behind [`TokenStore`].

pub mod constants;
pub mod state;
pub mod store;
pub mod tx_builder;
pub mod validate;

pub use state::{CreateTokenRequest, DeployedToken, TokenError};
pub use store::{InMemoryTokenStore, TokenStore};
pub use tx_builder::{build_create_token_args, CreateErc20Args, PreparedTokenDeployment};
pub use validate::{derive_denom, validate_token_request};

//! helios-api: HTTP API layer for the Helios dApp
//!
//! Exposes deposit previews, cron argument builders and the token registry
//! to the browser frontend. Nothing here signs or submits transactions.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::{AppState, StateError};

//! Helios-core: Shared types, errors, units and configuration
//!
//! This crate provides the foundational types used across the Helios workspace.

pub mod config;
pub mod errors;
pub mod types;
pub mod units;

pub use config::*;
pub use errors::*;
pub use types::*;
pub use units::{format_units, parse_units, UnitsError};

//! VPN seed server values.
//!
//! Derives the server-side network configuration of the seed VPN server from a
//! [`models::VpnServerConfig`] snapshot:
//! - [`models`] - CIDR, config and output types
//! - [`processing`] - HA identity, overlap, remap, de-duplication and resolution
//! - [`config`] - loading the config from the environment or a JSON file
//! - [`output`] - JSON and template text rendering
//! - [`error`] - error types

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use models::ResolvedServerValues;
use std::error::Error;

/// Load the config (file or environment) and resolve it with default settings.
pub fn load_and_resolve() -> Result<ResolvedServerValues, Box<dyn Error>> {
    let cfg = config::load_config()?;
    let values = processing::build_values(&cfg)?;
    Ok(values)
}

//! Domain models for the VPN seed server values.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Cidr`] - IPv4/IPv6 network prefix
//! - [`VpnServerConfig`] - configuration snapshot fed to the resolver
//! - [`ResolverSettings`] - fixed constants injected into the resolver
//! - [`ResolvedServerValues`] and [`Device`] - resolver output

mod cidr;
mod server_config;
mod settings;
mod values;

// Re-export public types
pub use cidr::{get_cidr_mask, Cidr, Family, MAX_LENGTH_V4, MAX_LENGTH_V6};
pub use server_config::VpnServerConfig;
pub use settings::{
    NetworkCategory, ResolverSettings, HA_TUNNEL_NETWORK_MASK, TUNNEL_FAMILY, VPN_NETWORK_MASK,
};
pub use values::{Device, ResolvedServerValues};

//! Error types for vpn-seed-values.
//!
//! Parsing, configuration loading and resolution each have their own error enum.
//! Resolution errors describe a misconfigured deployment and abort startup.

use crate::models::{Cidr, Family, NetworkCategory};
use thiserror::Error;

/// Errors from parsing CIDR text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CidrError {
    #[error("invalid CIDR format, expected <address>/<prefix length>: {0}")]
    Format(String),

    #[error("invalid IP address: {0}")]
    Address(String),

    #[error("invalid prefix length: {0}")]
    PrefixLength(String),

    #[error("prefix length /{len} is too long, maximum is /{max}")]
    PrefixTooLong { len: u8, max: u8 },
}

/// Validation failures of the value resolver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Backbone network unset
    #[error("VPN_NETWORK must be set")]
    ConfigurationMissing,

    #[error("VPN_NETWORK must be a {expected} CIDR: {network}")]
    ConfigurationInvalidFamily { expected: Family, network: Cidr },

    #[error("invalid prefix length for VPN_NETWORK, must be /{expected}, vpn network: {network}")]
    ConfigurationInvalidPrefixLength { expected: u8, network: Cidr },

    #[error(
        "IS_HA flag in config does not match HA info from pod name: IS_HA = {declared}, POD_NAME = {pod_name}"
    )]
    HaFlagMismatch { declared: bool, pod_name: String },

    #[error("invalid HA tunnel network: {0}")]
    TunnelNetwork(#[from] CidrError),
}

/// Invalid [`crate::models::ResolverSettings`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("VPN network prefix /{mask} leaves no room for HA scoping, maximum is /{max}")]
    VpnNetworkMask { mask: u8, max: u8 },

    #[error("HA tunnel network prefix /{mask} must be between /{min} and /{max}")]
    HaTunnelNetworkMask { mask: u8, min: u8, max: u8 },

    #[error("placeholder for {category:?} networks must be IPv4: {network}")]
    PlaceholderFamily {
        category: NetworkCategory,
        network: Cidr,
    },
}

impl ResolveError {
    /// Resolution errors indicate a misconfigured deployment, retrying with the
    /// same input can never succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Errors from loading a [`crate::models::VpnServerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {reason}")]
    InvalidEnv { name: String, reason: String },

    #[error("error reading config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing config file {path}: path={json_path} error={reason}")]
    Parse {
        path: String,
        json_path: String,
        reason: String,
    },
}

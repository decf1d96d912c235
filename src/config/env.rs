//! VPN server config from environment variables.

use crate::error::ConfigError;
use crate::models::{Cidr, VpnServerConfig};
use regex::Regex;
use std::sync::OnceLock;

pub const VPN_NETWORK: &str = "VPN_NETWORK";
pub const SEED_POD_NETWORK: &str = "SEED_POD_NETWORK";
pub const SHOOT_POD_NETWORKS: &str = "SHOOT_POD_NETWORKS";
pub const SHOOT_SERVICE_NETWORKS: &str = "SHOOT_SERVICE_NETWORKS";
pub const SHOOT_NODE_NETWORKS: &str = "SHOOT_NODE_NETWORKS";
pub const POD_NAME: &str = "POD_NAME";
pub const IS_HA: &str = "IS_HA";
pub const HA_VPN_CLIENTS: &str = "HA_VPN_CLIENTS";
pub const OPENVPN_STATUS_PATH: &str = "OPENVPN_STATUS_PATH";

/// Separator of network list values: commas and/or whitespace.
static LIST_SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_list_separator_regex() -> &'static Regex {
    LIST_SEPARATOR_REGEX.get_or_init(|| Regex::new(r"[,\s]+").expect("Invalid Regex"))
}

fn invalid(name: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnv {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Non-empty, trimmed value of a variable.
fn lookup_value<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_network<F>(lookup: &F, name: &str) -> Result<Option<Cidr>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup_value(lookup, name)
        .map(|v| Cidr::new(&v).map_err(|e| invalid(name, e)))
        .transpose()
}

fn parse_networks<F>(lookup: &F, name: &str) -> Result<Vec<Cidr>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup_value(lookup, name) else {
        return Ok(vec![]);
    };
    get_list_separator_regex()
        .split(&value)
        .filter(|s| !s.is_empty())
        .map(|s| Cidr::new(s).map_err(|e| invalid(name, format!("{s}: {e}"))))
        .collect()
}

fn parse_bool<F>(lookup: &F, name: &str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup_value(lookup, name) {
        None => Ok(false),
        Some(v) => match v.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(invalid(name, format!("expected true or false, got '{v}'"))),
        },
    }
}

fn parse_int<F>(lookup: &F, name: &str) -> Result<i32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup_value(lookup, name)
        .map(|v| v.parse::<i32>().map_err(|e| invalid(name, e)))
        .transpose()
        .map(|v| v.unwrap_or(0))
}

/// Build a [`VpnServerConfig`] from a variable lookup function.
///
/// Unset or empty variables give an unset network, an empty list, `false` or `0`.
pub fn from_lookup<F>(lookup: F) -> Result<VpnServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let cfg = VpnServerConfig {
        vpn_network: parse_network(&lookup, VPN_NETWORK)?,
        seed_pod_network: parse_network(&lookup, SEED_POD_NETWORK)?,
        shoot_pod_networks: parse_networks(&lookup, SHOOT_POD_NETWORKS)?,
        shoot_service_networks: parse_networks(&lookup, SHOOT_SERVICE_NETWORKS)?,
        shoot_node_networks: parse_networks(&lookup, SHOOT_NODE_NETWORKS)?,
        pod_name: lookup_value(&lookup, POD_NAME).unwrap_or_default(),
        is_ha: parse_bool(&lookup, IS_HA)?,
        ha_vpn_clients: parse_int(&lookup, HA_VPN_CLIENTS)?,
        status_path: lookup_value(&lookup, OPENVPN_STATUS_PATH).unwrap_or_default(),
    };
    log::debug!("Loaded VPN server config from environment: {cfg:?}");
    Ok(cfg)
}

/// Build a [`VpnServerConfig`] from the process environment.
pub fn from_env() -> Result<VpnServerConfig, ConfigError> {
    from_lookup(|name| std::env::var(name).ok())
}

//! VPN server config from a JSON file.

use crate::error::ConfigError;
use crate::models::VpnServerConfig;
use std::path::Path;

/// Parse a [`VpnServerConfig`] from JSON text.
///
/// `source` only names the input in error messages.
pub fn from_json_str(json: &str, source: &str) -> Result<VpnServerConfig, ConfigError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| ConfigError::Parse {
        path: source.to_string(),
        json_path: e.path().to_string(),
        reason: e.inner().to_string(),
    })
}

/// Read a [`VpnServerConfig`] from a JSON file.
pub fn from_file(path: impl AsRef<Path>) -> Result<VpnServerConfig, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: display.clone(),
        source,
    })?;
    log::info!("Reading VPN server config from file: {display}");
    from_json_str(&json, &display)
}

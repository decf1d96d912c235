//! Loading of the VPN server configuration.
//!
//! - [`env`] - from environment variables
//! - [`file`] - from a JSON file

pub mod env;
mod file;

pub use env::{from_env, from_lookup};
pub use file::{from_file, from_json_str};

use crate::error::ConfigError;
use crate::models::VpnServerConfig;

/// Variable naming a JSON config file that takes precedence over the environment.
pub const CONFIG_FILE_ENV: &str = "VPN_SERVER_CONFIG_FILE";

/// Load the config from the file named by [`CONFIG_FILE_ENV`], else from the environment.
pub fn load_config() -> Result<VpnServerConfig, ConfigError> {
    match std::env::var(CONFIG_FILE_ENV) {
        Ok(path) if !path.trim().is_empty() => from_file(path.trim()),
        _ => {
            log::info!("{CONFIG_FILE_ENV} not set, reading VPN server config from environment");
            from_env()
        }
    }
}

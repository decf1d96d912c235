//! Resolution of the VPN seed server values.
//!
//! Validates the backbone network, derives the HA identity, decides whether
//! IPv4 shoot networks are remapped and builds the de-duplicated network lists.

use super::dedup::{de_duplicate_networks, partition_by_family};
use super::ha::{ha_identity, ha_tunnel_network};
use super::overlap::{find_overlapping, log_overlapping_networks, overlap_any};
use super::remap::remap_networks_into;
use crate::error::{ResolveError, SettingsError};
use crate::models::{
    Cidr, Device, NetworkCategory, ResolvedServerValues, ResolverSettings, VpnServerConfig,
    TUNNEL_FAMILY,
};

/// HA client count reported when not running in HA mode.
pub const NO_HA_VPN_CLIENTS: i32 = -1;

/// Builds [`ResolvedServerValues`] from a [`VpnServerConfig`].
///
/// Resolution is a pure function of the config and the injected settings.
#[derive(Debug, Clone, Default)]
pub struct ValueResolver {
    settings: ResolverSettings,
}

impl ValueResolver {
    /// Create a resolver, rejecting settings that cannot produce valid networks.
    pub fn new(settings: ResolverSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(ValueResolver { settings })
    }

    /// Check the backbone network is set, IPv6 and of the required prefix length.
    pub fn validate_vpn_network(&self, vpn_network: Option<Cidr>) -> Result<Cidr, ResolveError> {
        let network = vpn_network.ok_or(ResolveError::ConfigurationMissing)?;
        if network.family() != TUNNEL_FAMILY {
            return Err(ResolveError::ConfigurationInvalidFamily {
                expected: TUNNEL_FAMILY,
                network,
            });
        }
        if network.mask() != self.settings.vpn_network_mask {
            return Err(ResolveError::ConfigurationInvalidPrefixLength {
                expected: self.settings.vpn_network_mask,
                network,
            });
        }
        Ok(network)
    }

    /// Resolve the server values.
    ///
    /// # Returns
    /// * `Ok(ResolvedServerValues)` - fully populated values
    /// * `Err(ResolveError)` - the config is invalid, no partial values are returned
    pub fn resolve(&self, cfg: &VpnServerConfig) -> Result<ResolvedServerValues, ResolveError> {
        let vpn_network = self.validate_vpn_network(cfg.vpn_network).map_err(|e| {
            log::warn!("Rejecting VPN server config: {e}");
            e
        })?;

        let ha = ha_identity(&cfg.pod_name);
        if ha.is_ha != cfg.is_ha {
            let e = ResolveError::HaFlagMismatch {
                declared: cfg.is_ha,
                pod_name: cfg.pod_name.clone(),
            };
            log::warn!("Rejecting VPN server config: {e}");
            return Err(e);
        }
        log::debug!(
            "HA info from pod name '{}': ha={} index={}",
            cfg.pod_name,
            ha.is_ha,
            ha.index
        );

        // Non-HA always maps IPv4 shoot networks, HA only if they collide with the seed
        let (device, ha_vpn_clients, openvpn_network, do_netmap) = if ha.is_ha {
            let openvpn_network =
                ha_tunnel_network(&vpn_network, ha.index, self.settings.ha_tunnel_network_mask)?;
            let do_netmap = match cfg.seed_pod_network {
                Some(seed) => {
                    let shoot_networks = cfg.all_shoot_networks();
                    if log::log_enabled!(log::Level::Debug) {
                        log_overlapping_networks(&seed, &find_overlapping(&seed, &shoot_networks));
                    }
                    overlap_any(&seed, &shoot_networks)
                }
                None => false,
            };
            (
                Device::MultiPoint,
                cfg.ha_vpn_clients,
                openvpn_network,
                do_netmap,
            )
        } else {
            (Device::PointToPoint, NO_HA_VPN_CLIENTS, vpn_network, true)
        };
        log::debug!("Mapping IPv4 shoot networks to placeholder ranges: {do_netmap}");

        let mut shoot_networks = Vec::with_capacity(
            cfg.shoot_service_networks.len()
                + cfg.shoot_pod_networks.len()
                + cfg.shoot_node_networks.len(),
        );
        for (networks, category) in [
            (&cfg.shoot_service_networks, NetworkCategory::Service),
            (&cfg.shoot_pod_networks, NetworkCategory::Pod),
            (&cfg.shoot_node_networks, NetworkCategory::Node),
        ] {
            remap_networks_into(
                &mut shoot_networks,
                networks,
                category,
                do_netmap,
                &self.settings,
            );
        }

        let shoot_networks = de_duplicate_networks(shoot_networks);
        let (shoot_networks_v4, shoot_networks_v6) = partition_by_family(&shoot_networks);

        let values = ResolvedServerValues {
            status_path: cfg.status_path.clone(),
            is_ha: ha.is_ha,
            vpn_index: ha.index,
            device,
            ha_vpn_clients,
            openvpn_network,
            seed_pod_network: cfg.seed_pod_network,
            shoot_networks,
            shoot_networks_v4,
            shoot_networks_v6,
        };
        log::info!("Resolved VPN server values: {values}");
        Ok(values)
    }
}

/// Resolve with the default settings.
pub fn build_values(cfg: &VpnServerConfig) -> Result<ResolvedServerValues, ResolveError> {
    ValueResolver::default().resolve(cfg)
}

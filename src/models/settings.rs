//! Fixed constants of the resolver, injected at construction.

use super::{Cidr, Family};
use crate::error::SettingsError;

/// Required address family of the backbone network.
pub const TUNNEL_FAMILY: Family = Family::V6;
/// Required prefix length of the backbone network.
pub const VPN_NETWORK_MASK: u8 = 96;
/// Prefix length of the per-replica tunnel network in HA mode.
pub const HA_TUNNEL_NETWORK_MASK: u8 = 120;

/// Origin category of a shoot network.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum NetworkCategory {
    Service,
    Pod,
    Node,
}

/// Constants the resolver depends on.
///
/// [`Default`] gives the values used by real deployments; tests may inject others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    pub vpn_network_mask: u8,
    pub ha_tunnel_network_mask: u8,
    /// Placeholder for IPv4 shoot service networks.
    pub service_network_mapped: Cidr,
    /// Placeholder for IPv4 shoot pod networks.
    pub pod_network_mapped: Cidr,
    /// Placeholder for IPv4 shoot node networks.
    pub node_network_mapped: Cidr,
}

impl ResolverSettings {
    /// Placeholder network for the given category.
    pub fn mapped_network(&self, category: NetworkCategory) -> Cidr {
        match category {
            NetworkCategory::Service => self.service_network_mapped,
            NetworkCategory::Pod => self.pod_network_mapped,
            NetworkCategory::Node => self.node_network_mapped,
        }
    }

    /// Check the settings can produce valid networks.
    ///
    /// The backbone prefix must leave bytes 12 and 13 of the address to the HA
    /// scoping, the HA tunnel prefix must keep byte 13 (the replica index) in
    /// the network part, and all placeholders must be IPv4.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let max = TUNNEL_FAMILY.max_length();
        if self.vpn_network_mask > HA_SCOPE_FIRST_BIT {
            return Err(SettingsError::VpnNetworkMask {
                mask: self.vpn_network_mask,
                max: HA_SCOPE_FIRST_BIT,
            });
        }
        if !(HA_SCOPE_LAST_BIT..=max).contains(&self.ha_tunnel_network_mask) {
            return Err(SettingsError::HaTunnelNetworkMask {
                mask: self.ha_tunnel_network_mask,
                min: HA_SCOPE_LAST_BIT,
                max,
            });
        }
        for category in [
            NetworkCategory::Service,
            NetworkCategory::Pod,
            NetworkCategory::Node,
        ] {
            let network = self.mapped_network(category);
            if !network.is_ipv4() {
                return Err(SettingsError::PlaceholderFamily { category, network });
            }
        }
        Ok(())
    }
}

/// First bit of the HA scope bytes (byte 12).
const HA_SCOPE_FIRST_BIT: u8 = 96;
/// End of the replica index byte (byte 13).
const HA_SCOPE_LAST_BIT: u8 = 112;

// 240.0.0.0/4 is reserved and never globally routed
fn reserved_v4(first_octet: u8) -> Cidr {
    Cidr::ipv4_slash_8(first_octet)
}

impl Default for ResolverSettings {
    fn default() -> Self {
        ResolverSettings {
            vpn_network_mask: VPN_NETWORK_MASK,
            ha_tunnel_network_mask: HA_TUNNEL_NETWORK_MASK,
            service_network_mapped: reserved_v4(243),
            pod_network_mapped: reserved_v4(244),
            node_network_mapped: reserved_v4(242),
        }
    }
}

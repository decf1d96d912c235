//! Resolved server values consumed by the templating step.

use super::Cidr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of tunnel device the VPN engine creates.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Serialize, Deserialize)]
pub enum Device {
    /// Layer 2 device shared by the HA replicas.
    #[serde(rename = "tap0")]
    MultiPoint,
    /// Layer 3 device of a single server.
    #[serde(rename = "tun0")]
    PointToPoint,
}

impl Device {
    pub fn name(&self) -> &'static str {
        match self {
            Device::MultiPoint => "tap0",
            Device::PointToPoint => "tun0",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Output of the value resolver. Only built by
/// [`crate::processing::ValueResolver::resolve`] and never mutated afterwards.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResolvedServerValues {
    pub(crate) status_path: String,
    pub(crate) is_ha: bool,
    pub(crate) vpn_index: u8,
    pub(crate) device: Device,
    pub(crate) ha_vpn_clients: i32,
    pub(crate) openvpn_network: Cidr,
    pub(crate) seed_pod_network: Option<Cidr>,
    pub(crate) shoot_networks: Vec<Cidr>,
    pub(crate) shoot_networks_v4: Vec<Cidr>,
    pub(crate) shoot_networks_v6: Vec<Cidr>,
}

impl ResolvedServerValues {
    pub fn status_path(&self) -> &str {
        &self.status_path
    }

    pub fn is_ha(&self) -> bool {
        self.is_ha
    }

    /// HA replica index, 0 when not in HA mode.
    pub fn vpn_index(&self) -> u8 {
        self.vpn_index
    }

    pub fn device(&self) -> Device {
        self.device
    }

    /// Number of HA VPN clients, -1 when not in HA mode.
    pub fn ha_vpn_clients(&self) -> i32 {
        self.ha_vpn_clients
    }

    /// Effective tunnel network of this server.
    pub fn openvpn_network(&self) -> Cidr {
        self.openvpn_network
    }

    pub fn seed_pod_network(&self) -> Option<Cidr> {
        self.seed_pod_network
    }

    /// De-duplicated shoot networks sorted by their text form.
    pub fn shoot_networks(&self) -> &[Cidr] {
        &self.shoot_networks
    }

    pub fn shoot_networks_v4(&self) -> &[Cidr] {
        &self.shoot_networks_v4
    }

    pub fn shoot_networks_v6(&self) -> &[Cidr] {
        &self.shoot_networks_v6
    }
}

impl fmt::Display for ResolvedServerValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ha={} index={} device={} network={} shoot networks: {} IPv4, {} IPv6",
            self.is_ha,
            self.vpn_index,
            self.device,
            self.openvpn_network,
            self.shoot_networks_v4.len(),
            self.shoot_networks_v6.len()
        )
    }
}

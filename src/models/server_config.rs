//! VPN server configuration snapshot.

use super::Cidr;
use serde::{Deserialize, Serialize};

/// Input of the value resolver, loaded once per configuration load.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct VpnServerConfig {
    /// Backbone network of the tunnel (VPN_NETWORK), None if unset.
    pub vpn_network: Option<Cidr>,
    /// Pod network of the seed cluster.
    pub seed_pod_network: Option<Cidr>,
    /// Pod networks of the shoot cluster.
    pub shoot_pod_networks: Vec<Cidr>,
    /// Service networks of the shoot cluster.
    pub shoot_service_networks: Vec<Cidr>,
    /// Node networks of the shoot cluster.
    pub shoot_node_networks: Vec<Cidr>,
    /// Name of the server pod, carries the HA replica index.
    pub pod_name: String,
    /// Declared HA flag, must agree with the pod name.
    pub is_ha: bool,
    /// Number of HA VPN clients.
    pub ha_vpn_clients: i32,
    /// Path of the OpenVPN status file.
    pub status_path: String,
}

impl VpnServerConfig {
    /// All shoot networks of the three categories, in service, pod, node order.
    pub fn all_shoot_networks(&self) -> Vec<Cidr> {
        self.shoot_service_networks
            .iter()
            .chain(&self.shoot_pod_networks)
            .chain(&self.shoot_node_networks)
            .copied()
            .collect()
    }
}

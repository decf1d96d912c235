//! Remapping of IPv4 shoot networks to placeholder ranges.
//!
//! Shoot IPv4 ranges may collide with each other or with the seed. When
//! remapping is enabled each IPv4 network is replaced by the fixed placeholder
//! of its category, so the tunnel routes one static range per category.
//! IPv6 networks are always kept as is.

use crate::models::{Cidr, NetworkCategory, ResolverSettings};

/// Remap a single shoot network.
pub fn remap_network(
    network: Cidr,
    category: NetworkCategory,
    enabled: bool,
    settings: &ResolverSettings,
) -> Cidr {
    if enabled && network.is_ipv4() {
        settings.mapped_network(category)
    } else {
        network
    }
}

/// Remap every network of one category, appending the result to `out`.
pub fn remap_networks_into(
    out: &mut Vec<Cidr>,
    networks: &[Cidr],
    category: NetworkCategory,
    enabled: bool,
    settings: &ResolverSettings,
) {
    out.extend(
        networks
            .iter()
            .map(|n| remap_network(*n, category, enabled, settings)),
    );
}

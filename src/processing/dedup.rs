//! Network de-duplication and partitioning by address family.

use crate::models::Cidr;
use itertools::Itertools;

/// Sort networks by their text form and drop exact duplicates.
///
/// Only networks with identical address and prefix length are removed,
/// overlapping networks are kept. Sorting by text gives a deterministic order
/// across mixed address families.
pub fn de_duplicate_networks(networks: Vec<Cidr>) -> Vec<Cidr> {
    // Dedup must be sorted first
    networks
        .into_iter()
        .map(|n| (n.to_string(), n))
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, n)| n)
        .dedup()
        .collect()
}

/// Split networks into IPv4 and IPv6 lists, keeping their order.
pub fn partition_by_family(networks: &[Cidr]) -> (Vec<Cidr>, Vec<Cidr>) {
    networks.iter().partition(|n| n.is_ipv4())
}

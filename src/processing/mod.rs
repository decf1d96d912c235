//! VPN server value processing logic.
//!
//! This module contains the business logic of the resolver:
//! - [`ha`] - HA identity from the pod name
//! - [`overlap`] - Overlap of shoot networks with the seed network
//! - [`remap`] - Mapping of IPv4 shoot networks to placeholder ranges
//! - [`dedup`] - De-duplication and family partitioning
//! - [`resolver`] - Validation and orchestration
//! - [`store`] - Atomic reload of resolved values

mod dedup;
mod ha;
mod overlap;
mod remap;
mod resolver;
mod store;

// Re-export public functions
pub use dedup::{de_duplicate_networks, partition_by_family};
pub use ha::{ha_identity, ha_tunnel_network, HaIdentity, INDEX_SEPARATOR, MAX_HA_INDEX};
pub use overlap::{find_overlapping, log_overlapping_networks, overlap_any};
pub use remap::{remap_network, remap_networks_into};
pub use resolver::{build_values, ValueResolver, NO_HA_VPN_CLIENTS};
pub use store::ValuesStore;

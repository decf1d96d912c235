//! HA identity from the server pod name.
//!
//! HA replicas are named `<name>-<index>` with index in {0, 1, 2}; the replica
//! count is capped at 3.

use crate::error::CidrError;
use crate::models::Cidr;
use std::net::{IpAddr, Ipv6Addr};

/// Separator between the replica name and its index.
pub const INDEX_SEPARATOR: char = '-';
/// Highest replica index recognised as HA.
pub const MAX_HA_INDEX: u8 = 2;

/// HA flag and replica index derived from a pod name.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default)]
pub struct HaIdentity {
    pub is_ha: bool,
    pub index: u8,
}

/// Derive the HA identity from a pod name.
///
/// A name is HA-identifying only if its last character is a digit 0-2 and the
/// character before it is [`INDEX_SEPARATOR`]. Anything else, including the
/// empty string, gives `(false, 0)`; it is up to the caller to compare the
/// result against the declared HA flag.
///
/// # Examples
/// ```
/// use vpn_seed_values::processing::{ha_identity, HaIdentity};
/// assert_eq!(ha_identity("vpn-seed-server-1"), HaIdentity { is_ha: true, index: 1 });
/// assert_eq!(ha_identity("vpn-seed-server-3"), HaIdentity::default());
/// ```
pub fn ha_identity(pod_name: &str) -> HaIdentity {
    let mut tail = pod_name.chars().rev();
    match (tail.next(), tail.next()) {
        (Some(digit), Some(INDEX_SEPARATOR)) => match digit.to_digit(10) {
            Some(index) if index <= u32::from(MAX_HA_INDEX) => HaIdentity {
                is_ha: true,
                // index <= 2
                index: index as u8,
            },
            _ => HaIdentity::default(),
        },
        _ => HaIdentity::default(),
    }
}

/// Tunnel network of one HA replica.
///
/// Byte 12 of the backbone address is set to 255 and byte 13 to the replica
/// index, e.g. `fd8f::/96` with index 1 gives `fd8f::ff01:0/120`.
/// Fails if the backbone is not IPv6 or `mask` is not a valid IPv6 prefix length.
pub fn ha_tunnel_network(vpn_network: &Cidr, index: u8, mask: u8) -> Result<Cidr, CidrError> {
    let mut octets = match vpn_network.addr() {
        IpAddr::V6(v6) => v6.octets(),
        IpAddr::V4(_) => return Err(CidrError::Address(format!("{vpn_network} is not IPv6"))),
    };
    octets[12] = 255;
    octets[13] = index;
    Cidr::from_parts(IpAddr::V6(Ipv6Addr::from(octets)), mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ha(index: u8) -> HaIdentity {
        HaIdentity { is_ha: true, index }
    }

    #[test]
    fn test_ha_identity_indexes() {
        assert_eq!(ha_identity("foo-0"), ha(0));
        assert_eq!(ha_identity("foo-1"), ha(1));
        assert_eq!(ha_identity("foo-2"), ha(2));
        assert_eq!(ha_identity("vpn-seed-server-2"), ha(2));
        assert_eq!(ha_identity("-1"), ha(1));
    }

    #[test]
    fn test_ha_identity_not_ha() {
        assert_eq!(ha_identity(""), HaIdentity::default());
        assert_eq!(ha_identity("foo"), HaIdentity::default());
        assert_eq!(ha_identity("foo-3"), HaIdentity::default());
        assert_eq!(ha_identity("foo-9"), HaIdentity::default());
        assert_eq!(ha_identity("foo-12"), HaIdentity::default());
        assert_eq!(ha_identity("foo1"), HaIdentity::default());
        assert_eq!(ha_identity("foo-1-"), HaIdentity::default());
        assert_eq!(ha_identity("1"), HaIdentity::default());
        assert_eq!(ha_identity("vpn-seed-server"), HaIdentity::default());
    }

    #[test]
    fn test_ha_tunnel_network() {
        let backbone = Cidr::new("fd8f::/96").unwrap();
        assert_eq!(
            ha_tunnel_network(&backbone, 0, 120).unwrap().to_string(),
            "fd8f::ff00:0/120"
        );
        assert_eq!(
            ha_tunnel_network(&backbone, 1, 120).unwrap().to_string(),
            "fd8f::ff01:0/120"
        );
        assert_eq!(
            ha_tunnel_network(&backbone, 2, 120).unwrap().to_string(),
            "fd8f::ff02:0/120"
        );
    }

    #[test]
    fn test_ha_tunnel_network_is_canonical() {
        let backbone = Cidr::new("fd8f::/96").unwrap();
        let scoped = ha_tunnel_network(&backbone, 1, 112).unwrap();
        assert_eq!(scoped.to_string(), "fd8f::ff01:0/112");
        assert_eq!(Cidr::new(&scoped.to_string()).unwrap(), scoped);

        // host bits below the mask are cleared, the index byte with them
        let scoped = ha_tunnel_network(&backbone, 1, 104).unwrap();
        assert_eq!(scoped.to_string(), "fd8f::ff00:0/104");
        assert_eq!(Cidr::new(&scoped.to_string()).unwrap(), scoped);

        assert_eq!(
            ha_tunnel_network(&backbone, 1, 200),
            Err(CidrError::PrefixTooLong { len: 200, max: 128 })
        );
        assert!(ha_tunnel_network(&Cidr::new("10.0.0.0/8").unwrap(), 1, 120).is_err());
    }
}

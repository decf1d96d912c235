//! IPv4/IPv6 CIDR network utilities.
//!
//! Provides [`Cidr`] for representing a network prefix of either address family,
//! along with the mask helpers used for range and overlap calculations.

use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum prefix length of an IPv4 network (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length of an IPv6 network (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Address family of a network.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Number of address bits for this family.
    pub fn max_length(self) -> u8 {
        match self {
            Family::V4 => MAX_LENGTH_V4,
            Family::V6 => MAX_LENGTH_V6,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Convert a prefix length to a network mask, right-aligned in a u128.
///
/// # Examples
/// ```
/// use vpn_seed_values::models::{get_cidr_mask, Family};
/// assert_eq!(get_cidr_mask(Family::V4, 24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(family: Family, len: u8) -> Result<u128, CidrError> {
    let max = family.max_length();
    if len > max {
        return Err(CidrError::PrefixTooLong { len, max });
    }
    let all_bits = if max == MAX_LENGTH_V6 {
        u128::MAX
    } else {
        (1u128 << max) - 1
    };
    // a shift by the full width (len == 128) leaves no host bits
    let host_bits = all_bits.checked_shr(u32::from(len)).unwrap_or(0);
    Ok(all_bits & !host_bits)
}

fn addr_bits(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

fn bits_to_addr(family: Family, bits: u128) -> IpAddr {
    match family {
        // bits never exceed 32 for V4, truncation is a no-op
        Family::V4 => IpAddr::V4(Ipv4Addr::from(bits as u32)),
        Family::V6 => IpAddr::V6(Ipv6Addr::from(bits)),
    }
}

/// A network prefix of either address family.
///
/// The stored address is always the network address: host bits are cleared on
/// construction so equality and the canonical text form only depend on the
/// network range. IPv4-mapped IPv6 networks (`::ffff:a.b.c.d/len`, len >= 96)
/// are stored as the IPv4 network they map.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    addr: IpAddr,
    mask: u8,
}

impl Cidr {
    /// Create a [`Cidr`] from an address and prefix length, clearing host bits.
    pub fn from_parts(addr: IpAddr, mask: u8) -> Result<Cidr, CidrError> {
        let (addr, mask) = match addr {
            IpAddr::V6(v6) if (MAX_LENGTH_V6 - MAX_LENGTH_V4..=MAX_LENGTH_V6).contains(&mask) => {
                match v6.to_ipv4_mapped() {
                    Some(v4) => (IpAddr::V4(v4), mask - (MAX_LENGTH_V6 - MAX_LENGTH_V4)),
                    None => (addr, mask),
                }
            }
            _ => (addr, mask),
        };
        let family = family_of(addr);
        let net_mask = get_cidr_mask(family, mask)?;
        Ok(Cidr {
            addr: bits_to_addr(family, addr_bits(addr) & net_mask),
            mask,
        })
    }

    /// IPv4 network `<first_octet>.0.0.0/8`.
    pub(crate) const fn ipv4_slash_8(first_octet: u8) -> Cidr {
        Cidr {
            addr: IpAddr::V4(Ipv4Addr::new(first_octet, 0, 0, 0)),
            mask: 8,
        }
    }

    /// Create a new [`Cidr`] from a CIDR string (e.g. "10.0.0.0/24" or "fd8f::/96").
    pub fn new(addr_cidr: &str) -> Result<Cidr, CidrError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| CidrError::Format(addr_cidr.to_string()))?;
        let addr: IpAddr = addr
            .parse()
            .map_err(|_| CidrError::Address(addr.to_string()))?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| CidrError::PrefixLength(mask.to_string()))?;
        Cidr::from_parts(addr, mask)
    }

    /// The network address.
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// The prefix length (0-32 for IPv4, 0-128 for IPv6).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    pub fn family(&self) -> Family {
        family_of(self.addr)
    }

    pub fn is_ipv4(&self) -> bool {
        self.family() == Family::V4
    }

    fn mask_bits(&self) -> u128 {
        // mask was validated on construction
        get_cidr_mask(self.family(), self.mask).unwrap_or(0)
    }

    /// Lowest (network) address of the range, as bits.
    fn lo(&self) -> u128 {
        addr_bits(self.addr) & self.mask_bits()
    }

    /// Highest address of the range, as bits.
    fn hi(&self) -> u128 {
        let all_bits = get_cidr_mask(self.family(), self.family().max_length()).unwrap_or(0);
        self.lo() | (all_bits & !self.mask_bits())
    }

    /// Check if the address ranges of two networks intersect.
    ///
    /// Networks of different families never overlap.
    pub fn overlaps(&self, other: &Cidr) -> bool {
        self.family() == other.family() && self.lo() <= other.hi() && other.lo() <= self.hi()
    }
}

fn family_of(addr: IpAddr) -> Family {
    match addr {
        IpAddr::V4(_) => Family::V4,
        IpAddr::V6(_) => Family::V6,
    }
}

impl FromStr for Cidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::new(s)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

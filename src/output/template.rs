//! Helpers exposed to the OpenVPN config templates.
//!
//! The resolver only produces structured data; rendering networks as text for
//! the templates goes through [`TemplateHelpers`].

use crate::models::{get_cidr_mask, Cidr, Family};
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Text rendering of networks used by the config templates.
pub trait TemplateHelpers {
    /// Dotted-quad netmask of an IPv4 network, None for IPv6.
    fn netmask_text_of(&self, network: &Cidr) -> Option<String>;

    /// Networks joined with commas, e.g. `10.0.0.0/16,fd00::/8`.
    fn join_as_comma_separated(&self, networks: &[Cidr]) -> String;
}

/// Stateless [`TemplateHelpers`] implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTemplateHelpers;

impl TemplateHelpers for DefaultTemplateHelpers {
    fn netmask_text_of(&self, network: &Cidr) -> Option<String> {
        if network.family() != Family::V4 {
            return None;
        }
        let mask = get_cidr_mask(Family::V4, network.mask()).ok()?;
        let mask = u32::try_from(mask).ok()?;
        Some(Ipv4Addr::from(mask).to_string())
    }

    fn join_as_comma_separated(&self, networks: &[Cidr]) -> String {
        networks.iter().join(",")
    }
}

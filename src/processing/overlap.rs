//! Overlapping network detection.
//!
//! Detects shoot networks whose address range intersects the seed pod network.

use crate::models::Cidr;

/// Check if `reference` overlaps any of the `candidates`.
///
/// Overlap is symmetric: it does not matter which of the two networks is the
/// larger block. Networks of different families never overlap.
///
/// # Examples
/// ```
/// use vpn_seed_values::models::Cidr;
/// use vpn_seed_values::processing::overlap_any;
/// let seed = Cidr::new("10.0.0.0/8").unwrap();
/// assert!(overlap_any(&seed, &[Cidr::new("10.1.0.0/16").unwrap()]));
/// ```
pub fn overlap_any(reference: &Cidr, candidates: &[Cidr]) -> bool {
    candidates.iter().any(|c| reference.overlaps(c))
}

/// All candidates that overlap `reference`, in input order.
pub fn find_overlapping<'a>(reference: &Cidr, candidates: &'a [Cidr]) -> Vec<&'a Cidr> {
    candidates
        .iter()
        .filter(|c| reference.overlaps(c))
        .collect()
}

/// Log overlapping networks as debug messages.
pub fn log_overlapping_networks(reference: &Cidr, overlapping: &[&Cidr]) {
    if overlapping.is_empty() {
        log::debug!("No shoot network overlaps seed pod network {reference}");
        return;
    }

    log::debug!(
        "Found {} shoot network(s) overlapping seed pod network {}:",
        overlapping.len(),
        reference
    );
    for cidr in overlapping {
        log::debug!("  - {cidr}");
    }
}

//! JSON output of resolved values for the VPN engine.

use crate::models::ResolvedServerValues;

/// Serialize resolved values as pretty-printed JSON.
pub fn values_to_json(values: &ResolvedServerValues) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cidr, VpnServerConfig};
    use crate::processing::build_values;

    #[test]
    fn test_values_to_json() {
        let cfg = VpnServerConfig {
            vpn_network: Some(Cidr::new("fd8f::/96").unwrap()),
            shoot_pod_networks: vec![Cidr::new("10.0.0.0/16").unwrap()],
            ..Default::default()
        };
        let values = build_values(&cfg).unwrap();
        let json = values_to_json(&values).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["device"], "tun0");
        assert_eq!(parsed["ha_vpn_clients"], -1);
        assert_eq!(parsed["openvpn_network"], "fd8f::/96");
        assert_eq!(parsed["shoot_networks_v4"][0], "244.0.0.0/8");
        assert!(parsed["seed_pod_network"].is_null());
    }
}

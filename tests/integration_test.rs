//! Integration tests for vpn-seed-values
//!
//! These tests verify the complete workflow from loading a config to the resolved values.

use vpn_seed_values::{
    config::{from_file, from_lookup},
    error::ResolveError,
    models::{Cidr, Device, VpnServerConfig},
    output::{DefaultTemplateHelpers, TemplateHelpers},
    processing::{build_values, ValuesStore},
};

fn cidr(s: &str) -> Cidr {
    Cidr::new(s).expect("valid CIDR")
}

#[test]
fn test_ha_replica_duplicate_pod_networks() {
    let cfg = VpnServerConfig {
        vpn_network: Some(cidr("fd8f::/96")),
        pod_name: "vpn-seed-server-1".to_string(),
        is_ha: true,
        shoot_pod_networks: vec![cidr("10.0.0.0/16"), cidr("10.0.0.0/16")],
        ..Default::default()
    };
    let values = build_values(&cfg).expect("Failed to resolve values");

    assert_eq!(values.vpn_index(), 1);
    assert_eq!(values.device(), Device::MultiPoint);
    assert_eq!(
        values.shoot_networks_v4().len(),
        1,
        "Expected the duplicate pod network to be removed"
    );
}

#[test]
fn test_full_workflow_with_ha_file() {
    let cfg = from_file("src/tests/test_data/server_config_ha.json")
        .expect("Failed to read config file");
    let values = build_values(&cfg).expect("Failed to resolve values");

    assert!(values.is_ha());
    assert_eq!(values.ha_vpn_clients(), 2);
    assert_eq!(values.openvpn_network().to_string(), "fd8f::ff01:0/120");

    // Seed 100.64.0.0/12 does not overlap the shoot networks, nothing is mapped
    let helpers = DefaultTemplateHelpers;
    assert_eq!(
        helpers.join_as_comma_separated(values.shoot_networks_v4()),
        "10.0.0.0/16,10.1.0.0/16,10.250.0.0/16"
    );
    assert!(values.shoot_networks_v6().is_empty());
}

#[test]
fn test_full_workflow_with_single_file() {
    let cfg = from_file("src/tests/test_data/server_config_single.json")
        .expect("Failed to read config file");
    let values = build_values(&cfg).expect("Failed to resolve values");

    assert!(!values.is_ha());
    assert_eq!(values.device(), Device::PointToPoint);
    assert_eq!(values.ha_vpn_clients(), -1);
    assert_eq!(values.openvpn_network(), cidr("fd8f::/96"));

    let helpers = DefaultTemplateHelpers;
    assert_eq!(
        helpers.join_as_comma_separated(values.shoot_networks()),
        "242.0.0.0/8,243.0.0.0/8,244.0.0.0/8,fd00:10::/64,fd00:11::/112"
    );
    let netmasks: Vec<String> = values
        .shoot_networks_v4()
        .iter()
        .filter_map(|n| helpers.netmask_text_of(n))
        .collect();
    assert_eq!(netmasks, vec!["255.0.0.0"; 3]);
}

#[test]
fn test_validation_errors() {
    let missing = VpnServerConfig::default();
    assert_eq!(
        build_values(&missing).unwrap_err(),
        ResolveError::ConfigurationMissing
    );

    let ipv4 = VpnServerConfig {
        vpn_network: Some(cidr("10.0.0.0/8")),
        ..Default::default()
    };
    assert!(matches!(
        build_values(&ipv4).unwrap_err(),
        ResolveError::ConfigurationInvalidFamily { .. }
    ));

    let prefix = VpnServerConfig {
        vpn_network: Some(cidr("fd8f::/100")),
        ..Default::default()
    };
    assert!(matches!(
        build_values(&prefix).unwrap_err(),
        ResolveError::ConfigurationInvalidPrefixLength { expected: 96, .. }
    ));

    let mismatch = VpnServerConfig {
        vpn_network: Some(cidr("fd8f::/96")),
        pod_name: "vpn-seed-server-2".to_string(),
        is_ha: false,
        ..Default::default()
    };
    assert!(matches!(
        build_values(&mismatch).unwrap_err(),
        ResolveError::HaFlagMismatch { declared: false, .. }
    ));
}

#[test]
fn test_env_lookup_to_store() {
    let cfg = from_lookup(|name| match name {
        "VPN_NETWORK" => Some("fd8f::/96".to_string()),
        "SHOOT_SERVICE_NETWORKS" => Some("10.1.0.0/16".to_string()),
        "POD_NAME" => Some("vpn-seed-server-0".to_string()),
        "IS_HA" => Some("true".to_string()),
        _ => None,
    })
    .expect("Failed to load config");

    let store = ValuesStore::default();
    let values = store.reload(&cfg).expect("Failed to resolve values");
    assert_eq!(values.vpn_index(), 0);

    let broken = VpnServerConfig {
        is_ha: false,
        ..cfg
    };
    assert!(store.reload(&broken).is_err());
    assert_eq!(
        store.current().expect("previous values kept").vpn_index(),
        0
    );
}

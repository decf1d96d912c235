//! Reloadable holder of the last valid resolved values.
//!
//! A reload either swaps in a complete new record or leaves the previous one
//! untouched. Reads are lock-free.

use super::resolver::ValueResolver;
use crate::error::ResolveError;
use crate::models::{ResolvedServerValues, VpnServerConfig};
use arc_swap::ArcSwapOption;
use std::sync::Arc;

/// Holds the last successfully resolved [`ResolvedServerValues`].
pub struct ValuesStore {
    resolver: ValueResolver,
    current: ArcSwapOption<ResolvedServerValues>,
}

impl ValuesStore {
    /// Create an empty store.
    #[must_use]
    pub fn new(resolver: ValueResolver) -> Self {
        ValuesStore {
            resolver,
            current: ArcSwapOption::empty(),
        }
    }

    /// Last valid values, None until the first successful reload.
    pub fn current(&self) -> Option<Arc<ResolvedServerValues>> {
        self.current.load_full()
    }

    /// Resolve `cfg` and swap the result in.
    ///
    /// On error the previously stored values are kept.
    pub fn reload(
        &self,
        cfg: &VpnServerConfig,
    ) -> Result<Arc<ResolvedServerValues>, ResolveError> {
        match self.resolver.resolve(cfg) {
            Ok(values) => {
                let values = Arc::new(values);
                self.current.store(Some(Arc::clone(&values)));
                Ok(values)
            }
            Err(e) => {
                log::error!("Reload failed, keeping previous VPN server values: {e}");
                Err(e)
            }
        }
    }
}

impl Default for ValuesStore {
    fn default() -> Self {
        Self::new(ValueResolver::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cidr;

    fn valid_config() -> VpnServerConfig {
        VpnServerConfig {
            vpn_network: Some(Cidr::new("fd8f::/96").unwrap()),
            shoot_pod_networks: vec![Cidr::new("10.0.0.0/16").unwrap()],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_store() {
        let store = ValuesStore::default();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_failed_reload_keeps_previous() {
        let store = ValuesStore::default();
        let first = store.reload(&valid_config()).unwrap();

        let bad = VpnServerConfig {
            vpn_network: Some(Cidr::new("10.0.0.0/8").unwrap()),
            ..valid_config()
        };
        assert!(store.reload(&bad).is_err());

        let current = store.current().expect("values should still be present");
        assert_eq!(*current, *first);
    }

    #[test]
    fn test_failed_first_reload_stays_empty() {
        let store = ValuesStore::default();
        assert_eq!(
            store.reload(&VpnServerConfig::default()).unwrap_err(),
            ResolveError::ConfigurationMissing
        );
        assert!(store.current().is_none());
    }

    #[test]
    fn test_reload_replaces() {
        let store = ValuesStore::default();
        store.reload(&valid_config()).unwrap();
        let second = VpnServerConfig {
            status_path: "/tmp/status".to_string(),
            ..valid_config()
        };
        store.reload(&second).unwrap();
        assert_eq!(store.current().unwrap().status_path(), "/tmp/status");
    }
}

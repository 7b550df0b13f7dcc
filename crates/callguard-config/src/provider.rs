//! Configuration providers.
//!
//! Consumers never hold the configuration itself, only an `Arc` snapshot.
//! A snapshot stays valid and unchanged for as long as it is held, even if
//! the provider moves on to a newer document.

use std::sync::{Arc, PoisonError, RwLock};

use crate::config::Config;

/// Source of configuration snapshots.
pub trait ConfigProvider: Send + Sync {
    /// The current configuration.
    fn snapshot(&self) -> Arc<Config>;
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for Arc<P> {
    fn snapshot(&self) -> Arc<Config> {
        (**self).snapshot()
    }
}

/// A provider that always returns the same configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig(Arc<Config>);

impl StaticConfig {
    pub fn new(config: Config) -> Self {
        Self(Arc::new(config))
    }
}

impl ConfigProvider for StaticConfig {
    fn snapshot(&self) -> Arc<Config> {
        Arc::clone(&self.0)
    }
}

/// A provider whose configuration can be replaced at runtime.
#[derive(Debug, Default)]
pub struct SharedConfig {
    current: RwLock<Arc<Config>>,
}

impl SharedConfig {
    pub fn new(config: Config) -> Self {
        Self {
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// Install a new configuration. Snapshots taken earlier are unaffected.
    pub fn replace(&self, config: Config) {
        let count = config.supported_firmware.len();
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(config);
        tracing::debug!("Configuration replaced ({} firmware overrides)", count);
    }
}

impl ConfigProvider for SharedConfig {
    fn snapshot(&self) -> Arc<Config> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callguard_core::OverrideEntry;

    fn config_with(count: usize) -> Config {
        Config::new(vec![OverrideEntry::default(); count])
    }

    #[test]
    fn test_static_snapshots_share_config() {
        let provider = StaticConfig::new(config_with(2));
        let a = provider.snapshot();
        let b = provider.snapshot();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.overrides().len(), 2);
    }

    #[test]
    fn test_shared_replace_keeps_old_snapshot() {
        let provider = SharedConfig::new(config_with(1));
        let before = provider.snapshot();

        provider.replace(config_with(3));

        assert_eq!(before.overrides().len(), 1);
        assert_eq!(provider.snapshot().overrides().len(), 3);
    }

    #[test]
    fn test_provider_through_arc() {
        let provider: Arc<dyn ConfigProvider> = Arc::new(StaticConfig::new(config_with(4)));
        assert_eq!(provider.snapshot().overrides().len(), 4);
    }

    #[test]
    fn test_shared_across_threads() {
        let provider = Arc::new(SharedConfig::default());
        let handles: Vec<_> = (1..=4)
            .map(|n| {
                let provider = Arc::clone(&provider);
                std::thread::spawn(move || {
                    provider.replace(config_with(n));
                    provider.snapshot().overrides().len()
                })
            })
            .collect();

        for handle in handles {
            let seen = handle.join().unwrap();
            assert!((1..=4).contains(&seen));
        }
    }
}

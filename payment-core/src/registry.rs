//! Configured payment providers.
//!
//! Maps provider ids to their plugin implementation and the per-provider
//! configuration supplied by the configuration store. Dispatch is by
//! capability lookup on the plugin, never by downcasting.

use std::collections::HashMap;
use std::sync::Arc;

use payment_types::{Capability, OpaqueData, PaymentProviderPlugin, ProviderId};

use crate::error::ConfigurationError;

/// One configured provider: its plugin plus its `plugin_config_data`.
#[derive(Clone)]
pub struct ProviderEntry {
    plugin: Arc<dyn PaymentProviderPlugin>,
    config: OpaqueData,
}

impl ProviderEntry {
    pub fn plugin(&self) -> &dyn PaymentProviderPlugin {
        self.plugin.as_ref()
    }

    pub fn config(&self) -> &OpaqueData {
        &self.config
    }
}

/// Registry of provider id to configured plugin.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderId, ProviderEntry>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider with its plugin and configuration data,
    /// returning self for chaining.
    pub fn with_provider(
        mut self,
        id: ProviderId,
        plugin: Arc<dyn PaymentProviderPlugin>,
        config: OpaqueData,
    ) -> Self {
        self.providers.insert(id, ProviderEntry { plugin, config });
        self
    }

    /// Looks up a provider; an unknown id is a configuration error.
    pub fn get(&self, id: &ProviderId) -> Result<&ProviderEntry, ConfigurationError> {
        self.providers
            .get(id)
            .ok_or_else(|| ConfigurationError::UnknownProvider(id.clone()))
    }

    /// Lists the capabilities each configured provider supports.
    pub fn supported_capabilities(&self) -> HashMap<ProviderId, Vec<Capability>> {
        self.providers
            .iter()
            .map(|(id, entry)| (id.clone(), entry.plugin.supported_capabilities()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyPlugin;

    impl PaymentProviderPlugin for EmptyPlugin {
        fn name(&self) -> &str {
            "empty"
        }
    }

    #[test]
    fn test_unknown_provider_is_configuration_error() {
        let registry = ProviderRegistry::new();
        let result = registry.get(&ProviderId::from("missing"));
        assert!(matches!(result, Err(ConfigurationError::UnknownProvider(_))));
    }

    #[test]
    fn test_registered_provider_resolves_with_config() {
        let config = OpaqueData::new().with("api-key", "secret");
        let registry = ProviderRegistry::new().with_provider(
            ProviderId::from("acme"),
            Arc::new(EmptyPlugin),
            config.clone(),
        );

        let entry = registry.get(&ProviderId::from("acme")).unwrap();
        assert_eq!(entry.config(), &config);
        assert!(entry.plugin().supported_capabilities().is_empty());
    }
}

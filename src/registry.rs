//! Named prediction endpoints, fixed at startup.

#[path = "registry/provider.rs"]
mod provider;

pub use provider::Provider;

use std::collections::HashSet;

use crate::config::{BenchConfig, DEFAULT_ENDPOINT, DEMO_PROVIDERS};
use crate::error::BenchError;

/// Ordered, immutable set of providers to benchmark.
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    providers: Vec<Provider>,
}

impl EndpointRegistry {
    /// Creates a registry from an explicit provider list. Names identify
    /// providers in every result, so they must be unique.
    pub fn new(providers: Vec<Provider>) -> Result<Self, BenchError> {
        if providers.is_empty() {
            return Err(BenchError::NoProviders);
        }
        let mut seen = HashSet::new();
        if let Some(dup) = providers.iter().find(|p| !seen.insert(p.name())) {
            return Err(BenchError::DuplicateProvider {
                name: dup.name().to_string(),
            });
        }
        Ok(Self { providers })
    }

    /// Builds the registry from the `[providers]` tables, skipping disabled ones.
    pub fn from_config(config: &BenchConfig) -> Result<Self, BenchError> {
        let providers = config
            .providers
            .iter()
            .filter(|(_, cfg)| cfg.enabled)
            .map(|(name, cfg)| {
                let provider = Provider::new(name.clone(), cfg.url.clone())?;
                Ok(match cfg.cost_per_1k {
                    Some(cost) => provider.with_cost_per_1k(cost),
                    None => provider,
                })
            })
            .collect::<Result<Vec<_>, BenchError>>()?;
        Self::new(providers)
    }

    pub fn get(&self, name: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Provider> {
        self.providers.iter()
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for EndpointRegistry {
    /// The three demo platforms, all pointing at a local mock service.
    fn default() -> Self {
        let providers = DEMO_PROVIDERS
            .into_iter()
            .map(|(name, cost)| Provider {
                name: name.to_string(),
                url: DEFAULT_ENDPOINT.to_string(),
                cost_per_1k: Some(cost),
            })
            .collect();
        Self { providers }
    }
}

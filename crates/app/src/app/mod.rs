use crate::apis::{COST_INSIGHTS_API_REF, apis};
use crate::error::Result;
use crate::registry::ApiRegistry;
use crate::services::AppServices;

/// Settings that shape the registered implementations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed for reproducible cost series; `None` samples fresh data per call.
    pub seed: Option<u64>,
}

/// Application state shared by the hosting frontends (HTTP, CLI).
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: AppServices,
    registered: Vec<&'static str>,
}

impl AppState {
    /// Builds the registration table and resolves every capability the
    /// services need. Factories run exactly once here.
    pub fn new(config: AppConfig) -> Result<Self> {
        let registry = ApiRegistry::from_factories(apis(&config))?;
        let cost_insights = registry.require(&COST_INSIGHTS_API_REF)?;
        tracing::info!(apis = ?registry.ids(), seeded = config.seed.is_some(), "apis registered");
        Ok(Self {
            services: AppServices::new(cost_insights),
            registered: registry.ids().to_vec(),
            config,
        })
    }

    /// Capability ids registered at startup, in table order.
    pub fn registered_apis(&self) -> &[&'static str] {
        &self.registered
    }
}

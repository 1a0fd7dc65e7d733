mod cost_insights;

use std::sync::Arc;

use crate::api::CostInsightsApi;

pub use cost_insights::CostInsightsService;

/// Service registry for app-level operations.
#[derive(Clone)]
pub struct AppServices {
    pub cost_insights: CostInsightsService,
}

impl AppServices {
    pub fn new(cost_insights: Arc<dyn CostInsightsApi>) -> Self {
        Self {
            cost_insights: CostInsightsService::new(cost_insights),
        }
    }
}

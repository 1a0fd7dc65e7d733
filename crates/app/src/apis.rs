use std::sync::Arc;

use crate::api::CostInsightsApi;
use crate::app::AppConfig;
use crate::mock::MockCostClient;
use crate::random::{RandomSource, SeededRandom, ThreadRandom};
use crate::registry::{ApiFactory, ApiRef};
use crate::util::time::SystemClock;

pub static COST_INSIGHTS_API_REF: ApiRef<dyn CostInsightsApi> =
    ApiRef::new("plugin.costinsights.service");

/// Registration table of the host: which implementation backs each capability.
pub fn apis(config: &AppConfig) -> Vec<ApiFactory> {
    let seed = config.seed;
    vec![ApiFactory::new(&COST_INSIGHTS_API_REF, move || {
        let random: Arc<dyn RandomSource> = match seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        Arc::new(MockCostClient::with_sources(random, Arc::new(SystemClock))) as Arc<dyn CostInsightsApi>
    })]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ApiRegistry;

    #[test]
    fn table_binds_cost_insights_once() {
        let table = apis(&AppConfig::default());
        let ids: Vec<&str> = table.iter().map(ApiFactory::id).collect();
        assert_eq!(ids, vec!["plugin.costinsights.service"]);
    }

    #[tokio::test]
    async fn seeded_table_builds_reproducible_client() {
        let config = AppConfig { seed: Some(17) };
        let first = ApiRegistry::from_factories(apis(&config))
            .expect("registry")
            .require(&COST_INSIGHTS_API_REF)
            .expect("api");
        let second = ApiRegistry::from_factories(apis(&config))
            .expect("registry")
            .require(&COST_INSIGHTS_API_REF)
            .expect("api");

        let left = first.get_project_daily_cost("project-1", "").await;
        let right = second.get_project_daily_cost("project-1", "").await;
        assert_eq!(left.aggregation, right.aggregation);
    }
}

use async_trait::async_trait;
use cost_core::{
    Alert, Cost, Entity, Group, MetricData, ProductInsightsOptions, Project, ProjectGrowth,
};

/// Cost-reporting capability consumed by the dashboard.
///
/// `intervals` arguments carry the dashboard's ISO 8601 repeating-interval
/// string (for example `R2/P30D/2024-01-01`).
#[async_trait]
pub trait CostInsightsApi: Send + Sync {
    /// Groups the given user belongs to.
    async fn get_user_groups(&self, user_id: &str) -> Vec<Group>;

    async fn get_group_projects(&self, group: &str) -> Vec<Project>;

    async fn get_alerts(&self, group: &str) -> Vec<Alert>;

    /// Most recent day with complete billing data, `YYYY-MM-DD`.
    async fn get_last_complete_billing_date(&self) -> String;

    async fn get_project_daily_cost(&self, project: &str, intervals: &str) -> Cost;

    async fn get_group_daily_cost(&self, group: &str, intervals: &str) -> Cost;

    async fn get_daily_metric_data(&self, metric: &str, intervals: &str) -> MetricData;

    /// Per-product growth for a project, keyed by product id.
    async fn get_project_growth(&self, project: &str, intervals: &str) -> ProjectGrowth;

    async fn get_product_insights(&self, options: &ProductInsightsOptions) -> Entity;

    async fn get_catalog_entity_daily_cost(
        &self,
        catalog_entity_ref: &str,
        intervals: &str,
    ) -> Cost;

    async fn get_catalog_entity_products(
        &self,
        catalog_entity_ref: &str,
        intervals: &str,
    ) -> Entity;
}

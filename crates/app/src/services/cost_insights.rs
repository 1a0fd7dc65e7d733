use std::sync::Arc;

use cost_core::{
    Alert, Cost, Entity, Group, MetricData, ProductInsightsOptions, Project, ProjectGrowth,
};

use crate::api::CostInsightsApi;

/// Front for whichever implementation the registration table bound to the
/// cost-insights capability.
#[derive(Clone)]
pub struct CostInsightsService {
    api: Arc<dyn CostInsightsApi>,
}

impl CostInsightsService {
    pub(super) fn new(api: Arc<dyn CostInsightsApi>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &Arc<dyn CostInsightsApi> {
        &self.api
    }

    pub async fn user_groups(&self, user_id: &str) -> Vec<Group> {
        self.api.get_user_groups(user_id).await
    }

    pub async fn group_projects(&self, group: &str) -> Vec<Project> {
        self.api.get_group_projects(group).await
    }

    pub async fn alerts(&self, group: &str) -> Vec<Alert> {
        self.api.get_alerts(group).await
    }

    pub async fn last_complete_billing_date(&self) -> String {
        self.api.get_last_complete_billing_date().await
    }

    pub async fn project_daily_cost(&self, project: &str, intervals: &str) -> Cost {
        self.api.get_project_daily_cost(project, intervals).await
    }

    pub async fn group_daily_cost(&self, group: &str, intervals: &str) -> Cost {
        self.api.get_group_daily_cost(group, intervals).await
    }

    pub async fn daily_metric_data(&self, metric: &str, intervals: &str) -> MetricData {
        self.api.get_daily_metric_data(metric, intervals).await
    }

    pub async fn project_growth(&self, project: &str, intervals: &str) -> ProjectGrowth {
        self.api.get_project_growth(project, intervals).await
    }

    pub async fn product_insights(&self, options: &ProductInsightsOptions) -> Entity {
        self.api.get_product_insights(options).await
    }

    pub async fn catalog_entity_daily_cost(&self, catalog_entity_ref: &str, intervals: &str) -> Cost {
        self.api
            .get_catalog_entity_daily_cost(catalog_entity_ref, intervals)
            .await
    }

    pub async fn catalog_entity_products(&self, catalog_entity_ref: &str, intervals: &str) -> Entity {
        self.api
            .get_catalog_entity_products(catalog_entity_ref, intervals)
            .await
    }
}

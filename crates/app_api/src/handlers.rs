use cost_core::{
    Alert, Cost, Entity, Group, MetricData, ProductInsightsOptions, Project, ProjectGrowth,
};

use crate::{
    AppContext, BillingDateResponse, CapabilitiesResponse, CatalogEntityRequest, GroupCostRequest,
    GroupRequest, MetricRequest, OkResponse, ProjectCostRequest, UserGroupsRequest,
};

pub async fn user_groups(ctx: &AppContext, req: UserGroupsRequest) -> Vec<Group> {
    ctx.app_state
        .services
        .cost_insights
        .user_groups(&req.user_id)
        .await
}

pub async fn group_projects(ctx: &AppContext, req: GroupRequest) -> Vec<Project> {
    ctx.app_state
        .services
        .cost_insights
        .group_projects(&req.group)
        .await
}

pub async fn alerts(ctx: &AppContext, req: GroupRequest) -> Vec<Alert> {
    ctx.app_state.services.cost_insights.alerts(&req.group).await
}

pub async fn last_complete_billing_date(ctx: &AppContext) -> BillingDateResponse {
    let date = ctx
        .app_state
        .services
        .cost_insights
        .last_complete_billing_date()
        .await;
    BillingDateResponse { date }
}

pub async fn project_daily_cost(ctx: &AppContext, req: ProjectCostRequest) -> Cost {
    ctx.app_state
        .services
        .cost_insights
        .project_daily_cost(&req.project, &req.intervals)
        .await
}

pub async fn group_daily_cost(ctx: &AppContext, req: GroupCostRequest) -> Cost {
    ctx.app_state
        .services
        .cost_insights
        .group_daily_cost(&req.group, &req.intervals)
        .await
}

pub async fn daily_metric_data(ctx: &AppContext, req: MetricRequest) -> MetricData {
    ctx.app_state
        .services
        .cost_insights
        .daily_metric_data(&req.metric, &req.intervals)
        .await
}

pub async fn project_growth(ctx: &AppContext, req: ProjectCostRequest) -> ProjectGrowth {
    ctx.app_state
        .services
        .cost_insights
        .project_growth(&req.project, &req.intervals)
        .await
}

pub async fn product_insights(ctx: &AppContext, req: ProductInsightsOptions) -> Entity {
    ctx.app_state
        .services
        .cost_insights
        .product_insights(&req)
        .await
}

pub async fn catalog_entity_daily_cost(ctx: &AppContext, req: CatalogEntityRequest) -> Cost {
    ctx.app_state
        .services
        .cost_insights
        .catalog_entity_daily_cost(&req.catalog_entity_ref, &req.intervals)
        .await
}

pub async fn catalog_entity_products(ctx: &AppContext, req: CatalogEntityRequest) -> Entity {
    ctx.app_state
        .services
        .cost_insights
        .catalog_entity_products(&req.catalog_entity_ref, &req.intervals)
        .await
}

pub fn capabilities(ctx: &AppContext) -> CapabilitiesResponse {
    CapabilitiesResponse {
        apis: ctx
            .app_state
            .registered_apis()
            .iter()
            .map(|id| id.to_string())
            .collect(),
    }
}

pub fn ok() -> OkResponse {
    OkResponse { ok: true }
}

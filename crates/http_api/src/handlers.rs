use axum::{Json, extract::State, http::Uri, response::IntoResponse};

use app_api::{
    AppContext, CatalogEntityRequest, GroupCostRequest, GroupRequest, MetricRequest,
    ProjectCostRequest, UserGroupsRequest,
};
use cost_core::ProductInsightsOptions;

use crate::{errors::HttpError, extract::ApiJson};

pub async fn user_groups(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<UserGroupsRequest>,
) -> impl IntoResponse {
    Json(app_api::user_groups(&ctx, req).await)
}

pub async fn group_projects(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<GroupRequest>,
) -> impl IntoResponse {
    Json(app_api::group_projects(&ctx, req).await)
}

pub async fn alerts(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<GroupRequest>,
) -> impl IntoResponse {
    Json(app_api::alerts(&ctx, req).await)
}

pub async fn last_complete_billing_date(State(ctx): State<AppContext>) -> impl IntoResponse {
    Json(app_api::last_complete_billing_date(&ctx).await)
}

pub async fn project_daily_cost(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<ProjectCostRequest>,
) -> impl IntoResponse {
    Json(app_api::project_daily_cost(&ctx, req).await)
}

pub async fn group_daily_cost(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<GroupCostRequest>,
) -> impl IntoResponse {
    Json(app_api::group_daily_cost(&ctx, req).await)
}

pub async fn daily_metric_data(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<MetricRequest>,
) -> impl IntoResponse {
    Json(app_api::daily_metric_data(&ctx, req).await)
}

pub async fn project_growth(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<ProjectCostRequest>,
) -> impl IntoResponse {
    Json(app_api::project_growth(&ctx, req).await)
}

pub async fn product_insights(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<ProductInsightsOptions>,
) -> impl IntoResponse {
    Json(app_api::product_insights(&ctx, req).await)
}

pub async fn catalog_entity_daily_cost(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<CatalogEntityRequest>,
) -> impl IntoResponse {
    Json(app_api::catalog_entity_daily_cost(&ctx, req).await)
}

pub async fn catalog_entity_products(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<CatalogEntityRequest>,
) -> impl IntoResponse {
    Json(app_api::catalog_entity_products(&ctx, req).await)
}

pub async fn capabilities(State(ctx): State<AppContext>) -> impl IntoResponse {
    Json(app_api::capabilities(&ctx))
}

pub async fn health() -> impl IntoResponse {
    Json(app_api::ok())
}

pub async fn not_found(uri: Uri) -> HttpError {
    HttpError::not_found(format!("no route for {}", uri.path()))
}

use chrono::{Duration, Local};
use serde_json::json;

use app_api::{
    AppContext, CatalogEntityRequest, GroupCostRequest, MetricRequest, ProjectCostRequest,
    UserGroupsRequest,
};
use cost_app::{AppConfig, AppState};
use cost_core::{DEFAULT_DATE_FORMAT, ProductInsightsOptions};

fn context(seed: u64) -> AppContext {
    AppContext::new(AppState::new(AppConfig { seed: Some(seed) }).expect("app state"))
}

#[test]
fn requests_accept_dashboard_field_names() {
    let req: UserGroupsRequest =
        serde_json::from_value(json!({ "userId": "user:default/guest" })).expect("user groups");
    assert_eq!(req.user_id, "user:default/guest");

    let req: CatalogEntityRequest = serde_json::from_value(json!({
        "catalogEntityRef": "component:default/api",
        "intervals": "R2/P30D/2024-01-01"
    }))
    .expect("catalog entity");
    assert_eq!(req.catalog_entity_ref, "component:default/api");
    assert_eq!(req.intervals, "R2/P30D/2024-01-01");

    let req: ProjectCostRequest =
        serde_json::from_value(json!({ "project": "project-1" })).expect("project");
    assert_eq!(req.intervals, "");

    let req: ProductInsightsOptions =
        serde_json::from_value(json!({ "product": "s3" })).expect("product insights");
    assert_eq!(req.product, "s3");
    assert!(req.project.is_none());
}

#[tokio::test]
async fn daily_cost_handlers_use_method_windows() {
    let ctx = context(8);
    let project = app_api::project_daily_cost(
        &ctx,
        ProjectCostRequest {
            project: "project-1".to_string(),
            intervals: String::new(),
        },
    )
    .await;
    assert_eq!(project.id, "project-1");
    assert_eq!(project.aggregation.len(), 61);

    let group = app_api::group_daily_cost(
        &ctx,
        GroupCostRequest {
            group: "group-a".to_string(),
            intervals: String::new(),
        },
    )
    .await;
    assert_eq!(group.aggregation.len(), 91);

    let metric = app_api::daily_metric_data(
        &ctx,
        MetricRequest {
            metric: "dau".to_string(),
            intervals: String::new(),
        },
    )
    .await;
    assert_eq!(metric.aggregation.len(), 91);
}

#[tokio::test]
async fn billing_date_is_formatted_like_other_dates() {
    let ctx = context(1);
    let response = app_api::last_complete_billing_date(&ctx).await;
    let parsed = chrono::NaiveDate::parse_from_str(&response.date, DEFAULT_DATE_FORMAT)
        .expect("billing date parses");
    let today = Local::now().date_naive();
    assert!(parsed == today - Duration::days(1) || parsed == today - Duration::days(2));
}

#[tokio::test]
async fn capabilities_lists_registered_apis() {
    let ctx = context(1);
    let response = app_api::capabilities(&ctx);
    assert_eq!(response.apis, vec!["plugin.costinsights.service".to_string()]);
}

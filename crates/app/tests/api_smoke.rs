use chrono::Local;
use cost_app::{AppConfig, AppState, COST_INSIGHTS_API_REF, ApiRegistry, apis, previous_day};
use cost_core::{EntityChildren, ProductInsightsOptions};

#[tokio::test]
async fn registered_client_serves_every_method() {
    let registry = ApiRegistry::from_factories(apis(&AppConfig::default())).expect("registry");
    let api = registry.require(&COST_INSIGHTS_API_REF).expect("cost insights api");

    assert_eq!(api.get_user_groups("user:default/guest").await.len(), 2);
    assert_eq!(api.get_group_projects("group-a").await.len(), 2);
    assert_eq!(api.get_alerts("group-a").await.len(), 2);
    assert!(!api.get_last_complete_billing_date().await.is_empty());
    assert_eq!(api.get_project_daily_cost("project-1", "R2/P30D/2024-01-01").await.aggregation.len(), 61);
    assert_eq!(api.get_group_daily_cost("group-a", "").await.aggregation.len(), 91);
    assert_eq!(api.get_daily_metric_data("dau", "").await.aggregation.len(), 91);
    assert_eq!(api.get_project_growth("project-1", "").await.len(), 4);
    let insights = api
        .get_product_insights(&ProductInsightsOptions {
            group: "group-a".to_string(),
            product: "lambda".to_string(),
            intervals: String::new(),
            project: Some("project-1".to_string()),
        })
        .await;
    assert_eq!(insights.entities.len(), 2);
    assert_eq!(api.get_catalog_entity_daily_cost("component:default/api", "").await.aggregation.len(), 31);
    let products = api.get_catalog_entity_products("component:default/api", "").await;
    assert!(matches!(products.entities, EntityChildren::List(ref items) if items.len() == 3));
}

#[tokio::test]
async fn app_state_exposes_service() {
    let state = AppState::new(AppConfig { seed: Some(3) }).expect("app state");
    assert_eq!(state.registered_apis(), &["plugin.costinsights.service"]);

    let before = Local::now().date_naive();
    let date = state.services.cost_insights.last_complete_billing_date().await;
    let after = Local::now().date_naive();

    // The two reads only differ when the call straddles midnight.
    let expected = [previous_day(before), previous_day(after)];
    assert!(expected.contains(&date), "{date}");
    assert_eq!(date.len(), "YYYY-MM-DD".len());
}

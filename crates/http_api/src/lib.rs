mod errors;
mod extract;
mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use app_api::AppContext;

pub use errors::{ErrorBody, HttpError};
pub use extract::ApiJson;

/// `POST /api/<operation>` for every cost-insights operation, plus `GET /health`.
/// Anything else answers with a JSON 404.
pub fn router(context: AppContext) -> Router<()> {
    let api = Router::new()
        .route("/user_groups", post(handlers::user_groups))
        .route("/group_projects", post(handlers::group_projects))
        .route("/alerts", post(handlers::alerts))
        .route(
            "/last_complete_billing_date",
            post(handlers::last_complete_billing_date),
        )
        .route("/project_daily_cost", post(handlers::project_daily_cost))
        .route("/group_daily_cost", post(handlers::group_daily_cost))
        .route("/daily_metric_data", post(handlers::daily_metric_data))
        .route("/project_growth", post(handlers::project_growth))
        .route("/product_insights", post(handlers::product_insights))
        .route(
            "/catalog_entity_daily_cost",
            post(handlers::catalog_entity_daily_cost),
        )
        .route(
            "/catalog_entity_products",
            post(handlers::catalog_entity_products),
        )
        .route("/capabilities", post(handlers::capabilities));

    Router::new()
        .nest("/api", api)
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(context)
}

#[cfg(test)]
mod tests;

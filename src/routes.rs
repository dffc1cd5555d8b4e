// src/routes.rs

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn create_router(app_state: AppState) -> Router {

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .route("/summary/current", get(handlers::dashboard::get_current_summary))
        .route("/comparison", get(handlers::dashboard::get_comparison))
        .route("/time-series", get(handlers::dashboard::get_time_series))
        .route("/metrics", get(handlers::dashboard::list_metrics))
        .route("/quick-ranges", get(handlers::dashboard::get_quick_ranges));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/stores", get(handlers::stores::list_stores))
        .nest("/api/dashboard", dashboard_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

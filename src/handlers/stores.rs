// src/handlers/stores.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{config::AppState, models::sales::StoreOption};

// GET /api/stores
#[utoipa::path(
    get,
    path = "/api/stores",
    tag = "Stores",
    responses(
        (status = 200, description = "Catálogo de lojas", body = Vec<StoreOption>)
    )
)]
pub async fn list_stores(State(app_state): State<AppState>) -> impl IntoResponse {
    let stores = app_state.dashboard_service.stores().to_vec();
    (StatusCode::OK, Json(stores))
}

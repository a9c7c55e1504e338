//! Dashboard API routes

use crate::error::ApiError;
use crate::services::DashboardService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use mindtrack_shared::types::DashboardSummary;

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(get_summary))
}

/// GET /api/v1/dashboard - Aggregate statistics over the patient population
async fn get_summary(State(state): State<AppState>) -> Result<Json<DashboardSummary>, ApiError> {
    Ok(Json(DashboardService::summary(state.store())))
}

//! Patient API routes

use crate::error::ApiError;
use crate::services::live::{LiveMetrics, LiveMetricsSimulator};
use crate::services::{InsightService, ProfileService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    routing::{get, post},
    Json, Router,
};
use futures_util::stream::{self, Stream};
use mindtrack_shared::aggregate::{wearable_chart_series, WearableChartPoint, DEFAULT_CHART_POINTS};
use mindtrack_shared::listing::{PatientListController, SortDirection};
use mindtrack_shared::models::{Medication, Note, PatientProfile, WearableReading};
use mindtrack_shared::types::{
    ChartQuery, CreateNoteRequest, InsightsResponse, PatientListQuery, PatientListResponse,
};
use std::convert::Infallible;
use std::time::Duration;

/// Create patient routes
pub fn patient_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_patients))
        .route("/:id", get(get_profile))
        .route("/:id/medications", get(list_medications))
        .route("/:id/wearables", get(list_wearables))
        .route("/:id/wearables/chart", get(wearable_chart))
        .route("/:id/notes", post(add_note))
        .route("/:id/insights", post(generate_insights))
        .route("/:id/live", get(live_metrics))
}

/// GET /api/v1/patients - List patient summaries with filters and sorting
async fn list_patients(
    State(state): State<AppState>,
    Query(query): Query<PatientListQuery>,
) -> Result<Json<PatientListResponse>, ApiError> {
    let mut controller = PatientListController::new(state.store().list_summaries());

    if let Some(q) = query.q {
        controller.set_search(q);
    }
    if let Some(moods) = query.mood {
        for mood in moods.split(',').map(str::trim).filter(|m| !m.is_empty()) {
            controller.toggle_mood(mood);
        }
    }
    controller.set_adherence_filter(query.adherence);
    if let Some(key) = query.sort {
        controller.set_sort(key, query.order.unwrap_or(SortDirection::Asc));
    }

    let items = controller.visible();
    Ok(Json(PatientListResponse {
        total: items.len(),
        items,
    }))
}

/// GET /api/v1/patients/:id - Full patient profile
async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PatientProfile>, ApiError> {
    let profile = ProfileService::get(state.store(), &id).await?;
    Ok(Json(profile))
}

/// GET /api/v1/patients/:id/medications
async fn list_medications(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Medication>>, ApiError> {
    let medications = state
        .store()
        .list_medications(&id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Patient {} not found", id)))?;
    Ok(Json(medications))
}

/// GET /api/v1/patients/:id/wearables
async fn list_wearables(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<WearableReading>>, ApiError> {
    let readings = state
        .store()
        .list_wearables(&id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Patient {} not found", id)))?;
    Ok(Json(readings))
}

/// GET /api/v1/patients/:id/wearables/chart - Chart-ready rows
async fn wearable_chart(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<Vec<WearableChartPoint>>, ApiError> {
    let readings = state
        .store()
        .list_wearables(&id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Patient {} not found", id)))?;

    let points = query.points.unwrap_or(DEFAULT_CHART_POINTS);
    Ok(Json(wearable_chart_series(&readings, points)))
}

/// POST /api/v1/patients/:id/notes - Add a clinical note
async fn add_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let note = ProfileService::add_note(state.store(), &id, req.title, req.content).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// POST /api/v1/patients/:id/insights - Generate AI insights
async fn generate_insights(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InsightsResponse>, ApiError> {
    let insights = InsightService::generate(state.store(), state.completion(), &id).await?;
    Ok(Json(InsightsResponse { insights }))
}

/// GET /api/v1/patients/:id/live - SSE stream of simulated live metrics
///
/// One simulation task per subscriber; dropping the connection drops the
/// handle and cancels the task.
async fn live_metrics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let profile = ProfileService::get(state.store(), &id).await?;

    let initial = LiveMetrics::seed_from(profile.wearable_data.last());
    let tick = Duration::from_millis(state.config().mock.live_interval_ms);
    let handle = LiveMetricsSimulator::spawn(initial, tick);
    let rx = handle.subscribe();

    let stream = stream::unfold((handle, rx), |(handle, mut rx)| async move {
        if rx.changed().await.is_err() {
            return None;
        }
        let metrics = *rx.borrow_and_update();
        let event = Event::default().json_data(&metrics).ok()?;
        Some((Ok::<_, Infallible>(event), (handle, rx)))
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

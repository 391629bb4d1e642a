use crate::errors::AppError;
use crate::export::{export_filename, to_csv};
use crate::models::{AttendanceEntry, DerivedStats, InsightsResponse, NewEntry, SaveResponse};
use crate::service::save_attendance;
use crate::state::AppState;
use crate::stats::compute_stats;
use crate::ui::render_index;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.mirror.is_configured()))
}

pub async fn list_attendance(State(state): State<AppState>) -> Json<Vec<AttendanceEntry>> {
    let store = state.store.lock().await;
    Json(store.entries())
}

pub async fn save(
    State(state): State<AppState>,
    Json(payload): Json<NewEntry>,
) -> Result<Json<SaveResponse>, AppError> {
    let response = save_attendance(&state.store, &state.mirror, payload).await?;
    Ok(Json(response))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<DerivedStats> {
    let store = state.store.lock().await;
    Json(compute_stats(&store.entries()))
}

pub async fn get_insights(State(state): State<AppState>) -> Json<InsightsResponse> {
    // Snapshot first so the lock is not held across the network call.
    let entries = {
        let store = state.store.lock().await;
        store.entries()
    };
    let insights = state.insights.dashboard_insights(&entries).await;
    Json(InsightsResponse { insights })
}

pub async fn export_csv(State(state): State<AppState>) -> impl IntoResponse {
    let entries = {
        let store = state.store.lock().await;
        store.entries()
    };
    let csv = to_csv(&entries);
    let filename = export_filename(Local::now().date_naive());
    (
        [
            (header::CONTENT_TYPE, "text/csv;charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
}

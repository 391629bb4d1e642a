use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/attendance",
            get(handlers::list_attendance).post(handlers::save),
        )
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/insights", get(handlers::get_insights))
        .route("/api/export.csv", get(handlers::export_csv))
        .with_state(state)
}

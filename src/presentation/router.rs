// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_chart, get_clock, get_readouts, get_theme_patch, health_check, index, stream_dashboard,
};
use crate::presentation::session_socket::session_socket;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>, assets_dir: &str) -> Router {
    // JSON endpoints compress themselves; the page and assets go through the layer
    let page = Router::new()
        .route("/", get(index))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(CompressionLayer::new());

    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/chart", get(get_chart))
        .route("/api/clock", get(get_clock))
        .route("/api/readouts", get(get_readouts))
        .route("/api/theme/:mode/patch", get(get_theme_patch))
        .route("/api/stream", get(stream_dashboard))
        .route("/ws", get(session_socket))
        .merge(page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

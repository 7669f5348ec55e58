// HTTP request handlers
use crate::application::refresh_feed::refresh_frames;
use crate::application::theme_patch::ThemePatch;
use crate::domain::clock_display::ClockDisplay;
use crate::domain::readouts::Readouts;
use crate::domain::theme::ThemeMode;
use crate::infrastructure::chunked_json::stream_response;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ThemeQuery {
    pub theme: Option<ThemeMode>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    let readouts = state.dashboard_service.readouts().await.map_err(|e| {
        tracing::error!(error = %e, "Error fetching readouts for page");
        StatusCode::SERVICE_UNAVAILABLE
    })?;
    Ok(Html(render_page(&readouts)))
}

/// Current chart for the requested theme
pub async fn get_chart(
    Query(query): Query<ThemeQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let theme = query.theme.unwrap_or_default();

    match state.dashboard_service.chart(theme).await {
        Ok(chart) => match json_response(&chart, accepts_brotli(&headers)).await {
            Ok(response) => response,
            Err(status) => status.into_response(),
        },
        Err(e) => {
            tracing::error!(error = %e, %theme, "Error rendering chart");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Local and UTC clock strings
pub async fn get_clock(State(state): State<Arc<AppState>>) -> Json<ClockDisplay> {
    Json(state.dashboard_service.clocks())
}

/// Draught, bit depth and position readouts
pub async fn get_readouts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Readouts>, StatusCode> {
    state
        .dashboard_service
        .readouts()
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(error = %e, "Error fetching readouts");
            StatusCode::SERVICE_UNAVAILABLE
        })
}

/// Figure edits that switch a chart to `mode`
pub async fn get_theme_patch(Path(mode): Path<String>) -> Result<Json<ThemePatch>, StatusCode> {
    let theme: ThemeMode = mode.parse().map_err(|e| {
        tracing::debug!(error = %e, "Rejected theme patch request");
        StatusCode::BAD_REQUEST
    })?;
    Ok(Json(ThemePatch::for_theme(theme)))
}

/// Chunked feed of refresh frames, one per tick
pub async fn stream_dashboard(
    Query(query): Query<ThemeQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let theme = query.theme.unwrap_or_default();
    tracing::info!(%theme, "Starting refresh feed");

    stream_response(refresh_frames(
        state.dashboard_service.clone(),
        theme,
        state.refresh_interval,
    ))
}

// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::chart_renderer::ChartRenderer;
use crate::application::clock::SystemClock;
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::static_readouts::StaticReadouts;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("heave_dashboard=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    let refresh_interval = config.refresh.interval()?;

    // Readouts and clock (infrastructure layer)
    let clock = Arc::new(SystemClock::new(config.clock.fixed_offset()?));
    let readouts = Arc::new(StaticReadouts::new(&config.readouts));

    // Create services (application layer)
    let renderer = ChartRenderer::new(config.chart.marker_image.clone());
    let dashboard_service = DashboardService::new(clock, readouts, renderer);

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        refresh_interval,
    });

    // Build router (presentation layer)
    let router = build_router(state, &config.assets.dir);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid server.bind address: {}", config.server.bind))?;
    tracing::info!(
        %addr,
        refresh_ms = refresh_interval.as_millis() as u64,
        assets = %config.assets.dir,
        "Starting heave-dashboard service"
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

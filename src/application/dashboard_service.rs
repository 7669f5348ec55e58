// Dashboard service - Use case for building refresh frames
use crate::application::chart_renderer::ChartRenderer;
use crate::application::clock::Clock;
use crate::application::readout_provider::ReadoutProvider;
use crate::domain::chart::ChartSpec;
use crate::domain::clock_display::ClockDisplay;
use crate::domain::dashboard::RefreshFrame;
use crate::domain::readouts::Readouts;
use crate::domain::sample::generate_samples;
use crate::domain::theme::ThemeMode;
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    clock: Arc<dyn Clock>,
    readouts: Arc<dyn ReadoutProvider>,
    renderer: ChartRenderer,
}

impl DashboardService {
    pub fn new(
        clock: Arc<dyn Clock>,
        readouts: Arc<dyn ReadoutProvider>,
        renderer: ChartRenderer,
    ) -> Self {
        Self {
            clock,
            readouts,
            renderer,
        }
    }

    pub fn clocks(&self) -> ClockDisplay {
        ClockDisplay::at(&self.clock.now())
    }

    pub async fn readouts(&self) -> anyhow::Result<Readouts> {
        self.readouts.readouts().await
    }

    pub async fn chart(&self, theme: ThemeMode) -> anyhow::Result<ChartSpec> {
        let now = self.clock.now();
        self.chart_at(now, theme).await
    }

    /// Clocks and chart computed from a single reading of the clock.
    pub async fn refresh(&self, theme: ThemeMode) -> anyhow::Result<RefreshFrame> {
        let now = self.clock.now();
        let figure = self.chart_at(now, theme).await?;
        Ok(RefreshFrame::new(ClockDisplay::at(&now), figure))
    }

    async fn chart_at(
        &self,
        now: DateTime<FixedOffset>,
        theme: ThemeMode,
    ) -> anyhow::Result<ChartSpec> {
        let readouts = self.readouts.readouts().await?;
        let samples = generate_samples(now);

        tracing::debug!(
            samples = samples.len(),
            theme = %theme,
            "Rendering heave chart"
        );

        Ok(self.renderer.render(now, &samples, theme, &readouts.draught)?)
    }
}

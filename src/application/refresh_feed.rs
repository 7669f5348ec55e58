// Refresh feed - Timer-driven stream of refresh frames
use crate::application::dashboard_service::DashboardService;
use crate::domain::dashboard::RefreshFrame;
use crate::domain::theme::ThemeMode;
use futures::stream::Stream;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::IntervalStream;
use tokio_stream::StreamExt;

/// One frame per tick; the first tick fires immediately. Failed refreshes are
/// logged and skipped.
pub fn refresh_frames(
    service: DashboardService,
    theme: ThemeMode,
    period: Duration,
) -> impl Stream<Item = RefreshFrame> + Send + 'static {
    async_stream::stream! {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = IntervalStream::new(interval);

        while ticks.next().await.is_some() {
            match service.refresh(theme).await {
                Ok(frame) => yield frame,
                Err(e) => tracing::error!(error = %e, "Refresh failed"),
            }
        }
    }
}

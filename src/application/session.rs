// Dashboard session - Per-page state driven by timer ticks and user events
use crate::application::dashboard_service::DashboardService;
use crate::application::theme_patch::ThemePatch;
use crate::domain::chart::ChartSpec;
use crate::domain::dashboard::RefreshFrame;
use crate::domain::theme::{Tab, ThemeMode, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Tick,
    SetTheme(ThemeMode),
    SelectTab(Tab),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    Refresh(RefreshFrame),
    ThemePatched { view: ViewState, patch: ThemePatch },
    View(ViewState),
}

/// Events are handled one at a time, so a theme patch never races a refresh.
pub struct DashboardSession {
    service: DashboardService,
    view: ViewState,
    chart: Option<ChartSpec>,
}

impl DashboardSession {
    pub fn new(service: DashboardService) -> Self {
        Self {
            service,
            view: ViewState::default(),
            chart: None,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Chart as the page currently shows it.
    pub fn chart(&self) -> Option<&ChartSpec> {
        self.chart.as_ref()
    }

    pub async fn handle(&mut self, event: SessionEvent) -> anyhow::Result<SessionUpdate> {
        match event {
            SessionEvent::Tick => {
                let frame = self.service.refresh(self.view.theme).await?;
                self.chart = Some(frame.figure.clone());
                Ok(SessionUpdate::Refresh(frame))
            }
            SessionEvent::SetTheme(theme) => {
                let patch = ThemePatch::for_theme(theme);
                if let Some(chart) = self.chart.as_mut() {
                    patch.apply(chart);
                }
                self.view.theme = theme;
                Ok(SessionUpdate::ThemePatched {
                    view: self.view,
                    patch,
                })
            }
            SessionEvent::SelectTab(tab) => {
                self.view.tab = tab;
                Ok(SessionUpdate::View(self.view))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::tests::test_service;

    #[tokio::test]
    async fn test_tick_renders_with_current_theme() {
        let mut session = DashboardSession::new(test_service());
        session.handle(SessionEvent::SetTheme(ThemeMode::Dark)).await.unwrap();

        match session.handle(SessionEvent::Tick).await.unwrap() {
            SessionUpdate::Refresh(frame) => {
                assert_eq!(frame.figure.layout.plot_bgcolor, "#061d2c");
                assert_eq!(session.chart(), Some(&frame.figure));
            }
            other => panic!("unexpected update: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_theme_before_first_tick_only_updates_view() {
        let mut session = DashboardSession::new(test_service());
        let update = session.handle(SessionEvent::SetTheme(ThemeMode::Dark)).await.unwrap();

        assert!(session.chart().is_none());
        match update {
            SessionUpdate::ThemePatched { view, patch } => {
                assert_eq!(view.theme, ThemeMode::Dark);
                assert_eq!(patch, ThemePatch::for_theme(ThemeMode::Dark));
            }
            other => panic!("unexpected update: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_patched_chart_matches_fresh_render() {
        let service = test_service();
        let mut session = DashboardSession::new(service.clone());
        session.handle(SessionEvent::Tick).await.unwrap();
        session.handle(SessionEvent::SetTheme(ThemeMode::Dark)).await.unwrap();

        let fresh = service.chart(ThemeMode::Dark).await.unwrap();
        assert_eq!(session.chart(), Some(&fresh));
    }

    #[tokio::test]
    async fn test_rapid_toggles_equal_single_toggle() {
        let service = test_service();

        let mut toggled = DashboardSession::new(service.clone());
        toggled.handle(SessionEvent::Tick).await.unwrap();
        for theme in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Light, ThemeMode::Dark] {
            toggled.handle(SessionEvent::SetTheme(theme)).await.unwrap();
        }

        let mut once = DashboardSession::new(service);
        once.handle(SessionEvent::Tick).await.unwrap();
        once.handle(SessionEvent::SetTheme(ThemeMode::Dark)).await.unwrap();

        assert_eq!(toggled.chart(), once.chart());
        assert_eq!(toggled.view(), once.view());
    }

    #[tokio::test]
    async fn test_tab_selection_keeps_theme() {
        let mut session = DashboardSession::new(test_service());
        session.handle(SessionEvent::SetTheme(ThemeMode::Dark)).await.unwrap();
        let update = session.handle(SessionEvent::SelectTab(Tab::Aux)).await.unwrap();

        assert_eq!(
            update,
            SessionUpdate::View(ViewState {
                theme: ThemeMode::Dark,
                tab: Tab::Aux
            })
        );
    }
}

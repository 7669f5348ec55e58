//! WebSocket message types exchanged with the dashboard page.

use crate::application::session::{SessionEvent, SessionUpdate};
use crate::application::theme_patch::ThemePatch;
use crate::domain::dashboard::RefreshFrame;
use crate::domain::theme::{Tab, ThemeMode, ViewState};
use serde::{Deserialize, Serialize};

/// Messages sent from the page to the server
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Theme button pressed
    SetTheme { theme: ThemeMode },
    /// MAIN/AUX button pressed
    SelectTab { tab: Tab },
    /// Keepalive
    Ping,
}

impl ClientMessage {
    /// Session event for this message, if it is one.
    pub fn into_event(self) -> Option<SessionEvent> {
        match self {
            ClientMessage::SetTheme { theme } => Some(SessionEvent::SetTheme(theme)),
            ClientMessage::SelectTab { tab } => Some(SessionEvent::SelectTab(tab)),
            ClientMessage::Ping => None,
        }
    }
}

/// Messages sent from the server to the page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Theme/tab state the page should render
    View { view: ViewState },
    /// Fresh clocks and figure
    Refresh(RefreshFrame),
    /// Figure edits for a theme switch, with the new view state
    ThemePatch { view: ViewState, patch: ThemePatch },
    Pong,
    Error { message: String },
}

impl From<SessionUpdate> for ServerMessage {
    fn from(update: SessionUpdate) -> Self {
        match update {
            SessionUpdate::Refresh(frame) => ServerMessage::Refresh(frame),
            SessionUpdate::ThemePatched { view, patch } => ServerMessage::ThemePatch { view, patch },
            SessionUpdate::View(view) => ServerMessage::View { view },
        }
    }
}

//! Dashboard session over WebSocket.
//!
//! One task per connection multiplexes the refresh timer and client messages,
//! handling each to completion before the next.

use crate::application::session::{DashboardSession, SessionEvent};
use crate::presentation::app_state::AppState;
use crate::presentation::messages::{ClientMessage, ServerMessage};
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::time::MissedTickBehavior;

/// What an incoming frame asks of the session loop
#[derive(Debug, PartialEq)]
enum Inbound {
    Event(SessionEvent),
    Reply(ServerMessage),
    Ignore,
    Close,
}

/// WebSocket upgrade handler
pub async fn session_socket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.on_upgrade(move |socket| run_session(socket, state))
}

async fn run_session(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let mut session = DashboardSession::new(state.dashboard_service.clone());

    let mut interval = tokio::time::interval(state.refresh_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::info!("Dashboard session opened");

    if !send_message(&mut sender, &ServerMessage::View { view: session.view() }).await {
        return;
    }

    loop {
        let event = tokio::select! {
            _ = interval.tick() => SessionEvent::Tick,
            incoming = receiver.next() => {
                let message = match incoming {
                    Some(Ok(message)) => message,
                    Some(Err(e)) => {
                        tracing::debug!(error = %e, "WebSocket receive error");
                        break;
                    }
                    None => break,
                };
                match decode(message) {
                    Inbound::Event(event) => event,
                    Inbound::Reply(reply) => {
                        if !send_message(&mut sender, &reply).await {
                            break;
                        }
                        continue;
                    }
                    Inbound::Ignore => continue,
                    Inbound::Close => break,
                }
            }
        };

        let reply = match session.handle(event).await {
            Ok(update) => ServerMessage::from(update),
            Err(e) => {
                tracing::error!(error = %e, ?event, "Session event failed");
                ServerMessage::Error {
                    message: e.to_string(),
                }
            }
        };

        if !send_message(&mut sender, &reply).await {
            break;
        }
    }

    tracing::info!(
        view = ?session.view(),
        rendered = session.chart().is_some(),
        "Dashboard session closed"
    );
}

fn decode(message: Message) -> Inbound {
    match message {
        Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
            Ok(client_msg) => match client_msg.into_event() {
                Some(event) => Inbound::Event(event),
                None => Inbound::Reply(ServerMessage::Pong),
            },
            Err(e) => {
                tracing::debug!(error = %e, text = %text, "Invalid client message");
                Inbound::Reply(ServerMessage::Error {
                    message: format!("Invalid message format: {}", e),
                })
            }
        },
        Message::Binary(_) => Inbound::Reply(ServerMessage::Error {
            message: "Binary messages not supported".to_string(),
        }),
        // Axum answers pings itself
        Message::Ping(_) | Message::Pong(_) => Inbound::Ignore,
        Message::Close(_) => {
            tracing::debug!("Client requested close");
            Inbound::Close
        }
    }
}

/// Returns false once the connection is unusable.
async fn send_message(sender: &mut SplitSink<WebSocket, Message>, message: &ServerMessage) -> bool {
    let text = match serde_json::to_string(message) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize message");
            return true;
        }
    };

    match sender.send(Message::Text(text)).await {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "WebSocket send failed, closing session");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::theme::{Tab, ThemeMode};

    fn text(s: &str) -> Message {
        Message::Text(s.to_string())
    }

    #[test]
    fn test_decode_events() {
        assert_eq!(
            decode(text(r#"{"type":"set_theme","theme":"dark"}"#)),
            Inbound::Event(SessionEvent::SetTheme(ThemeMode::Dark))
        );
        assert_eq!(
            decode(text(r#"{"type":"select_tab","tab":"main"}"#)),
            Inbound::Event(SessionEvent::SelectTab(Tab::Main))
        );
    }

    #[test]
    fn test_decode_replies_and_control_frames() {
        assert!(matches!(decode(text(r#"{"type":"ping"}"#)), Inbound::Reply(ServerMessage::Pong)));
        assert!(matches!(
            decode(text("not json")),
            Inbound::Reply(ServerMessage::Error { .. })
        ));
        assert!(matches!(
            decode(Message::Binary(vec![1, 2, 3])),
            Inbound::Reply(ServerMessage::Error { .. })
        ));
        assert_eq!(decode(Message::Ping(vec![])), Inbound::Ignore);
        assert_eq!(decode(Message::Close(None)), Inbound::Close);
    }

    mod over_socket {
        use crate::application::dashboard_service::tests::test_service;
        use crate::presentation::app_state::AppState;
        use crate::presentation::router::build_router;
        use futures::{SinkExt, StreamExt};
        use serde_json::Value;
        use std::sync::Arc;
        use std::time::Duration;
        use tokio::net::{TcpListener, TcpStream};
        use tokio_tungstenite::tungstenite::Message as WsMessage;
        use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

        type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

        async fn connect() -> Client {
            let state = Arc::new(AppState {
                dashboard_service: test_service(),
                refresh_interval: Duration::from_millis(10),
            });
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, build_router(state, "assets")).await.unwrap();
            });

            let (client, _) = connect_async(format!("ws://{}/ws", addr)).await.unwrap();
            client
        }

        async fn next_json(client: &mut Client) -> Value {
            loop {
                let frame = tokio::time::timeout(Duration::from_secs(5), client.next())
                    .await
                    .expect("no frame within 5s")
                    .expect("socket closed")
                    .unwrap();
                if let WsMessage::Text(text) = frame {
                    return serde_json::from_str(&text).unwrap();
                }
            }
        }

        /// Skips refresh frames until a message of another type arrives.
        async fn next_non_refresh(client: &mut Client) -> Value {
            loop {
                let msg = next_json(client).await;
                if msg["type"] != "refresh" {
                    return msg;
                }
            }
        }

        async fn send(client: &mut Client, text: &str) {
            client.send(WsMessage::Text(text.to_string())).await.unwrap();
        }

        #[tokio::test]
        async fn test_view_then_immediate_refresh() {
            let mut client = connect().await;

            let first = next_json(&mut client).await;
            assert_eq!(first, serde_json::json!({"type": "view", "view": {"theme": "light", "tab": "main"}}));

            let second = next_json(&mut client).await;
            assert_eq!(second["type"], "refresh");
            assert_eq!(second["clocks"]["local"], "2024-01-01 10:00:00");
            assert_eq!(second["figure"]["layout"]["plot_bgcolor"], "white");
        }

        #[tokio::test]
        async fn test_theme_switch_and_tab_select() {
            let mut client = connect().await;
            next_json(&mut client).await;

            send(&mut client, r#"{"type":"set_theme","theme":"dark"}"#).await;
            let patch = next_non_refresh(&mut client).await;
            assert_eq!(patch["type"], "theme_patch");
            assert_eq!(patch["view"]["theme"], "dark");
            assert_eq!(patch["patch"]["ops"].as_array().unwrap().len(), 5);

            let refresh = next_json(&mut client).await;
            assert_eq!(refresh["type"], "refresh");
            assert_eq!(refresh["figure"]["layout"]["plot_bgcolor"], "#061d2c");

            send(&mut client, r#"{"type":"select_tab","tab":"aux"}"#).await;
            let view = next_non_refresh(&mut client).await;
            assert_eq!(view, serde_json::json!({"type": "view", "view": {"theme": "dark", "tab": "aux"}}));
        }

        #[tokio::test]
        async fn test_invalid_message_keeps_session_open() {
            let mut client = connect().await;
            next_json(&mut client).await;

            send(&mut client, "garbage").await;
            let error = next_non_refresh(&mut client).await;
            assert_eq!(error["type"], "error");
            assert!(error["message"].as_str().unwrap().starts_with("Invalid message format"));

            let refresh = next_json(&mut client).await;
            assert_eq!(refresh["type"], "refresh");

            send(&mut client, r#"{"type":"ping"}"#).await;
            assert_eq!(next_non_refresh(&mut client).await["type"], "pong");
        }
    }
}

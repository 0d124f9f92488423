//! HTTP routes -- dashboard page, panel JSON, and the WebSocket chat loop.

use crate::{gateway::Gateway, page::INDEX_HTML, provider::Connect};
use axum::{
    Json, Router,
    extract::{
        State, WebSocketUpgrade,
        ws::{Message as WsMessage, WebSocket},
    },
    response::{Html, IntoResponse},
    routing::get,
};
use futures_util::{SinkExt, StreamExt};
use protocol::{ClientMessage, Dashboard, PROTOCOL_VERSION, ServerMessage};
use tokio::sync::mpsc;

/// Build the axum router with `/`, `/api/dashboard` and `/ws`.
pub fn router<C: Connect>(state: Gateway<C>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/dashboard", get(dashboard::<C>))
        .route("/ws", get(ws_handler::<C>))
        .with_state(state)
}

/// The dashboard page.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Panel contents, including whether the copilot is configured.
async fn dashboard<C: Connect>(State(state): State<Gateway<C>>) -> Json<Dashboard> {
    let online = state.connector.connect().is_ok();
    Json(state.config.dashboard(online))
}

/// WebSocket upgrade handler.
async fn ws_handler<C: Connect>(
    State(state): State<Gateway<C>>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an established WebSocket connection as one chat session.
///
/// Frames are handled strictly in order: a submission blocks the session
/// until the remote call returns.
async fn handle_socket<C: Connect>(socket: WebSocket, state: Gateway<C>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    // Sender task: forward ServerMessages to the WebSocket.
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let json = match serde_json::to_string(&msg) {
                Ok(j) => j,
                Err(e) => {
                    tracing::error!("failed to serialize server message: {e}");
                    continue;
                }
            };
            if sender.send(WsMessage::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    let mut session = state.open_session();
    tracing::info!("session {} opened", session.id());
    let _ = tx.send(ServerMessage::Hello {
        protocol: PROTOCOL_VERSION.into(),
        session_id: session.id().into(),
        model: state.config.llm.model.clone(),
    });
    if let Some(message) = session.warning() {
        let _ = tx.send(ServerMessage::Warning { message });
    }

    // Receiver loop: process incoming ClientMessages.
    while let Some(Ok(ws_msg)) = receiver.next().await {
        let text = match ws_msg {
            WsMessage::Text(t) => t,
            WsMessage::Close(_) => break,
            _ => continue,
        };

        let client_msg: ClientMessage = match serde_json::from_str(&text) {
            Ok(m) => m,
            Err(e) => {
                let _ = tx.send(ServerMessage::Error {
                    code: 400,
                    message: format!("invalid message: {e}"),
                });
                continue;
            }
        };

        match client_msg {
            ClientMessage::Send { content } => {
                if content.trim().is_empty() {
                    let _ = tx.send(ServerMessage::Error {
                        code: 400,
                        message: "empty message".to_string(),
                    });
                    continue;
                }

                let _ = tx.send(ServerMessage::Pending);
                match session.submit(&state.config.llm.system_prompt, content).await {
                    Ok(reply) => {
                        let _ = tx.send(ServerMessage::Reply { content: reply });
                    }
                    Err(e) => {
                        let _ = tx.send(ServerMessage::Error {
                            code: 500,
                            message: format!("chat error: {e}"),
                        });
                    }
                }
            }

            ClientMessage::History => {
                let _ = tx.send(ServerMessage::Transcript {
                    turns: session.transcript().all().to_vec(),
                });
            }

            ClientMessage::Ping => {
                let _ = tx.send(ServerMessage::Pong);
            }
        }
    }

    tracing::info!(
        "session {} closed after {} turns ({}s)",
        session.id(),
        session.transcript().len(),
        session.age()
    );

    // Clean up.
    drop(tx);
    let _ = send_task.await;
}

//! End-to-end WebSocket session tests against a stub connector.

mod common;

use common::EchoConnector;
use futures_util::{SinkExt, StreamExt};
use llm::{OFFLINE, Role};
use protocol::{ClientMessage, PROTOCOL_VERSION, ServerMessage};
use pulsage_gateway::{GatewayConfig, ServeHandle, serve};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

fn config() -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.llm.system_prompt = "S".to_owned();
    config
}

async fn open(connector: EchoConnector) -> (ServeHandle, Socket) {
    let handle = serve(config(), connector, "127.0.0.1:0").await.unwrap();
    let url = format!("ws://127.0.0.1:{}/ws", handle.port);
    let (socket, _) = connect_async(url).await.unwrap();
    (handle, socket)
}

async fn send(socket: &mut Socket, msg: &ClientMessage) {
    let json = serde_json::to_string(msg).unwrap();
    socket.send(Message::Text(json.into())).await.unwrap();
}

async fn recv(socket: &mut Socket) -> ServerMessage {
    loop {
        let msg = socket.next().await.unwrap().unwrap();
        if let Message::Text(text) = msg {
            return serde_json::from_str(&text).unwrap();
        }
    }
}

async fn close(handle: ServeHandle, mut socket: Socket) {
    socket.close(None).await.unwrap();
    while socket.next().await.is_some() {}
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn chat_session_round_trip() {
    let connector = EchoConnector::online();
    let (handle, mut socket) = open(connector.clone()).await;

    let ServerMessage::Hello {
        protocol,
        session_id,
        model,
    } = recv(&mut socket).await
    else {
        panic!("expected hello");
    };
    assert_eq!(protocol.as_str(), PROTOCOL_VERSION);
    assert!(!session_id.is_empty());
    assert_eq!(model.as_str(), "gemini-2.0-flash");

    send(
        &mut socket,
        &ClientMessage::Send {
            content: "status?".into(),
        },
    )
    .await;
    assert!(matches!(recv(&mut socket).await, ServerMessage::Pending));
    let ServerMessage::Reply { content } = recv(&mut socket).await else {
        panic!("expected reply");
    };
    assert_eq!(content, "echo[0]: S\n\nUser: status?");

    send(&mut socket, &ClientMessage::Send { content: "c".into() }).await;
    assert!(matches!(recv(&mut socket).await, ServerMessage::Pending));
    let ServerMessage::Reply { content } = recv(&mut socket).await else {
        panic!("expected reply");
    };
    assert_eq!(content, "echo[2]: S\n\nUser: c");

    send(&mut socket, &ClientMessage::History).await;
    let ServerMessage::Transcript { turns } = recv(&mut socket).await else {
        panic!("expected transcript");
    };
    let roles: Vec<Role> = turns.iter().map(|t| t.role()).collect();
    assert_eq!(
        roles,
        vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
    );
    assert_eq!(turns[2].content(), "c");
    assert_eq!(connector.calls(), 2);

    close(handle, socket).await;
}

#[tokio::test]
async fn offline_session_warns_and_never_calls_model() {
    let connector = EchoConnector::offline();
    let (handle, mut socket) = open(connector.clone()).await;

    assert!(matches!(recv(&mut socket).await, ServerMessage::Hello { .. }));
    let ServerMessage::Warning { message } = recv(&mut socket).await else {
        panic!("expected warning");
    };
    assert_eq!(message, "❌ GEMINI_API_KEY not found.");

    send(
        &mut socket,
        &ClientMessage::Send {
            content: "hello".into(),
        },
    )
    .await;
    assert!(matches!(recv(&mut socket).await, ServerMessage::Pending));
    let ServerMessage::Reply { content } = recv(&mut socket).await else {
        panic!("expected reply");
    };
    assert_eq!(content, OFFLINE);
    assert_eq!(connector.calls(), 0);

    close(handle, socket).await;
}

#[tokio::test]
async fn invalid_and_empty_frames_are_rejected() {
    let (handle, mut socket) = open(EchoConnector::online()).await;
    assert!(matches!(recv(&mut socket).await, ServerMessage::Hello { .. }));

    socket
        .send(Message::Text("not json".into()))
        .await
        .unwrap();
    assert!(matches!(
        recv(&mut socket).await,
        ServerMessage::Error { code: 400, .. }
    ));

    send(
        &mut socket,
        &ClientMessage::Send {
            content: "   ".into(),
        },
    )
    .await;
    assert!(matches!(
        recv(&mut socket).await,
        ServerMessage::Error { code: 400, .. }
    ));

    send(&mut socket, &ClientMessage::History).await;
    let ServerMessage::Transcript { turns } = recv(&mut socket).await else {
        panic!("expected transcript");
    };
    assert!(turns.is_empty());

    send(&mut socket, &ClientMessage::Ping).await;
    assert!(matches!(recv(&mut socket).await, ServerMessage::Pong));

    close(handle, socket).await;
}

#[tokio::test]
async fn connections_do_not_share_transcripts() {
    let connector = EchoConnector::online();
    let handle = serve(config(), connector, "127.0.0.1:0").await.unwrap();
    let url = format!("ws://127.0.0.1:{}/ws", handle.port);
    let (mut first, _) = connect_async(url.as_str()).await.unwrap();
    let (mut second, _) = connect_async(url.as_str()).await.unwrap();
    recv(&mut first).await;
    recv(&mut second).await;

    send(&mut first, &ClientMessage::Send { content: "a".into() }).await;
    recv(&mut first).await;
    recv(&mut first).await;

    send(&mut second, &ClientMessage::History).await;
    let ServerMessage::Transcript { turns } = recv(&mut second).await else {
        panic!("expected transcript");
    };
    assert!(turns.is_empty());

    first.close(None).await.unwrap();
    while first.next().await.is_some() {}
    close(handle, second).await;
}

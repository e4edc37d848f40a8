use axum::extract::ws::Message;
use beacon_core::{ConnectionId, SignalMessage, codec};
use beacon_server::SessionManager;
use serde_json::json;
use std::time::Duration;
use tokio::sync::mpsc;

/// One fake connection: registered with the session manager under a fixed,
/// readable identifier, with the receive half of its outbound queue in hand.
/// Stands in for the WebSocket send task of a real connection.
pub struct TestConn {
    pub id: ConnectionId,
    rx: mpsc::UnboundedReceiver<Message>,
}

pub fn connect(sessions: &SessionManager, id: &str) -> TestConn {
    let (tx, rx) = mpsc::unbounded_channel();
    let id = ConnectionId::from(id);
    sessions.add_peer(id.clone(), tx);
    TestConn { id, rx }
}

impl TestConn {
    /// Next outbound message, decoded with the production codec.
    pub async fn recv(&mut self) -> SignalMessage {
        let msg = tokio::time::timeout(Duration::from_secs(1), self.rx.recv())
            .await
            .expect("timed out waiting for outbound message")
            .expect("outbound queue closed");
        let Message::Text(text) = msg else {
            panic!("expected text frame, got {msg:?}");
        };
        codec::decode(&text).expect("server emitted undecodable frame")
    }

    /// Asserts that nothing is delivered to this connection.
    pub async fn expect_silence(&mut self) {
        match tokio::time::timeout(Duration::from_millis(100), self.rx.recv()).await {
            Err(_) | Ok(None) => {}
            Ok(Some(msg)) => panic!("unexpected outbound message: {msg:?}"),
        }
    }
}

pub fn join_frame(room: &str) -> String {
    json!({"msgType": "join", "data": room}).to_string()
}

pub fn sdp_frame(to: &str, data: serde_json::Value) -> String {
    json!({"msgType": "sdp", "to": to, "data": data}).to_string()
}

pub fn candidate_frame(to: &str, data: serde_json::Value) -> String {
    json!({"msgType": "candidate", "to": to, "data": data}).to_string()
}

/// Unpacks a `join_ack` into (from, room, peer_id, err).
pub fn unpack_ack(
    msg: SignalMessage,
) -> (
    Option<ConnectionId>,
    Option<String>,
    Option<ConnectionId>,
    Option<String>,
) {
    let SignalMessage::JoinAck { from, data, err } = msg else {
        panic!("expected join_ack, got {msg:?}");
    };
    let (room, peer_id) = match data {
        Some(d) => (Some(d.room.to_string()), d.peer_id),
        None => (None, None),
    };
    (from, room, peer_id, err)
}

use crate::registry::{Liveness, RoomRegistry};
use axum::extract::ws::Message;
use beacon_core::{ConnectionId, SignalMessage};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

struct SessionInner {
    peers: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
    registry: RoomRegistry,
}

/// Sole owner of connection handles.
///
/// Each live connection is one entry in `peers`: the sender half of the queue
/// drained by that connection's outbound task. Everything else in the system
/// refers to connections by [`ConnectionId`] only and resolves them here at
/// send time.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<SessionInner>,
}

impl SessionManager {
    pub fn new(registry: RoomRegistry) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                peers: DashMap::new(),
                registry,
            }),
        }
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.inner.registry
    }

    /// Registers a new connection under a fresh identifier.
    pub fn connect(&self, tx: mpsc::UnboundedSender<Message>) -> ConnectionId {
        let id = ConnectionId::random();
        self.add_peer(id.clone(), tx);
        id
    }

    pub fn add_peer(&self, id: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        info!(%id, "connection active");
        self.inner.peers.insert(id, tx);
    }

    /// Tears down a connection: drops its handle and removes it from its
    /// room. Safe to call more than once for the same identifier.
    pub fn disconnect(&self, id: &ConnectionId) {
        if self.inner.peers.remove(id).is_some() {
            info!(%id, "connection closed");
        }
        self.inner.registry.leave(id);
    }

    pub fn is_live(&self, id: &ConnectionId) -> bool {
        self.inner.peers.contains_key(id)
    }

    /// Serializes and queues `msg` for the given connection. Returns `false`
    /// if no live connection matches.
    pub fn send_signal(&self, id: &ConnectionId, msg: &SignalMessage) -> bool {
        let Some(peer) = self.inner.peers.get(id) else {
            return false;
        };
        match serde_json::to_string(msg) {
            Ok(json) => {
                if let Err(e) = peer.send(Message::Text(json.into())) {
                    // Receiver dropped mid-close; the disconnect path will
                    // reap the entry.
                    debug!(%id, "outbound queue closed: {e}");
                    return false;
                }
                true
            }
            Err(e) => {
                error!("failed to serialize signal message: {e}");
                false
            }
        }
    }
}

impl Liveness for SessionManager {
    fn is_live(&self, id: &ConnectionId) -> bool {
        SessionManager::is_live(self, id)
    }
}

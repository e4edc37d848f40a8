use crate::registry::Liveness;
use beacon_core::ConnectionId;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, info};

/// A room holds at most two members: the protocol is strictly peer-to-peer.
const ROOM_CAPACITY: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JoinError {
    #[error("invalid room name")]
    InvalidRoomName,
    #[error("room full")]
    RoomFull,
}

/// Maps room labels to their (at most two) member identifiers.
///
/// All mutation happens under one mutex; cleanup, capacity check and append
/// in [`RoomRegistry::join`] are one atomic step. Labels are matched exactly,
/// with no normalization.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: Mutex<HashMap<String, Vec<ConnectionId>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` to the room, returning the identifier of the member already
    /// present (if any).
    ///
    /// Members whose connection is gone are purged before the capacity check.
    /// A failed join leaves membership untouched; only a successful one moves
    /// the joiner out of its previous room (single-room membership).
    pub fn join(
        &self,
        label: &str,
        id: ConnectionId,
        live: &dyn Liveness,
    ) -> Result<Option<ConnectionId>, JoinError> {
        if label.is_empty() {
            return Err(JoinError::InvalidRoomName);
        }

        let mut rooms = self.rooms.lock().expect("room registry lock poisoned");

        let members = rooms.entry(label.to_string()).or_default();
        // The joiner itself does not count toward capacity; rejoining the
        // same room refreshes its membership.
        members.retain(|m| *m != id && live.is_live(m));

        if members.len() >= ROOM_CAPACITY {
            debug!(room = label, %id, "join rejected, room full");
            return Err(JoinError::RoomFull);
        }

        let peer = members.first().cloned();
        members.push(id.clone());

        // Single-room membership: the joiner leaves whichever room it was in
        // before.
        rooms.retain(|other, members| {
            if *other == label {
                return true;
            }
            members.retain(|m| *m != id);
            !members.is_empty()
        });

        info!(room = label, %id, peer = ?peer, "connection joined room");
        Ok(peer)
    }

    /// Removes `id` from every room it belongs to. A no-op for identifiers
    /// that are not a member anywhere.
    pub fn leave(&self, id: &ConnectionId) {
        let mut rooms = self.rooms.lock().expect("room registry lock poisoned");
        rooms.retain(|label, members| {
            let before = members.len();
            members.retain(|m| m != id);
            if members.len() < before {
                debug!(room = label, %id, "connection left room");
            }
            !members.is_empty()
        });
    }

    /// Snapshot of a room's live membership. Purges dead members as a side
    /// effect, like `join` does.
    pub fn members_of(&self, label: &str, live: &dyn Liveness) -> Vec<ConnectionId> {
        let mut rooms = self.rooms.lock().expect("room registry lock poisoned");
        let Some(members) = rooms.get_mut(label) else {
            return Vec::new();
        };
        members.retain(|m| live.is_live(m));
        let snapshot = members.clone();
        if members.is_empty() {
            rooms.remove(label);
        }
        snapshot
    }
}

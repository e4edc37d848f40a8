use crate::model::connection::ConnectionId;
use crate::model::room::RoomLabel;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IceServerConfig {
    pub urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

/// Payload of a successful `join_ack`: the room that was joined and, if a
/// member was already present, that member's identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JoinAckData {
    pub room: RoomLabel,
    #[serde(
        rename = "peerId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub peer_id: Option<ConnectionId>,
}

/// One signaling frame, tagged on `msgType`.
///
/// `candidate` and `sdp` carry the negotiation payload untouched in `data`;
/// the server only reads the envelope. `from` is always server-stamped on the
/// way out and ignored on the way in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "msgType", rename_all = "snake_case")]
pub enum SignalMessage {
    Join {
        data: RoomLabel,
    },
    JoinAck {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<ConnectionId>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<JoinAckData>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        err: Option<String>,
    },
    Candidate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<ConnectionId>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<ConnectionId>,
        data: Value,
    },
    Sdp {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<ConnectionId>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<ConnectionId>,
        data: Value,
    },
}

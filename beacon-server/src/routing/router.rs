use crate::session::SessionManager;
use beacon_core::{ConnectionId, JoinAckData, SignalMessage, codec};
use tracing::{debug, warn};

/// Dispatches validated messages: `join` goes through the room registry,
/// `candidate`/`sdp` are forwarded to their addressee. Holds no state of
/// its own.
#[derive(Clone)]
pub struct Router {
    sessions: SessionManager,
}

impl Router {
    pub fn new(sessions: SessionManager) -> Self {
        Self { sessions }
    }

    /// Entry point for one inbound frame. Undecodable frames are logged and
    /// dropped; the connection stays open.
    pub fn handle_raw(&self, sender: &ConnectionId, raw: &str) {
        match codec::decode(raw) {
            Ok(msg) => self.dispatch(sender, msg),
            Err(e) => warn!(%sender, "dropping inbound frame: {e}"),
        }
    }

    fn dispatch(&self, sender: &ConnectionId, msg: SignalMessage) {
        match msg {
            SignalMessage::Join { data } => self.handle_join(sender, data.as_str()),
            // Forwarded verbatim, except `from`: the client-supplied value is
            // never trusted and is overwritten with the sender's identifier.
            SignalMessage::Candidate {
                to: Some(to), data, ..
            } => self.forward(
                sender,
                SignalMessage::Candidate {
                    to: Some(to),
                    from: Some(sender.clone()),
                    data,
                },
            ),
            SignalMessage::Sdp {
                to: Some(to), data, ..
            } => self.forward(
                sender,
                SignalMessage::Sdp {
                    to: Some(to),
                    from: Some(sender.clone()),
                    data,
                },
            ),
            // The codec rejects candidate/sdp without `to`.
            SignalMessage::Candidate { to: None, .. } | SignalMessage::Sdp { to: None, .. } => {
                warn!(%sender, "dropping unaddressed message");
            }
            SignalMessage::JoinAck { .. } => {
                debug!(%sender, "dropping client-sent join_ack");
            }
        }
    }

    fn handle_join(&self, sender: &ConnectionId, room: &str) {
        let ack = match self
            .sessions
            .registry()
            .join(room, sender.clone(), &self.sessions)
        {
            Ok(peer) => SignalMessage::JoinAck {
                from: Some(sender.clone()),
                data: Some(JoinAckData {
                    room: room.into(),
                    peer_id: peer,
                }),
                err: None,
            },
            Err(e) => {
                debug!(%sender, room, "join failed: {e}");
                SignalMessage::JoinAck {
                    from: Some(sender.clone()),
                    data: None,
                    err: Some(e.to_string()),
                }
            }
        };

        if !self.sessions.send_signal(sender, &ack) {
            debug!(%sender, "join_ack undeliverable, sender already gone");
        }
    }

    /// Best-effort forward: an unknown destination is logged and the message
    /// dropped, with no error back to the sender.
    fn forward(&self, sender: &ConnectionId, msg: SignalMessage) {
        let (SignalMessage::Candidate { to: Some(to), .. }
        | SignalMessage::Sdp { to: Some(to), .. }) = &msg
        else {
            return;
        };

        if !self.sessions.send_signal(to, &msg) {
            debug!(%sender, %to, "unknown destination, dropping message");
        }
    }
}

mod connection;
mod room;
mod signaling;

pub use connection::ConnectionId;
pub use room::RoomLabel;
pub use signaling::{IceServerConfig, JoinAckData, SignalMessage};

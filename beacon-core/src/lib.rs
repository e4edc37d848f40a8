pub mod codec;
pub mod model;

pub use codec::{DecodeError, decode};
pub use model::{ConnectionId, IceServerConfig, JoinAckData, RoomLabel, SignalMessage};

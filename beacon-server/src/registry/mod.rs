mod liveness;
mod room_registry;

pub use liveness::Liveness;
pub use room_registry::{JoinError, RoomRegistry};

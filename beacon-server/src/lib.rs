pub mod http;
pub mod ice;
pub mod registry;
pub mod routing;
pub mod session;

pub use http::{AppState, routes};
pub use ice::{CredentialError, IceCredentialProvider, StaticIceServers, XirsysProvider};
pub use registry::{JoinError, Liveness, RoomRegistry};
pub use routing::Router;
pub use session::{SessionManager, ws_handler};

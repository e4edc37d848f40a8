mod session_manager;
mod ws_handler;

pub use session_manager::SessionManager;
pub use ws_handler::ws_handler;

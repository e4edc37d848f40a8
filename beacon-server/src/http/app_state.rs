use crate::ice::IceCredentialProvider;
use crate::registry::RoomRegistry;
use crate::routing::Router;
use crate::session::SessionManager;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionManager,
    pub router: Router,
    pub ice: Arc<dyn IceCredentialProvider>,
}

impl AppState {
    pub fn new(ice: Arc<dyn IceCredentialProvider>) -> Self {
        let sessions = SessionManager::new(RoomRegistry::new());
        let router = Router::new(sessions.clone());
        Self {
            sessions,
            router,
            ice,
        }
    }
}

use beacon_core::ConnectionId;

/// Answers whether an identifier is still backed by a live connection.
///
/// The registry stores bare identifiers, never connection handles; before any
/// capacity decision it asks the connection owner which of them are still
/// alive. Implemented by [`crate::session::SessionManager`] in production and
/// by plain sets in tests.
pub trait Liveness {
    fn is_live(&self, id: &ConnectionId) -> bool;
}

impl Liveness for std::collections::HashSet<ConnectionId> {
    fn is_live(&self, id: &ConnectionId) -> bool {
        self.contains(id)
    }
}

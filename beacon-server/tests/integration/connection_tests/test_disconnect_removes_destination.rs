use crate::integration::{create_test_router, init_tracing};
use crate::utils::{connect, join_frame, sdp_frame, unpack_ack};
use serde_json::json;

#[tokio::test]
async fn test_disconnected_peer_is_never_a_destination() {
    init_tracing();
    let (sessions, router) = create_test_router();

    let mut a = connect(&sessions, "A");
    let mut b = connect(&sessions, "B");
    router.handle_raw(&a.id, &join_frame("room1"));
    router.handle_raw(&b.id, &join_frame("room1"));
    a.recv().await;
    b.recv().await;

    sessions.disconnect(&b.id);
    assert!(!sessions.is_live(&b.id));

    // Forwarding to the closed connection is dropped without error.
    router.handle_raw(&a.id, &sdp_frame("B", json!({"type": "offer"})));
    a.expect_silence().await;
    b.expect_silence().await;
}

#[tokio::test]
async fn test_disconnect_is_idempotent_and_frees_the_slot() {
    init_tracing();
    let (sessions, router) = create_test_router();

    let mut a = connect(&sessions, "A");
    let mut b = connect(&sessions, "B");
    router.handle_raw(&a.id, &join_frame("room1"));
    router.handle_raw(&b.id, &join_frame("room1"));
    a.recv().await;
    b.recv().await;

    sessions.disconnect(&b.id);
    sessions.disconnect(&b.id);

    // B's slot is free again; C joins and is paired with A.
    let mut c = connect(&sessions, "C");
    router.handle_raw(&c.id, &join_frame("room1"));
    let (_, room, peer_id, err) = unpack_ack(c.recv().await);
    assert_eq!(room.as_deref(), Some("room1"));
    assert_eq!(peer_id, Some(a.id.clone()));
    assert_eq!(err, None);
}

use crate::integration::{create_test_router, init_tracing};
use crate::utils::{connect, join_frame, unpack_ack};
use beacon_core::ConnectionId;

#[tokio::test]
async fn test_third_peer_rejected() {
    init_tracing();
    let (sessions, router) = create_test_router();

    let mut a = connect(&sessions, "A");
    let mut b = connect(&sessions, "B");
    let mut c = connect(&sessions, "C");

    router.handle_raw(&a.id, &join_frame("room1"));
    router.handle_raw(&b.id, &join_frame("room1"));
    a.recv().await;
    b.recv().await;

    router.handle_raw(&c.id, &join_frame("room1"));
    let (from, room, peer_id, err) = unpack_ack(c.recv().await);
    assert_eq!(from, Some(c.id.clone()));
    assert_eq!(room, None);
    assert_eq!(peer_id, None);
    assert_eq!(err.as_deref(), Some("room full"));

    // Membership is unchanged.
    let members = sessions.registry().members_of("room1", &sessions);
    assert_eq!(
        members,
        vec![ConnectionId::from("A"), ConnectionId::from("B")]
    );

    // The rejected connection can still join elsewhere.
    router.handle_raw(&c.id, &join_frame("room2"));
    let (_, room, _, err) = unpack_ack(c.recv().await);
    assert_eq!(room.as_deref(), Some("room2"));
    assert_eq!(err, None);
}

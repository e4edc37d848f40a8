use crate::integration::{create_test_router, init_tracing};
use crate::utils::{candidate_frame, connect, join_frame};
use beacon_core::SignalMessage;
use serde_json::json;

#[tokio::test]
async fn test_rapid_message_sending() {
    init_tracing();
    let (sessions, router) = create_test_router();

    let mut a = connect(&sessions, "A");
    let mut b = connect(&sessions, "B");
    router.handle_raw(&a.id, &join_frame("room1"));
    router.handle_raw(&b.id, &join_frame("room1"));
    a.recv().await;
    b.recv().await;

    const COUNT: u64 = 100;
    for seq in 0..COUNT {
        router.handle_raw(&a.id, &candidate_frame("B", json!({"seq": seq})));
    }

    // Per-sender emission order is preserved at the destination.
    for expected in 0..COUNT {
        let SignalMessage::Candidate { data, .. } = b.recv().await else {
            panic!("expected forwarded candidate");
        };
        assert_eq!(data["seq"], expected);
    }
}

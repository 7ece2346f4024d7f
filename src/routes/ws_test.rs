use super::*;
use crate::state::test_helpers;
use tokio::time::{Duration, timeout};

async fn recv_frame(rx: &mut mpsc::Receiver<ServerEvent>) -> ServerEvent {
    timeout(Duration::from_millis(500), rx.recv())
        .await
        .expect("frame receive timed out")
        .expect("session channel closed unexpectedly")
}

// =============================================================================
// inbound dispatch
// =============================================================================

#[tokio::test]
async fn invalid_json_yields_rejected() {
    let state = test_helpers::test_app_state();
    let frames = process_inbound_text(&state, Uuid::new_v4(), "not json").await;
    assert_eq!(frames.len(), 1);
    assert!(matches!(frames[0], ServerEvent::Rejected { .. }));
    assert!(state.feed.read().await.store.is_empty());
}

#[tokio::test]
async fn unknown_type_yields_rejected() {
    let state = test_helpers::test_app_state();
    let frames =
        process_inbound_text(&state, Uuid::new_v4(), r#"{"type":"delete_message"}"#).await;
    assert!(matches!(frames[0], ServerEvent::Rejected { .. }));
}

#[tokio::test]
async fn valid_submission_replies_nothing_directly() {
    let state = test_helpers::test_app_state();
    let session_id = Uuid::new_v4();
    let (tx, mut rx) = mpsc::channel(8);
    session::connect(&state, session_id, tx).await;
    let _ = recv_frame(&mut rx).await; // replay

    let frames = process_inbound_text(
        &state,
        session_id,
        r#"{"type":"send_message","user":"alice","message":"hello"}"#,
    )
    .await;
    assert!(frames.is_empty(), "sender gets the event via fan-out, not a direct reply");

    match recv_frame(&mut rx).await {
        ServerEvent::NewMessage { event } => {
            assert_eq!(event.user, "alice");
            assert_eq!(event.message, "hello");
        }
        other => panic!("expected new_message, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_user_rejection_reaches_sender_only() {
    let state = test_helpers::test_app_state();
    let sender_id = Uuid::new_v4();
    let (tx_sender, mut rx_sender) = mpsc::channel(8);
    let (tx_peer, mut rx_peer) = mpsc::channel(8);
    session::connect(&state, sender_id, tx_sender).await;
    session::connect(&state, Uuid::new_v4(), tx_peer).await;
    let _ = recv_frame(&mut rx_sender).await;
    let _ = recv_frame(&mut rx_peer).await;

    let frames = process_inbound_text(
        &state,
        sender_id,
        r#"{"type":"send_message","user":"","message":"hi"}"#,
    )
    .await;

    assert_eq!(
        frames,
        vec![ServerEvent::Rejected { reason: "user name must not be empty".into() }]
    );
    assert!(state.feed.read().await.store.is_empty());
    assert!(
        timeout(Duration::from_millis(80), rx_peer.recv()).await.is_err(),
        "peers must see nothing for a rejected submission"
    );
}

// =============================================================================
// replay/live boundary through the session channel
// =============================================================================

#[tokio::test]
async fn channel_orders_replay_before_live() {
    let state = test_helpers::test_app_state();
    let sender_id = Uuid::new_v4();
    let (tx_sender, _rx_sender) = mpsc::channel(8);
    session::connect(&state, sender_id, tx_sender).await;

    process_inbound_text(
        &state,
        sender_id,
        r#"{"type":"send_message","user":"A","message":"first"}"#,
    )
    .await;

    // A second client connects after the first submission.
    let (tx_late, mut rx_late) = mpsc::channel(8);
    session::connect(&state, Uuid::new_v4(), tx_late).await;

    process_inbound_text(
        &state,
        sender_id,
        r#"{"type":"send_message","user":"B","message":"second"}"#,
    )
    .await;

    match recv_frame(&mut rx_late).await {
        ServerEvent::CurrentChatHistory { history } => {
            assert_eq!(history.len(), 1);
            assert_eq!(history[0].user, "A");
        }
        other => panic!("expected current_chat_history first, got {other:?}"),
    }
    match recv_frame(&mut rx_late).await {
        ServerEvent::NewMessage { event } => assert_eq!(event.user, "B"),
        other => panic!("expected new_message second, got {other:?}"),
    }
}

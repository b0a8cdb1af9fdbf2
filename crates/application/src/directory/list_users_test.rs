use super::list_users::ListUsersUseCase;
use crate::requests::dtos::{AcceptFriendRequest, SendFollowRequest};
use crate::requests::{accept_request::AcceptRequestUseCase, send_follow::SendFollowUseCase};
use crate::test_support::{insert_user, setup_db};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, Set};
use socialnet_core::entities::users;

#[tokio::test]
async fn test_directory_excludes_caller_and_flags_relationships() {
    let db = setup_db().await;
    let alice = insert_user(&db, "alice").await;
    let bob = insert_user(&db, "bob").await;
    let carol = insert_user(&db, "carol").await;
    let dave = insert_user(&db, "dave").await;

    // alice -> bob pending
    SendFollowUseCase::execute(
        &db,
        SendFollowRequest { sender_id: alice.user_id, receiver_id: bob.user_id },
    )
    .await
    .unwrap();

    // carol -> alice, accepted by alice
    let request = SendFollowUseCase::execute(
        &db,
        SendFollowRequest { sender_id: carol.user_id, receiver_id: alice.user_id },
    )
    .await
    .unwrap();
    AcceptRequestUseCase::execute(
        &db,
        AcceptFriendRequest {
            current_user_id: alice.user_id,
            sender_id: carol.user_id,
            receiver_id: alice.user_id,
            request_id: request.id,
        },
    )
    .await
    .unwrap();

    let cards = ListUsersUseCase::execute(&db, alice.user_id).await.unwrap();
    let names: Vec<&str> = cards.iter().map(|c| c.user_name.as_str()).collect();
    assert_eq!(names, vec!["bob", "carol", "dave"]);
    assert!(cards.iter().all(|c| c.id != alice.user_id));

    let bob_card = &cards[0];
    assert!(bob_card.has_request_pending);
    assert!(!bob_card.is_friend);

    let carol_card = &cards[1];
    assert!(carol_card.is_friend);
    assert!(!carol_card.has_request_pending);

    let dave_card = &cards[2];
    assert_eq!(dave_card.id, dave.user_id);
    assert!(!dave_card.is_friend);
    assert!(!dave_card.has_request_pending);
    assert_eq!(dave_card.email, "dave@example.com");
    assert_eq!(dave_card.image.as_deref(), Some("dave.png"));
}

#[tokio::test]
async fn test_pending_flag_is_directional() {
    let db = setup_db().await;
    let alice = insert_user(&db, "alice").await;
    let bob = insert_user(&db, "bob").await;

    SendFollowUseCase::execute(
        &db,
        SendFollowRequest { sender_id: bob.user_id, receiver_id: alice.user_id },
    )
    .await
    .unwrap();

    // bob asked alice; from alice's side nothing is pending
    let cards = ListUsersUseCase::execute(&db, alice.user_id).await.unwrap();
    assert_eq!(cards.len(), 1);
    assert!(!cards[0].has_request_pending);

    let cards = ListUsersUseCase::execute(&db, bob.user_id).await.unwrap();
    assert!(cards[0].has_request_pending);
}

#[tokio::test]
async fn test_directory_reports_presence() {
    let db = setup_db().await;
    let alice = insert_user(&db, "alice").await;
    let bob = insert_user(&db, "bob").await;
    insert_user(&db, "carol").await;

    let mut active: users::ActiveModel = bob.into();
    active.is_online = Set(false);
    active.disconnected_at = Set(Some((Utc::now() - Duration::minutes(5)).into()));
    active.update(&db).await.unwrap();

    let cards = ListUsersUseCase::execute(&db, alice.user_id).await.unwrap();
    assert_eq!(cards[0].last_seen, "5 minutes ago");
    assert!(!cards[0].is_online);
    // carol has never disconnected
    assert_eq!(cards[1].last_seen, "Long time ago");
}

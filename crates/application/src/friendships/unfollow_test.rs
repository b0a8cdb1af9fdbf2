use super::find_friendship;
use super::unfollow::UnfollowUseCase;
use crate::test_support::{insert_user, setup_db};
use crate::AppError;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};
use socialnet_core::entities::friendships;
use uuid::Uuid;

async fn befriend(db: &sea_orm::DatabaseConnection, own_id: Uuid, your_friend_id: Uuid) {
    friendships::ActiveModel {
        own_id: Set(own_id),
        your_friend_id: Set(your_friend_id),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .unwrap();
}

#[tokio::test]
async fn test_find_friendship_either_orientation() {
    let db = setup_db().await;
    let alice = insert_user(&db, "alice").await;
    let bob = insert_user(&db, "bob").await;
    befriend(&db, alice.user_id, bob.user_id).await;

    assert!(find_friendship(&db, alice.user_id, bob.user_id).await.unwrap().is_some());
    assert!(find_friendship(&db, bob.user_id, alice.user_id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_unfollow_from_the_other_side() {
    let db = setup_db().await;
    let alice = insert_user(&db, "alice").await;
    let bob = insert_user(&db, "bob").await;
    let carol = insert_user(&db, "carol").await;
    befriend(&db, alice.user_id, bob.user_id).await;
    befriend(&db, carol.user_id, alice.user_id).await;

    // Row is stored as (alice, bob); bob removes it.
    UnfollowUseCase::execute(&db, bob.user_id, alice.user_id).await.unwrap();

    assert!(find_friendship(&db, alice.user_id, bob.user_id).await.unwrap().is_none());
    assert_eq!(friendships::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_unfollow_missing_pair_is_not_found() {
    let db = setup_db().await;
    let alice = insert_user(&db, "alice").await;
    let bob = insert_user(&db, "bob").await;

    let err = UnfollowUseCase::execute(&db, alice.user_id, bob.user_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.status_code(), 404);
}

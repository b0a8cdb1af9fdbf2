pub mod unfollow;

#[cfg(test)]
#[path = "unfollow_test.rs"]
mod tests;

use sea_orm::{ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use socialnet_core::entities::friendships;
use uuid::Uuid;

/// The friendship row between `a` and `b`, stored in either orientation.
pub(crate) async fn find_friendship<C: ConnectionTrait>(
    db: &C,
    a: Uuid,
    b: Uuid,
) -> Result<Option<friendships::Model>, DbErr> {
    friendships::Entity::find()
        .filter(
            Condition::any()
                .add(
                    Condition::all()
                        .add(friendships::Column::OwnId.eq(a))
                        .add(friendships::Column::YourFriendId.eq(b)),
                )
                .add(
                    Condition::all()
                        .add(friendships::Column::OwnId.eq(b))
                        .add(friendships::Column::YourFriendId.eq(a)),
                ),
        )
        .one(db)
        .await
}

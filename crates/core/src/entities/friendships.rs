use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row per friend pair. The pair is symmetric: `own_id` is the user
/// who sent the original request, but lookups must check both columns.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "friendships")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub own_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub your_friend_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    /// The member of the pair that is not `user_id`.
    pub fn other(&self, user_id: Uuid) -> Uuid {
        if self.own_id == user_id {
            self.your_friend_id
        } else {
            self.own_id
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OwnId",
        to = "super::users::Column::UserId",
        on_delete = "Cascade"
    )]
    Own,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::YourFriendId",
        to = "super::users::Column::UserId",
        on_delete = "Cascade"
    )]
    YourFriend,
}

impl ActiveModelBehavior for ActiveModel {}

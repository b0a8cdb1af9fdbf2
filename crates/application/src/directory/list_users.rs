use super::dtos::UserCardDto;
use crate::AppResult;
use chrono::Utc;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use socialnet_core::entities::friend_requests::{self, RequestStatus};
use socialnet_core::entities::{friendships, users};
use socialnet_core::presence::LastSeen;
use std::collections::HashSet;
use tracing::instrument;
use uuid::Uuid;

pub struct ListUsersUseCase;

impl ListUsersUseCase {
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection, user_id: Uuid) -> AppResult<Vec<UserCardDto>> {
        let others = users::Entity::find()
            .filter(users::Column::UserId.ne(user_id))
            .order_by_asc(users::Column::UserName)
            .all(db)
            .await?;

        // Receivers of my outstanding requests
        let pending: HashSet<Uuid> = friend_requests::Entity::find()
            .filter(friend_requests::Column::SenderId.eq(user_id))
            .filter(friend_requests::Column::Status.eq(RequestStatus::Request))
            .all(db)
            .await?
            .into_iter()
            .map(|r| r.receiver_id)
            .collect();

        let friends: HashSet<Uuid> = friendships::Entity::find()
            .filter(
                Condition::any()
                    .add(friendships::Column::OwnId.eq(user_id))
                    .add(friendships::Column::YourFriendId.eq(user_id)),
            )
            .all(db)
            .await?
            .into_iter()
            .map(|f| f.other(user_id))
            .collect();

        let now = Utc::now();
        let cards = others
            .into_iter()
            .map(|u| UserCardDto {
                is_friend: friends.contains(&u.user_id),
                has_request_pending: pending.contains(&u.user_id),
                last_seen: LastSeen::compute(u.is_online, u.disconnected_at, now).to_string(),
                id: u.user_id,
                user_name: u.user_name,
                email: u.email,
                image: u.image,
                is_online: u.is_online,
            })
            .collect();

        Ok(cards)
    }
}

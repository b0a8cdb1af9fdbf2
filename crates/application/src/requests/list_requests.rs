use super::dtos::FriendRequestDto;
use crate::AppResult;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use socialnet_core::entities::friend_requests;
use uuid::Uuid;

pub struct ListRequestsUseCase;

impl ListRequestsUseCase {
    /// Everything in the caller's inbox, pending requests and notifications
    /// alike, newest first.
    pub async fn execute(db: &DatabaseConnection, user_id: Uuid) -> AppResult<Vec<FriendRequestDto>> {
        let requests = friend_requests::Entity::find()
            .filter(friend_requests::Column::ReceiverId.eq(user_id))
            .order_by_desc(friend_requests::Column::RequestId)
            .all(db)
            .await?;

        Ok(requests.into_iter().map(FriendRequestDto::from).collect())
    }
}

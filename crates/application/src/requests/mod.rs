pub mod accept_request;
pub mod decline_request;
pub mod delete_request;
pub mod dtos;
pub mod list_requests;
pub mod send_follow;
pub mod take_request;

#[cfg(test)]
#[path = "requests_test.rs"]
mod tests;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use socialnet_core::entities::friend_requests::{self, RequestStatus};
use uuid::Uuid;

/// The outstanding `Request` row from `sender_id` to `receiver_id`, if any.
pub(crate) async fn find_pending<C: ConnectionTrait>(
    db: &C,
    sender_id: Uuid,
    receiver_id: Uuid,
) -> Result<Option<friend_requests::Model>, DbErr> {
    friend_requests::Entity::find()
        .filter(friend_requests::Column::SenderId.eq(sender_id))
        .filter(friend_requests::Column::ReceiverId.eq(receiver_id))
        .filter(friend_requests::Column::Status.eq(RequestStatus::Request))
        .one(db)
        .await
}

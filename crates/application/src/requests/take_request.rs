use crate::{AppError, AppResult};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use socialnet_core::entities::friend_requests::{self, RequestStatus};
use tracing::{info, instrument};
use uuid::Uuid;

pub struct TakeRequestUseCase;

impl TakeRequestUseCase {
    /// Withdraws the caller's own pending request to `receiver_id`.
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection, sender_id: Uuid, receiver_id: Uuid) -> AppResult<()> {
        let result = friend_requests::Entity::delete_many()
            .filter(friend_requests::Column::SenderId.eq(sender_id))
            .filter(friend_requests::Column::ReceiverId.eq(receiver_id))
            .filter(friend_requests::Column::Status.eq(RequestStatus::Request))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!(
                "No pending friend request to {}",
                receiver_id
            )));
        }

        info!("Friend request withdrawn");
        Ok(())
    }
}

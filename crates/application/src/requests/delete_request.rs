use crate::{AppError, AppResult};
use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait};
use socialnet_core::entities::friend_requests;
use tracing::{info, instrument};
use uuid::Uuid;

pub struct DeleteRequestUseCase;

impl DeleteRequestUseCase {
    /// Removes a row from the caller's inbox. Rows addressed to someone
    /// else are reported as missing.
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection, user_id: Uuid, request_id: i32) -> AppResult<()> {
        let request = friend_requests::Entity::find_by_id(request_id)
            .one(db)
            .await?
            .filter(|r| r.receiver_id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("Friend request {}", request_id)))?;

        request.delete(db).await?;

        info!("Friend request deleted");
        Ok(())
    }
}

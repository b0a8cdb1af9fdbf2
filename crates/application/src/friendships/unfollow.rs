use super::find_friendship;
use crate::{AppError, AppResult};
use sea_orm::{DatabaseConnection, ModelTrait};
use tracing::{info, instrument};
use uuid::Uuid;

pub struct UnfollowUseCase;

impl UnfollowUseCase {
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection, user_id: Uuid, other_id: Uuid) -> AppResult<()> {
        let friendship = find_friendship(db, user_id, other_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Friendship with {}", other_id)))?;

        friendship.delete(db).await?;

        info!("Friendship removed");
        Ok(())
    }
}

use crate::users::FindUserUseCase;
use crate::AppResult;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use socialnet_core::entities::users;
use tracing::{info, instrument};
use uuid::Uuid;

pub struct MarkOnlineUseCase;

impl MarkOnlineUseCase {
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection, user_id: Uuid) -> AppResult<users::Model> {
        let user = FindUserUseCase::execute(db, user_id).await?;

        let mut active: users::ActiveModel = user.into();
        active.is_online = Set(true);
        active.connected_at = Set(Some(Utc::now().into()));
        let user = active.update(db).await?;

        info!(user_name = %user.user_name, "User online");
        Ok(user)
    }
}

pub struct MarkOfflineUseCase;

impl MarkOfflineUseCase {
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection, user_id: Uuid) -> AppResult<users::Model> {
        let user = FindUserUseCase::execute(db, user_id).await?;

        let mut active: users::ActiveModel = user.into();
        active.is_online = Set(false);
        active.disconnected_at = Set(Some(Utc::now().into()));
        let user = active.update(db).await?;

        info!(user_name = %user.user_name, "User offline");
        Ok(user)
    }
}

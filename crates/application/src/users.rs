use crate::{AppError, AppResult};
use sea_orm::{ConnectionTrait, EntityTrait};
use socialnet_core::entities::users;
use uuid::Uuid;

pub struct FindUserUseCase;

impl FindUserUseCase {
    /// Load a user that an operation refers to. A missing user is a client
    /// error, not a missing resource.
    pub async fn execute<C: ConnectionTrait>(db: &C, user_id: Uuid) -> AppResult<users::Model> {
        users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or(AppError::UnknownUser(user_id))
    }
}

use super::dtos::DeclineFriendRequest;
use crate::users::FindUserUseCase;
use crate::{AppError, AppResult};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set, TransactionTrait};
use socialnet_core::entities::friend_requests::{self, RequestStatus};
use socialnet_core::notifications;
use tracing::{info, instrument};
use validator::Validate;

pub struct DeclineRequestUseCase;

impl DeclineRequestUseCase {
    #[instrument(skip(db), fields(user_id = %req.current_user_id, request_id = req.request_id))]
    pub async fn execute(db: &DatabaseConnection, req: DeclineFriendRequest) -> AppResult<()> {
        req.validate()?;

        let current = FindUserUseCase::execute(db, req.current_user_id).await?;

        let txn = db.begin().await?;

        let request = friend_requests::Entity::find_by_id(req.request_id)
            .one(&txn)
            .await?
            .filter(|r| r.receiver_id == current.user_id && r.status == RequestStatus::Request)
            .ok_or_else(|| AppError::NotFound(format!("Friend request {}", req.request_id)))?;

        if request.sender_id != req.sender_id {
            return Err(AppError::Validation(
                "senderId does not match the friend request".to_string(),
            ));
        }

        request.delete(&txn).await?;

        let now = Utc::now();
        friend_requests::ActiveModel {
            sender_id: Set(current.user_id),
            receiver_id: Set(req.sender_id),
            status: Set(RequestStatus::Notification),
            content: Set(notifications::request_declined(&current.user_name, &now)),
            created_at: Set(now.into()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(sender_id = %req.sender_id, "Friend request declined");
        Ok(())
    }
}

use super::dtos::{FriendRequestDto, SendFollowRequest};
use super::find_pending;
use crate::friendships::find_friendship;
use crate::users::FindUserUseCase;
use crate::{AppError, AppResult};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use socialnet_core::entities::friend_requests::{self, RequestStatus};
use socialnet_core::notifications;
use tracing::{info, instrument};

pub struct SendFollowUseCase;

impl SendFollowUseCase {
    #[instrument(skip(db), fields(sender_id = %req.sender_id, receiver_id = %req.receiver_id))]
    pub async fn execute(
        db: &DatabaseConnection,
        req: SendFollowRequest,
    ) -> AppResult<FriendRequestDto> {
        if req.sender_id == req.receiver_id {
            return Err(AppError::Validation(
                "Cannot send a friend request to yourself".to_string(),
            ));
        }

        let sender = FindUserUseCase::execute(db, req.sender_id).await?;
        let receiver = FindUserUseCase::execute(db, req.receiver_id).await?;

        if find_pending(db, sender.user_id, receiver.user_id).await?.is_some() {
            return Err(AppError::Conflict("Friend request already sent".to_string()));
        }
        if find_friendship(db, sender.user_id, receiver.user_id).await?.is_some() {
            return Err(AppError::Conflict("Users are already friends".to_string()));
        }

        let now = Utc::now();
        let request = friend_requests::ActiveModel {
            sender_id: Set(sender.user_id),
            receiver_id: Set(receiver.user_id),
            status: Set(RequestStatus::Request),
            content: Set(notifications::request_sent(&sender.user_name, &now)),
            created_at: Set(now.into()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(request_id = request.request_id, "Friend request sent");
        Ok(request.into())
    }
}

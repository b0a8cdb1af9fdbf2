use super::dtos::AcceptFriendRequest;
use super::find_pending;
use crate::friendships::find_friendship;
use crate::users::FindUserUseCase;
use crate::{AppError, AppResult};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set, TransactionTrait};
use socialnet_core::entities::friend_requests::{self, RequestStatus};
use socialnet_core::entities::friendships;
use socialnet_core::notifications;
use tracing::{info, instrument};
use validator::Validate;

pub struct AcceptRequestUseCase;

impl AcceptRequestUseCase {
    /// Turns a pending request into a friendship. The acknowledgement
    /// notification, the removal of the request (and of any crossed request
    /// going the other way) and the friendship insert commit together.
    #[instrument(skip(db), fields(sender_id = %req.sender_id, receiver_id = %req.receiver_id, request_id = req.request_id))]
    pub async fn execute(db: &DatabaseConnection, req: AcceptFriendRequest) -> AppResult<()> {
        req.validate()?;

        if req.current_user_id != req.receiver_id {
            return Err(AppError::Authorization(
                "Only the receiver can accept a friend request".to_string(),
            ));
        }

        let sender = FindUserUseCase::execute(db, req.sender_id).await?;
        let receiver = FindUserUseCase::execute(db, req.receiver_id).await?;

        let txn = db.begin().await?;

        let request = friend_requests::Entity::find_by_id(req.request_id)
            .one(&txn)
            .await?
            .filter(|r| {
                r.status == RequestStatus::Request
                    && r.sender_id == sender.user_id
                    && r.receiver_id == receiver.user_id
            })
            .ok_or_else(|| AppError::NotFound(format!("Friend request {}", req.request_id)))?;

        let now = Utc::now();

        // Acknowledgement travels back to the original sender
        friend_requests::ActiveModel {
            sender_id: Set(receiver.user_id),
            receiver_id: Set(sender.user_id),
            status: Set(RequestStatus::Notification),
            content: Set(notifications::request_accepted(&receiver.user_name, &now)),
            created_at: Set(now.into()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        request.delete(&txn).await?;

        // A crossed request from the receiver is answered by this accept too
        if let Some(crossed) = find_pending(&txn, receiver.user_id, sender.user_id).await? {
            crossed.delete(&txn).await?;
        }

        if find_friendship(&txn, sender.user_id, receiver.user_id).await?.is_none() {
            friendships::ActiveModel {
                own_id: Set(sender.user_id),
                your_friend_id: Set(receiver.user_id),
                created_at: Set(now.into()),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        info!("Friend request accepted");
        Ok(())
    }
}

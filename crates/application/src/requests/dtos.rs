use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use socialnet_core::entities::friend_requests::{self, RequestStatus};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize)]
pub struct SendFollowRequest {
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AcceptFriendRequest {
    pub current_user_id: Uuid, // Must be the receiver
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    #[validate(range(min = 1, message = "Request id must be positive"))]
    pub request_id: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct DeclineFriendRequest {
    pub current_user_id: Uuid,
    #[validate(range(min = 1, message = "Request id must be positive"))]
    pub request_id: i32,
    pub sender_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequestDto {
    pub id: i32,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub status: RequestStatus,
    pub content: String,
    pub created_at: DateTime<FixedOffset>,
}

impl From<friend_requests::Model> for FriendRequestDto {
    fn from(m: friend_requests::Model) -> Self {
        Self {
            id: m.request_id,
            sender_id: m.sender_id,
            receiver_id: m.receiver_id,
            status: m.status,
            content: m.content,
            created_at: m.created_at,
        }
    }
}

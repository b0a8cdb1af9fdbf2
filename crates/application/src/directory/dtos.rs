use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One card in the user directory, as seen by the requesting user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCardDto {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub image: Option<String>,
    pub is_online: bool,
    pub is_friend: bool,
    pub has_request_pending: bool,
    pub last_seen: String,
}

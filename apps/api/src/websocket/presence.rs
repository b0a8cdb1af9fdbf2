use super::connection::ConnectionManager;
use super::messages::WsMessage;
use application::presence::update_presence::{MarkOfflineUseCase, MarkOnlineUseCase};
use infrastructure::redis::{PresenceEvent, RedisClient};
use sea_orm::DatabaseConnection;
use socialnet_core::presence::{connected_info, disconnected_info};
use uuid::Uuid;

/// Marks `user_id` online and tells every client.
pub async fn announce_online(
    db: &DatabaseConnection,
    manager: &ConnectionManager,
    mirror: Option<&RedisClient>,
    user_id: Uuid,
) {
    let _guard = manager.lock_presence().await;

    match MarkOnlineUseCase::execute(db, user_id).await {
        Ok(user) => {
            let info = connected_info(&user.user_name);
            manager.broadcast(&WsMessage::Connect { info }).await;
            if let Some(mirror) = mirror {
                if let Err(e) = mirror.publish_presence(&PresenceEvent::online(user_id)).await {
                    tracing::warn!("Failed to publish presence for {}: {}", user_id, e);
                }
            }
        }
        Err(e) => tracing::error!("Failed to mark user {} online: {}", user_id, e),
    }
}

/// Marks `user_id` offline unless a connection came back in the meantime.
pub async fn announce_offline(
    db: &DatabaseConnection,
    manager: &ConnectionManager,
    mirror: Option<&RedisClient>,
    user_id: Uuid,
) {
    let _guard = manager.lock_presence().await;

    let live = manager.connection_count(&user_id).await;
    if live > 0 {
        tracing::debug!("User {} reconnected ({} live), staying online", user_id, live);
        return;
    }

    match MarkOfflineUseCase::execute(db, user_id).await {
        Ok(user) => {
            let info = disconnected_info(&user.user_name);
            manager.broadcast(&WsMessage::Disconnect { info }).await;
            if let Some(mirror) = mirror {
                if let Err(e) = mirror.publish_presence(&PresenceEvent::offline(user_id)).await {
                    tracing::warn!("Failed to publish presence for {}: {}", user_id, e);
                }
            }
        }
        Err(e) => tracing::error!("Failed to mark user {} offline: {}", user_id, e),
    }
}

use chrono::{DateTime, Utc};
use redis::aio::MultiplexedConnection;
use serde::Serialize;
use uuid::Uuid;

pub const PRESENCE_CHANNEL: &str = "presence";
const ONLINE_SET_TTL_SECONDS: i64 = 3600;

pub async fn init_redis(redis_url: &str) -> anyhow::Result<MultiplexedConnection> {
    let client = redis::Client::open(redis_url)?;
    let conn = client.get_multiplexed_tokio_connection().await?;
    tracing::info!("Redis connected successfully");
    Ok(conn)
}

#[derive(Debug, Clone, Serialize)]
pub struct PresenceEvent {
    pub user_id: Uuid,
    pub online: bool,
    pub at: DateTime<Utc>,
}

impl PresenceEvent {
    pub fn online(user_id: Uuid) -> Self {
        Self { user_id, online: true, at: Utc::now() }
    }

    pub fn offline(user_id: Uuid) -> Self {
        Self { user_id, online: false, at: Utc::now() }
    }
}

pub fn online_key(user_id: &Uuid) -> String {
    format!("user:{}:online", user_id)
}

/// Mirrors live websocket connections into redis so other processes can
/// see who is online.
#[derive(Clone)]
pub struct RedisClient {
    conn: MultiplexedConnection,
}

impl RedisClient {
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }

    pub async fn publish<T: Serialize>(&self, channel: &str, message: &T) -> anyhow::Result<()> {
        let payload = serde_json::to_string(message)?;
        let mut conn = self.conn.clone();
        redis::cmd("PUBLISH")
            .arg(channel)
            .arg(payload)
            .query_async::<()>(&mut conn)
            .await?;
        Ok(())
    }

    pub async fn publish_presence(&self, event: &PresenceEvent) -> anyhow::Result<()> {
        self.publish(PRESENCE_CHANNEL, event).await
    }

    pub async fn set_user_online(&self, user_id: &Uuid, conn_id: &Uuid) -> anyhow::Result<()> {
        let key = online_key(user_id);
        let mut conn = self.conn.clone();
        redis::cmd("SADD")
            .arg(&key)
            .arg(conn_id.to_string())
            .query_async::<()>(&mut conn)
            .await?;
        redis::cmd("EXPIRE")
            .arg(&key)
            .arg(ONLINE_SET_TTL_SECONDS)
            .query_async::<()>(&mut conn)
            .await?;
        Ok(())
    }

    pub async fn set_user_offline(&self, user_id: &Uuid, conn_id: &Uuid) -> anyhow::Result<()> {
        let key = online_key(user_id);
        let mut conn = self.conn.clone();
        redis::cmd("SREM")
            .arg(&key)
            .arg(conn_id.to_string())
            .query_async::<()>(&mut conn)
            .await?;
        Ok(())
    }
}

use super::messages::{Frame, WireFormat, WsMessage};
use actix_ws::Session;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, RwLock};
use uuid::Uuid;

pub type ConnectionId = Uuid;

#[derive(Clone)]
pub struct WsConnection {
    pub user_id: Uuid,
    pub conn_id: ConnectionId,
    pub format: WireFormat,
    pub session: Session,
}

impl WsConnection {
    /// Best effort: a closed session is logged and skipped.
    pub async fn send(&mut self, msg: &WsMessage) {
        let result = match msg.encode(self.format) {
            Ok(Frame::Text(text)) => self.session.text(text).await,
            Ok(Frame::Binary(buf)) => self.session.binary(buf).await,
            Err(e) => {
                tracing::error!("Failed to serialize outbound message: {}", e);
                return;
            }
        };
        if let Err(e) = result {
            tracing::debug!("Dropping message for connection {}: {}", self.conn_id, e);
        }
    }
}

/// Live websocket connections, indexed by connection and by user.
pub struct ConnectionManager {
    connections: Arc<RwLock<HashMap<ConnectionId, WsConnection>>>,
    user_connections: Arc<RwLock<HashMap<Uuid, Vec<ConnectionId>>>>,
    presence_lock: Arc<Mutex<()>>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self {
            connections: Arc::new(RwLock::new(HashMap::new())),
            user_connections: Arc::new(RwLock::new(HashMap::new())),
            presence_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns how many connections the user has after this one.
    pub async fn add_connection(&self, conn: WsConnection) -> usize {
        let conn_id = conn.conn_id;
        let user_id = conn.user_id;

        self.connections.write().await.insert(conn_id, conn);

        let mut user_connections = self.user_connections.write().await;
        let conns = user_connections.entry(user_id).or_default();
        conns.push(conn_id);
        conns.len()
    }

    /// Returns the owner and how many of their connections remain.
    pub async fn remove_connection(&self, conn_id: &ConnectionId) -> Option<(Uuid, usize)> {
        let conn = self.connections.write().await.remove(conn_id)?;

        let mut user_connections = self.user_connections.write().await;
        let remaining = match user_connections.get_mut(&conn.user_id) {
            Some(conns) => {
                conns.retain(|id| id != conn_id);
                conns.len()
            }
            None => 0,
        };
        if remaining == 0 {
            user_connections.remove(&conn.user_id);
        }
        Some((conn.user_id, remaining))
    }

    pub async fn connection_count(&self, user_id: &Uuid) -> usize {
        self.user_connections
            .read()
            .await
            .get(user_id)
            .map_or(0, |conns| conns.len())
    }

    /// Held while a presence flag is checked and written.
    pub async fn lock_presence(&self) -> MutexGuard<'_, ()> {
        self.presence_lock.lock().await
    }

    pub async fn get_user_connections(&self, user_id: &Uuid) -> Vec<WsConnection> {
        let ids = self
            .user_connections
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default();

        let connections = self.connections.read().await;
        ids.iter().filter_map(|id| connections.get(id).cloned()).collect()
    }

    pub async fn send_to_user(&self, user_id: &Uuid, msg: &WsMessage) {
        for mut conn in self.get_user_connections(user_id).await {
            conn.send(msg).await;
        }
    }

    /// Tell `user_id` to refresh its requests and directory.
    pub async fn notify_user(&self, user_id: &Uuid) {
        self.send_to_user(user_id, &WsMessage::ReceiveNotification).await;
    }

    pub async fn broadcast(&self, msg: &WsMessage) {
        let all: Vec<WsConnection> = self.connections.read().await.values().cloned().collect();
        for mut conn in all {
            conn.send(msg).await;
        }
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

use super::connection::{ConnectionManager, WsConnection};
use super::messages::{WireFormat, WsMessage};
use super::presence::{announce_offline, announce_online};
use crate::config::Config;
use crate::handlers::error_handler::HttpAppError;
use actix_web::{get, web, Error, HttpRequest, HttpResponse};
use actix_ws::Message;
use application::auth::tokens::decode_access_token;
use application::users::FindUserUseCase;
use application::AppError;
use futures::StreamExt;
use infrastructure::redis::RedisClient;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct WsQuery {
    token: Option<String>,
    #[serde(default)]
    format: WireFormat,
}

#[get("/chathub")]
pub async fn chathub(
    req: HttpRequest,
    stream: web::Payload,
    manager: web::Data<ConnectionManager>,
    config: web::Data<Config>,
    db: web::Data<DatabaseConnection>,
    mirror: Option<web::Data<RedisClient>>,
    query: web::Query<WsQuery>,
) -> Result<HttpResponse, Error> {
    let Some(token) = query.token.as_deref() else {
        return Ok(HttpResponse::Unauthorized().finish());
    };

    let claims = match decode_access_token(&config.jwt_secret, token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!("Invalid WebSocket token: {}", e);
            return Ok(HttpResponse::Unauthorized().finish());
        }
    };

    let user_id = match claims.user_id() {
        Ok(uid) => uid,
        Err(_) => return Ok(HttpResponse::Unauthorized().finish()),
    };

    let user = match FindUserUseCase::execute(db.get_ref(), user_id).await {
        Ok(user) => user,
        Err(AppError::UnknownUser(_)) => return Ok(HttpResponse::Unauthorized().finish()),
        Err(e) => return Err(HttpAppError(e).into()),
    };

    let (response, session, mut msg_stream) = actix_ws::handle(&req, stream)?;

    let conn_id = Uuid::new_v4();
    let mut own = WsConnection {
        user_id,
        conn_id,
        format: query.format,
        session,
    };

    let live = manager.add_connection(own.clone()).await;
    tracing::info!(
        "User {} ({}) connected (Conn ID: {}, live connections: {})",
        user.user_name,
        user_id,
        conn_id,
        live
    );

    let db = db.get_ref().clone();
    let manager = manager.into_inner();
    let mirror = mirror.map(|m| m.into_inner());

    actix_web::rt::spawn(async move {
        if let Some(mirror) = &mirror {
            if let Err(e) = mirror.set_user_online(&user_id, &conn_id).await {
                tracing::warn!("Failed to mirror connection {} to redis: {}", conn_id, e);
            }
        }

        if live == 1 {
            announce_online(&db, &manager, mirror.as_deref(), user_id).await;
        }

        while let Some(Ok(msg)) = msg_stream.next().await {
            match msg {
                Message::Text(text) => {
                    handle_frame(&manager, &mut own, text.as_bytes(), false).await;
                }
                Message::Binary(bin) => {
                    handle_frame(&manager, &mut own, &bin, true).await;
                }
                Message::Ping(bytes) => {
                    let _ = own.session.pong(&bytes).await;
                }
                Message::Close(reason) => {
                    tracing::info!("WebSocket closed: {:?}", reason);
                    break;
                }
                _ => {}
            }
        }

        if let Some(mirror) = &mirror {
            if let Err(e) = mirror.set_user_offline(&user_id, &conn_id).await {
                tracing::warn!("Failed to clear connection {} from redis: {}", conn_id, e);
            }
        }

        if let Some((_, 0)) = manager.remove_connection(&conn_id).await {
            announce_offline(&db, &manager, mirror.as_deref(), user_id).await;
        }

        let _ = own.session.close(None).await;
        tracing::info!("Connection {} closed", conn_id);
    });

    Ok(response)
}

async fn handle_frame(manager: &ConnectionManager, own: &mut WsConnection, data: &[u8], is_binary: bool) {
    tracing::debug!(
        "Received {} message: {} bytes",
        if is_binary { "binary" } else { "text" },
        data.len()
    );

    match WsMessage::decode(data, is_binary) {
        Ok(WsMessage::SendFollow { id }) => {
            tracing::debug!("User {} pinged {}", own.user_id, id);
            manager.notify_user(&id).await;
        }
        Ok(WsMessage::Ping) => {
            own.send(&WsMessage::Pong).await;
        }
        Ok(other) => {
            tracing::debug!("Ignoring client message {:?}", other);
        }
        Err(e) => {
            tracing::warn!("Failed to parse message: {}", e);
            let error = WsMessage::Error {
                code: "BAD_MESSAGE".to_string(),
                message: e,
            };
            own.send(&error).await;
        }
    }
}

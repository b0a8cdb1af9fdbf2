use actix_web::{delete, get, web, HttpResponse, Responder};
use application::directory::list_users::ListUsersUseCase;
use application::friendships::unfollow::UnfollowUseCase;
use application::requests::{
    accept_request::AcceptRequestUseCase,
    decline_request::DeclineRequestUseCase,
    delete_request::DeleteRequestUseCase,
    dtos::{AcceptFriendRequest, DeclineFriendRequest, SendFollowRequest},
    list_requests::ListRequestsUseCase,
    send_follow::SendFollowUseCase,
    take_request::TakeRequestUseCase,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use uuid::Uuid;

use crate::extractors::AuthUser;
use crate::handlers::error_handler::HttpAppError;
use crate::websocket::connection::ConnectionManager;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclineQuery {
    id: i32,
    sender_id: Uuid,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptQuery {
    sender_id: Uuid,
    receiver_id: Uuid,
    request_id: i32,
}

fn message(text: &str) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": text }))
}

#[get("/Home/GetAllUsers")]
pub async fn get_all_users(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = user.user_id()?;

    let users = ListUsersUseCase::execute(&db, user_id).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/Home/SendFollow/{id}")]
pub async fn send_follow(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    hub: web::Data<ConnectionManager>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = user.user_id()?;
    let receiver_id = path.into_inner();

    let req = SendFollowRequest {
        sender_id: user_id,
        receiver_id,
    };

    let request = SendFollowUseCase::execute(&db, req).await?;
    hub.notify_user(&receiver_id).await;
    Ok(HttpResponse::Ok().json(request))
}

#[delete("/Home/TakeRequest/{id}")]
pub async fn take_request(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    hub: web::Data<ConnectionManager>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = user.user_id()?;
    let receiver_id = path.into_inner();

    TakeRequestUseCase::execute(&db, user_id, receiver_id).await?;
    hub.notify_user(&receiver_id).await;
    Ok(message("Friend request withdrawn"))
}

#[get("/Home/DeclineRequest")]
pub async fn decline_request(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    hub: web::Data<ConnectionManager>,
    query: web::Query<DeclineQuery>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = user.user_id()?;

    let req = DeclineFriendRequest {
        current_user_id: user_id,
        request_id: query.id,
        sender_id: query.sender_id,
    };

    DeclineRequestUseCase::execute(&db, req).await?;
    hub.notify_user(&query.sender_id).await;
    Ok(message("Friend request declined"))
}

#[get("/Home/AcceptRequest")]
pub async fn accept_request(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    hub: web::Data<ConnectionManager>,
    query: web::Query<AcceptQuery>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = user.user_id()?;

    let req = AcceptFriendRequest {
        current_user_id: user_id,
        sender_id: query.sender_id,
        receiver_id: query.receiver_id,
        request_id: query.request_id,
    };

    AcceptRequestUseCase::execute(&db, req).await?;
    hub.notify_user(&query.sender_id).await;
    Ok(message("Friend request accepted"))
}

#[get("/Home/DeleteRequest/{id}")]
pub async fn delete_request(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = user.user_id()?;

    DeleteRequestUseCase::execute(&db, user_id, path.into_inner()).await?;
    Ok(message("Friend request deleted"))
}

#[delete("/Home/Unfollow/{id}")]
pub async fn unfollow(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    hub: web::Data<ConnectionManager>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = user.user_id()?;
    let other_id = path.into_inner();

    UnfollowUseCase::execute(&db, user_id, other_id).await?;
    hub.notify_user(&other_id).await;
    Ok(message("You have unfollowed successfully"))
}

#[get("/Home/GetAllRequests")]
pub async fn get_all_requests(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = user.user_id()?;

    let requests = ListRequestsUseCase::execute(&db, user_id).await?;
    Ok(HttpResponse::Ok().json(requests))
}

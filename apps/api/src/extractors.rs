use crate::handlers::error_handler::HttpAppError;
use actix_web::{Error, FromRequest, HttpMessage};
use application::auth::dtos::Claims;
use application::{AppError, AppResult};
use futures::future::{ready, Ready};
use uuid::Uuid;

/// The caller, as established by `AuthMiddleware`.
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> AppResult<Uuid> {
        self.0.user_id()
    }
}

impl FromRequest for AuthUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthUser(claims.clone()))),
            None => ready(Err(HttpAppError(AppError::Authentication(
                "Missing bearer token".to_string(),
            ))
            .into())),
        }
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

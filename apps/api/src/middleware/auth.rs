use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::task::{Context, Poll};

use crate::config::Config;
use crate::handlers::error_handler::HttpAppError;
use application::auth::tokens::decode_access_token;

pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // A missing header passes through; `AuthUser` rejects it on routes
        // that need a caller. A present but invalid token is a 401 here.
        if let Some(auth_header_value) = req.headers().get(header::AUTHORIZATION) {
            if let Ok(auth_str) = auth_header_value.to_str() {
                if let Some(token) = auth_str
                    .strip_prefix("Bearer ")
                    .or_else(|| auth_str.strip_prefix("bearer "))
                {
                    if let Some(config) = req.app_data::<web::Data<Config>>() {
                        match decode_access_token(&config.jwt_secret, token) {
                            Ok(claims) => {
                                req.extensions_mut().insert(claims);
                            }
                            Err(e) => {
                                return Box::pin(async move { Err(HttpAppError(e).into()) });
                            }
                        }
                    }
                }
            }
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res)
        })
    }
}

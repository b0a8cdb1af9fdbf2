use actix_web::web;

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod websocket;

use handlers::error_handler::bad_input;
use handlers::{health, home};
use websocket::handler::chathub;

/// Routes and extractor settings shared by the server and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _| bad_input(err)))
        .app_data(web::QueryConfig::default().error_handler(|err, _| bad_input(err)))
        // Health (no auth)
        .service(health::health_check)
        // Directory, requests, friendships
        .service(home::get_all_users)
        .service(home::send_follow)
        .service(home::take_request)
        .service(home::decline_request)
        .service(home::accept_request)
        .service(home::delete_request)
        .service(home::unfollow)
        .service(home::get_all_requests)
        // Presence hub
        .service(chathub);
}

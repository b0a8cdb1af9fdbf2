#![allow(dead_code)]

use api::config::Config;
use application::auth::tokens::issue_access_token;
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use socialnet_core::entities::users;
use uuid::Uuid;

pub const SECRET: &str = "integration-secret";

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        redis_url: None,
        jwt_secret: SECRET.to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        run_migrations: true,
    }
}

pub async fn setup_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await.expect("Failed to open sqlite");
    Migrator::up(&db, None).await.expect("Failed to run migrations");
    db
}

pub async fn insert_user(db: &DatabaseConnection, user_name: &str) -> users::Model {
    users::ActiveModel {
        user_id: Set(Uuid::new_v4()),
        user_name: Set(user_name.to_string()),
        email: Set(format!("{}@example.com", user_name)),
        image: Set(None),
        is_online: Set(false),
        connected_at: Set(None),
        disconnected_at: Set(None),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .expect("Failed to insert user")
}

pub fn bearer(user_id: Uuid) -> (&'static str, String) {
    let token = issue_access_token(SECRET, user_id, chrono::Duration::minutes(5))
        .expect("Failed to issue token");
    ("Authorization", format!("Bearer {}", token))
}

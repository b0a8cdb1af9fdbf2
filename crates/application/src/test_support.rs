use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use socialnet_core::entities::users;
use uuid::Uuid;

/// Fresh in-memory SQLite database with every migration applied.
pub async fn setup_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    // One connection, otherwise every pooled connection gets its own empty database
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
        image: Set(Some(format!("{}.png", user_name))),
        is_online: Set(false),
        connected_at: Set(None),
        disconnected_at: Set(None),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await
    .expect("Failed to insert user")
}

use redis::aio::MultiplexedConnection;
use sea_orm::DatabaseConnection;

pub use crate::redis::init_redis;

pub async fn init_database(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let db = sea_orm::Database::connect(database_url).await?;
    tracing::info!("Database connected successfully");
    Ok(db)
}

/// Every store the server talks to. Redis is optional; without it presence
/// lives only in the local process.
#[derive(Clone)]
pub struct DatabaseConnections {
    pub db: DatabaseConnection,
    pub redis: Option<MultiplexedConnection>,
}

impl DatabaseConnections {
    pub async fn new(database_url: &str, redis_url: Option<&str>) -> anyhow::Result<Self> {
        let db = init_database(database_url).await?;
        let redis = match redis_url {
            Some(url) => Some(init_redis(url).await?),
            None => {
                tracing::info!("REDIS_URL not set, presence mirror disabled");
                None
            }
        };
        Ok(Self { db, redis })
    }
}

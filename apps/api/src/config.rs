#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: Option<String>,
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            redis_url: std::env::var("REDIS_URL").ok().filter(|url| !url.is_empty()),
            jwt_secret: std::env::var("JWT_SECRET")?,
            server_host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: match std::env::var("SERVER_PORT") {
                Ok(port) => port.parse()?,
                Err(_) => 8080,
            },
            run_migrations: match std::env::var("RUN_MIGRATIONS") {
                Ok(flag) => flag.parse()?,
                Err(_) => true,
            },
        })
    }
}

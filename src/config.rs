use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the environment. `DATABASE_URL` wins when set;
    /// otherwise the URL is composed from the discrete `DB_*` variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let host = env::var("DB_HOST")?;
                let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
                let name = env::var("DB_NAME")?;
                let user = env::var("DB_USER")?;
                let password = env::var("DB_PASSWORD")?;
                format!("postgres://{user}:{password}@{host}:{port}/{name}?sslmode=disable")
            }
        };
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        Ok(Self {
            port,
            database_url,
            host,
        })
    }
}

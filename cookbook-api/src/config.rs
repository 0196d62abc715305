use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

/// Environment-driven application settings.
///
/// Reads a `.env` file when present, then the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:cookbook.db".into()),
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into()),
        }
    }

    /// Connection options for the configured database, creating the file
    /// on first run.
    pub fn connect_options(&self) -> Result<SqliteConnectOptions, sqlx::Error> {
        Ok(SqliteConnectOptions::from_str(&self.database_url)?.create_if_missing(true))
    }
}

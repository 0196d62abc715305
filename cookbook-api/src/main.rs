use cookbook_api::config::AppConfig;
use cookbook_api::state::AppState;
use cookbook_api::{app, init_tracing};
use sqlx::sqlite::SqlitePoolOptions;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = AppConfig::from_env();
    let pool = SqlitePoolOptions::new()
        .connect_with(config.connect_options()?)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("database migrations applied");

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "cookbook api listening");
    axum::serve(listener, app::router(AppState::new(pool))).await?;

    Ok(())
}

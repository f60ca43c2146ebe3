mod config;
mod db;
mod error;
mod models;
mod responses;
mod routes;
mod services;
mod state;
mod utils;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use config::Config;
use db::postgres::PgUserRepository;
use services::session_store::MemorySessionStore;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = Config::from_env()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cfg.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let pool = establish_connection(&cfg.database_url).await?;
    let users = PgUserRepository::new(pool);
    users.ensure_schema().await.context("Failed to prepare users table")?;

    let addr = cfg.bind_addr;
    let state = AppState {
        db: Arc::new(users),
        sessions: Arc::new(MemorySessionStore::default()),
        config: Arc::new(cfg),
    };

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn establish_connection(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPool::connect(database_url)
        .await
        .context("Failed to connect to the database")?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .context("Failed to verify database connection")?;

    info!("Successfully connected to the database");
    Ok(pool)
}

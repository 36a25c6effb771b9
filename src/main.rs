use anyhow::Context;
use notes_app::infrastructure::{config::load_config, database::DatabaseManager, logger::init_logging};
use notes_app::{build_router, AppState};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    let _guard = init_logging(&config.logging)?;

    info!("Starting notes server...");

    let database = DatabaseManager::connect(&config.database)
        .await
        .map_err(|e| {
            error!("Failed to initialize database: {}", e);
            e
        })
        .context("数据库初始化失败")?;

    let state = AppState::new(database.repository(), config.notes.validate_input);
    let app = build_router(state, Duration::from_secs(config.http.timeout_seconds));

    let listener = TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("无法绑定到 {}", config.listen_addr()))?;
    let addr = listener.local_addr()?;

    info!("🚀 Notes server running on http://{}", addr);
    info!("📖 Available endpoints:");
    info!("   GET    /notes        - List notes");
    info!("   POST   /notes        - Create note");
    info!("   GET    /notes/:id    - Get note by ID");
    info!("   PUT    /notes/:id    - Update note");
    info!("   DELETE /notes/:id    - Delete note");
    info!("   GET    /health       - Health check");
    if config.notes.validate_input {
        info!("Server-side input validation is enabled");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Notes server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

//! 系统路由：欢迎信息与健康检查

use axum::{extract::State, response::Json, routing::get, Router};

use super::AppState;
use crate::core::error::CoreError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health_check))
}

/// API 信息
async fn api_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Hello from the notes API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /notes": "List all notes",
            "POST /notes": "Create a note: {title, content}",
            "GET /notes/:id": "Get a note",
            "PUT /notes/:id": "Update a note: {title, content}",
            "DELETE /notes/:id": "Delete a note",
            "GET /health": "Health check"
        }
    }))
}

/// 健康检查，会访问一次数据库
async fn health_check(State(state): State<AppState>) -> Result<Json<serde_json::Value>, CoreError> {
    state.note_service.ping().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": chrono::Utc::now()
    })))
}

//! 笔记模块：`/notes` 资源的 CRUD

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

use axum::{routing::get, Router};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(handler::list_notes).post(handler::create_note))
        .route(
            "/notes/:id",
            get(handler::get_note)
                .put(handler::update_note)
                .delete(handler::delete_note),
        )
}

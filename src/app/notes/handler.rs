//! 笔记处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::model::{Note, NotePayload};
use crate::app::AppState;
use crate::core::{error::CoreError, response::ApiResponse};

pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Note>>>, CoreError> {
    let notes = state.note_service.list_notes().await?;
    Ok(Json(ApiResponse::success(notes)))
}

pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Note>>, CoreError> {
    let note = state.note_service.get_note(id).await?;
    Ok(Json(ApiResponse::success(note)))
}

pub async fn create_note(
    State(state): State<AppState>,
    Json(payload): Json<NotePayload>,
) -> Result<(StatusCode, Json<ApiResponse<Note>>), CoreError> {
    let note = state.note_service.create_note(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(note))))
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NotePayload>,
) -> Result<Json<ApiResponse<Note>>, CoreError> {
    let note = state.note_service.update_note(id, payload).await?;
    Ok(Json(ApiResponse::success(note)))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Note>>, CoreError> {
    let note = state.note_service.delete_note(id).await?;
    Ok(Json(ApiResponse::success(note)))
}

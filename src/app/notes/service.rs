//! 笔记业务服务

use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use super::model::{Note, NotePayload};
use super::repository::NoteRepository;
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct NoteService {
    repository: Arc<dyn NoteRepository>,
    validate_input: bool,
}

impl NoteService {
    pub fn new(repository: Arc<dyn NoteRepository>) -> Self {
        Self {
            repository,
            validate_input: false,
        }
    }

    /// 开启后空标题或空内容返回 400
    pub fn with_validation(mut self, validate_input: bool) -> Self {
        self.validate_input = validate_input;
        self
    }

    fn check(&self, payload: &NotePayload) -> Result<(), CoreError> {
        if self.validate_input {
            payload.validate()?;
        }
        Ok(())
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, CoreError> {
        let notes = self.repository.list().await?;
        debug!("Listed {} notes", notes.len());
        Ok(notes)
    }

    pub async fn get_note(&self, id: i64) -> Result<Note, CoreError> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| CoreError::note_not_found(id))
    }

    pub async fn create_note(&self, payload: NotePayload) -> Result<Note, CoreError> {
        self.check(&payload)?;
        let note = self.repository.insert(&payload).await?;
        info!("Created note: {} ({})", note.title, note.id);
        Ok(note)
    }

    pub async fn update_note(&self, id: i64, payload: NotePayload) -> Result<Note, CoreError> {
        self.check(&payload)?;
        let note = self
            .repository
            .update(id, &payload)
            .await?
            .ok_or_else(|| CoreError::note_not_found(id))?;
        info!("Updated note: {} ({})", note.title, note.id);
        Ok(note)
    }

    pub async fn delete_note(&self, id: i64) -> Result<Note, CoreError> {
        let note = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| CoreError::note_not_found(id))?;
        info!("Deleted note: {}", id);
        Ok(note)
    }

    pub async fn ping(&self) -> Result<(), CoreError> {
        self.repository.ping().await?;
        Ok(())
    }
}

//! 本地笔记列表
//!
//! 启动时拉取一次列表，之后每个操作只发一个请求，并按服务端确认的结果更新本地状态。
//! 请求失败时只记日志，本地状态保持不变，不重试。

use tracing::{error, warn};

use super::api::NotesClient;
use crate::app::notes::model::{Note, NotePayload};

pub struct NoteBoard {
    client: NotesClient,
    notes: Vec<Note>,
}

impl NoteBoard {
    pub fn new(client: NotesClient) -> Self {
        Self {
            client,
            notes: Vec::new(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: i64) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// 直接向服务端查询单条笔记，不改动本地列表
    pub async fn fetch(&self, id: i64) -> Option<Note> {
        match self.client.get(id).await {
            Ok(note) => Some(note),
            Err(e) => {
                error!("Error fetching note {}: {}", id, e);
                None
            }
        }
    }

    pub async fn load(&mut self) -> bool {
        match self.client.list().await {
            Ok(notes) => {
                self.notes = notes;
                true
            }
            Err(e) => {
                error!("Error fetching notes: {}", e);
                false
            }
        }
    }

    /// 标题或内容为空白时直接忽略，不发请求
    pub async fn add(&mut self, title: &str, content: &str) -> bool {
        if title.trim().is_empty() || content.trim().is_empty() {
            warn!("Ignoring note with blank title or content");
            return false;
        }

        match self.client.create(&NotePayload::new(title, content)).await {
            Ok(note) => {
                self.notes.push(note);
                true
            }
            Err(e) => {
                error!("Error adding note: {}", e);
                false
            }
        }
    }

    pub async fn update(&mut self, id: i64, title: &str, content: &str) -> bool {
        match self.client.update(id, &NotePayload::new(title, content)).await {
            Ok(updated) => {
                for note in self.notes.iter_mut().filter(|note| note.id == id) {
                    *note = updated.clone();
                }
                true
            }
            Err(e) => {
                error!("Error updating note: {}", e);
                false
            }
        }
    }

    pub async fn remove(&mut self, id: i64) -> bool {
        match self.client.delete(id).await {
            Ok(()) => {
                self.notes.retain(|note| note.id != id);
                true
            }
            Err(e) => {
                error!("Error deleting note: {}", e);
                false
            }
        }
    }
}

//! 客户端：REST 调用与本地笔记列表

pub mod api;
pub mod board;
pub mod render;

pub use api::{ClientError, NotesClient, DEFAULT_BASE_URL};
pub use board::NoteBoard;

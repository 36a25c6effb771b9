//! # 笔记应用
//!
//! 分层结构：
//! - `core`：错误、响应包装、中间件
//! - `infrastructure`：配置、日志、数据库连接
//! - `app`：业务模块（笔记 CRUD、系统路由）
//! - `client`：REST 客户端与本地笔记列表

pub mod app;
pub mod client;
pub mod core;
pub mod infrastructure;

pub use crate::app::notes::model::{Note, NotePayload};
pub use crate::app::{build_router, AppState};
pub use crate::core::error::CoreError;
pub use crate::infrastructure::config::Config;

pub type Result<T> = std::result::Result<T, CoreError>;

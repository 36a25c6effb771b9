//! 笔记数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// 创建和更新共用的请求体
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NotePayload {
    #[validate(custom(function = "not_blank", message = "Title must not be empty"))]
    pub title: String,

    #[validate(custom(function = "not_blank", message = "Content must not be empty"))]
    pub content: String,
}

/// 与客户端表单一致：去掉首尾空白后不能为空
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl NotePayload {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

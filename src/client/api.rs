//! `/notes` 的 REST 客户端

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::app::notes::model::{Note, NotePayload};
use crate::core::{error::ErrorResponse, response::ApiResponse};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// 客户端错误类型
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("请求失败: {0}")]
    Http(#[from] reqwest::Error),
    #[error("笔记 {0} 不存在")]
    NotFound(i64),
    #[error("服务端返回 {status}: {message}")]
    Status { status: u16, message: String },
}

#[derive(Debug, Clone)]
pub struct NotesClient {
    http: reqwest::Client,
    base_url: String,
}

impl NotesClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self::with_http_client(http, base_url))
    }

    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list(&self) -> Result<Vec<Note>, ClientError> {
        let response = self.http.get(self.url("/notes")).send().await?;
        read_data(response, None).await
    }

    pub async fn get(&self, id: i64) -> Result<Note, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/notes/{}", id)))
            .send()
            .await?;
        read_data(response, Some(id)).await
    }

    pub async fn create(&self, payload: &NotePayload) -> Result<Note, ClientError> {
        let response = self
            .http
            .post(self.url("/notes"))
            .json(payload)
            .send()
            .await?;
        read_data(response, None).await
    }

    pub async fn update(&self, id: i64, payload: &NotePayload) -> Result<Note, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/notes/{}", id)))
            .json(payload)
            .send()
            .await?;
        read_data(response, Some(id)).await
    }

    /// 服务端返回 200 或 204 都算成功
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/notes/{}", id)))
            .send()
            .await?;
        check_status(response, Some(id)).await.map(|_| ())
    }
}

async fn check_status(response: Response, id: Option<i64>) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return Err(ClientError::NotFound(id));
        }
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.message)
        .unwrap_or(text);

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn read_data<T: DeserializeOwned>(
    response: Response,
    id: Option<i64>,
) -> Result<T, ClientError> {
    let response = check_status(response, id).await?;
    let body: ApiResponse<T> = response.json().await?;
    Ok(body.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = NotesClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/notes"), "http://localhost:3000/notes");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        let client = NotesClient::new("http://127.0.0.1:1").unwrap();
        let err = client.list().await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }
}

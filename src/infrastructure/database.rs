//! 数据库基础设施

use sqlx::{
    postgres::PgPoolOptions,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Error,
};
use std::{str::FromStr, sync::Arc, time::Duration};
use tracing::info;

use super::config::DatabaseConfig;
use crate::app::notes::repository::{NoteRepository, PgNoteRepository, SqliteNoteRepository};

/// 根据连接串判断的数据库后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    Sqlite,
}

impl DatabaseBackend {
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(DatabaseBackend::Postgres)
        } else if url.starts_with("sqlite:") {
            Some(DatabaseBackend::Sqlite)
        } else {
            None
        }
    }
}

/// 内存库的每个连接都是独立的数据库，只能保留一个常驻连接
fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// 连接串里的密码替换成 `***` 后再写日志
fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            let credentials = &url[scheme_end + 3..at];
            match credentials.find(':') {
                Some(colon) => format!(
                    "{}{}:***{}",
                    &url[..scheme_end + 3],
                    &credentials[..colon],
                    &url[at..]
                ),
                None => url.to_string(),
            }
        }
        _ => url.to_string(),
    }
}

pub struct DatabaseManager {
    backend: DatabaseBackend,
    repository: Arc<dyn NoteRepository>,
}

impl DatabaseManager {
    /// 建立连接池并创建 `notes` 表
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, Error> {
        let backend = DatabaseBackend::from_url(&config.url).ok_or_else(|| {
            Error::Configuration(format!("unsupported database url: {}", redact(&config.url)).into())
        })?;

        info!("Connecting to database: {}", redact(&config.url));

        let acquire_timeout = Duration::from_secs(config.acquire_timeout_seconds);
        let repository: Arc<dyn NoteRepository> = match backend {
            DatabaseBackend::Postgres => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .min_connections(config.min_connections)
                    .acquire_timeout(acquire_timeout)
                    .connect(&config.url)
                    .await?;
                Arc::new(PgNoteRepository::new(pool))
            }
            DatabaseBackend::Sqlite => {
                let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
                let pool_options = if is_in_memory(&config.url) {
                    SqlitePoolOptions::new()
                        .max_connections(1)
                        .min_connections(1)
                        .idle_timeout(None)
                        .max_lifetime(None)
                } else {
                    SqlitePoolOptions::new()
                        .max_connections(config.max_connections)
                        .min_connections(config.min_connections)
                };
                let pool = pool_options
                    .acquire_timeout(acquire_timeout)
                    .connect_with(options)
                    .await?;
                Arc::new(SqliteNoteRepository::new(pool))
            }
        };

        repository.migrate().await?;
        info!("Database ready ({:?})", backend);

        Ok(Self {
            backend,
            repository,
        })
    }

    pub fn backend(&self) -> DatabaseBackend {
        self.backend
    }

    pub fn repository(&self) -> Arc<dyn NoteRepository> {
        Arc::clone(&self.repository)
    }
}

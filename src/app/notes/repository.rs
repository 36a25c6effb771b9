//! 笔记存储层
//!
//! 每个操作只发一条参数化 SQL。列表查询不带 ORDER BY，顺序由数据库决定。

use async_trait::async_trait;
use sqlx::{PgPool, SqlitePool};

use super::model::{Note, NotePayload};

#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// 建表（幂等）
    async fn migrate(&self) -> Result<(), sqlx::Error>;
    async fn ping(&self) -> Result<(), sqlx::Error>;
    async fn list(&self) -> Result<Vec<Note>, sqlx::Error>;
    async fn find(&self, id: i64) -> Result<Option<Note>, sqlx::Error>;
    async fn insert(&self, payload: &NotePayload) -> Result<Note, sqlx::Error>;
    /// 记录不存在时返回 `None`
    async fn update(&self, id: i64, payload: &NotePayload) -> Result<Option<Note>, sqlx::Error>;
    /// 返回被删除的记录，不存在时返回 `None`
    async fn delete(&self, id: i64) -> Result<Option<Note>, sqlx::Error>;
}

pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS notes (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>("SELECT id, title, content, created_at FROM notes")
            .fetch_all(&self.pool)
            .await
    }

    async fn find(&self, id: i64) -> Result<Option<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>("SELECT id, title, content, created_at FROM notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn insert(&self, payload: &NotePayload) -> Result<Note, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            "INSERT INTO notes (title, content) VALUES ($1, $2) RETURNING id, title, content, created_at",
        )
        .bind(&payload.title)
        .bind(&payload.content)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(&self, id: i64, payload: &NotePayload) -> Result<Option<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            "UPDATE notes SET title = $1, content = $2 WHERE id = $3 RETURNING id, title, content, created_at",
        )
        .bind(&payload.title)
        .bind(&payload.content)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: i64) -> Result<Option<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            "DELETE FROM notes WHERE id = $1 RETURNING id, title, content, created_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}

pub struct SqliteNoteRepository {
    pool: SqlitePool,
}

impl SqliteNoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>("SELECT id, title, content, created_at FROM notes")
            .fetch_all(&self.pool)
            .await
    }

    async fn find(&self, id: i64) -> Result<Option<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>("SELECT id, title, content, created_at FROM notes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn insert(&self, payload: &NotePayload) -> Result<Note, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            "INSERT INTO notes (title, content) VALUES (?, ?) RETURNING id, title, content, created_at",
        )
        .bind(&payload.title)
        .bind(&payload.content)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(&self, id: i64, payload: &NotePayload) -> Result<Option<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            "UPDATE notes SET title = ?, content = ? WHERE id = ? RETURNING id, title, content, created_at",
        )
        .bind(&payload.title)
        .bind(&payload.content)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: i64) -> Result<Option<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            "DELETE FROM notes WHERE id = ? RETURNING id, title, content, created_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn sqlite_repository() -> SqliteNoteRepository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let repository = SqliteNoteRepository::new(pool);
        repository.migrate().await.unwrap();
        repository
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let repository = sqlite_repository().await;

        let first = repository.insert(&NotePayload::new("A", "B")).await.unwrap();
        let second = repository.insert(&NotePayload::new("C", "D")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.title, "A");
        assert_eq!(first.content, "B");
        assert!(first.created_at <= chrono::Utc::now());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repository = sqlite_repository().await;
        for title in ["one", "two", "three"] {
            repository.insert(&NotePayload::new(title, "x")).await.unwrap();
        }

        let titles: Vec<String> = repository
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|note| note.title)
            .collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created_at() {
        let repository = sqlite_repository().await;
        let created = repository.insert(&NotePayload::new("A", "B")).await.unwrap();

        let updated = repository
            .update(created.id, &NotePayload::new("A2", "B2"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "A2");
        assert_eq!(updated.content, "B2");
    }

    #[tokio::test]
    async fn test_missing_rows_return_none() {
        let repository = sqlite_repository().await;

        assert!(repository.find(99).await.unwrap().is_none());
        assert!(repository
            .update(99, &NotePayload::new("t", "c"))
            .await
            .unwrap()
            .is_none());
        assert!(repository.delete(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_row() {
        let repository = sqlite_repository().await;
        let created = repository.insert(&NotePayload::new("A", "B")).await.unwrap();

        let deleted = repository.delete(created.id).await.unwrap().unwrap();
        assert_eq!(deleted, created);
        assert!(repository.find(created.id).await.unwrap().is_none());
    }
}

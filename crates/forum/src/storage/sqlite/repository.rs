//! SQLite repository implementation.
//!
//! Implements `forum_core::storage::PostRepository` using SQLite. The
//! `id` column is `INTEGER PRIMARY KEY AUTOINCREMENT`, which gives the
//! store-assigned monotonic identifiers the listing order relies on.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_rusqlite::Connection;

use forum_core::post::{NewPost, Post};
use forum_core::storage::{PostRepository, RepositoryError, Result};

use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Maps driver errors surfaced by `tokio_rusqlite` to repository errors.
fn map_sqlite_error(e: tokio_rusqlite::Error) -> RepositoryError {
    match e {
        tokio_rusqlite::Error::ConnectionClosed => {
            RepositoryError::Unavailable("connection closed".to_string())
        }
        other => RepositoryError::QueryFailed(other.to_string()),
    }
}

/// Converts a row into a `Post`; column order matches the SELECT constants.
fn row_to_post(row: &rusqlite::Row<'_>) -> rusqlite::Result<Post> {
    let created_at: String = row.get(5)?;
    let created_at = created_at
        .parse::<DateTime<Utc>>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e)))?;

    Ok(Post {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        published: row.get::<_, i64>(3)? != 0,
        author_id: row.get(4)?,
        created_at,
    })
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_sqlite_error)
    }
}

#[async_trait]
impl PostRepository for SqliteRepository {
    async fn insert(&self, post: NewPost) -> Result<Post> {
        let title = post.title().to_string();
        let content = post.content().to_string();
        let published = post.published();
        let author_id = post.author_id();
        let created_at = Utc::now();

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_POST,
                    rusqlite::params![
                        title,
                        content,
                        published as i64,
                        author_id,
                        created_at.to_rfc3339(),
                    ],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(map_sqlite_error)?;

        Ok(Post {
            id,
            title: post.title().to_string(),
            content: post.content().to_string(),
            published,
            author_id,
            created_at,
        })
    }

    async fn list_published(&self) -> Result<Vec<Post>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_PUBLISHED).map_err(wrap_err)?;
                let posts = stmt
                    .query_map([], row_to_post)
                    .map_err(wrap_err)?
                    .collect::<rusqlite::Result<Vec<Post>>>()
                    .map_err(wrap_err)?;
                Ok(posts)
            })
            .await
            .map_err(map_sqlite_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_POST_BY_ID).map_err(wrap_err)?;
                let mut rows = stmt
                    .query_map([id], row_to_post)
                    .map_err(wrap_err)?
                    .collect::<rusqlite::Result<Vec<Post>>>()
                    .map_err(wrap_err)?;
                Ok(rows.pop())
            })
            .await
            .map_err(map_sqlite_error)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .call(move |conn| {
                conn.execute(schema::DELETE_POST, [id]).map_err(wrap_err)
            })
            .await
            .map_err(map_sqlite_error)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound { id });
        }
        Ok(())
    }
}

//! The `TodoStore` adapter: a thin CRUD layer over one SQLite table.

use std::path::Path;

use rusqlite::{params, OptionalExtension};
use tokio_rusqlite::Connection;

use crate::error::StoreError;
use crate::types::{NewTodo, Todo, TodoPatch};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    completed INTEGER DEFAULT 0
)";

/// Persistent store for todo items.
///
/// Owns the database connection; clone-free by design — wrap it in an `Arc`
/// to share it across request handlers.
pub struct TodoStore {
    conn: Connection,
}

impl TodoStore {
    /// Open (or create) the database at `path` and ensure the todos table
    /// exists.
    ///
    /// Table creation is best-effort: a failure is logged and startup
    /// continues, so a database that is readable but not writable still
    /// serves reads. Failing to open the connection at all is a hard error.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref().to_owned()).await?;
        Ok(Self::init(conn).await)
    }

    /// Open an in-memory database. Used by tests.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().await?;
        Ok(Self::init(conn).await)
    }

    async fn init(conn: Connection) -> Self {
        let created = conn
            .call(|conn| {
                conn.execute(CREATE_TABLE, [])?;
                Ok(())
            })
            .await;
        if let Err(e) = created {
            tracing::warn!(error = %e, "could not ensure todos table exists, continuing");
        }
        Self { conn }
    }

    /// Fetch every todo. No ordering is guaranteed.
    pub async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare("SELECT id, title, completed FROM todos")?;
                let todos = stmt
                    .query_map([], row_to_todo)?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(todos)
            })
            .await?;
        Ok(todos)
    }

    /// Fetch a single todo by id, `None` if no such row exists.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        let todo = self
            .conn
            .call(move |conn| {
                let todo = conn
                    .query_row(
                        "SELECT id, title, completed FROM todos WHERE id = ?1",
                        params![id],
                        row_to_todo,
                    )
                    .optional()?;
                Ok(todo)
            })
            .await?;
        Ok(todo)
    }

    /// Insert a new todo and return it with its generated id.
    pub async fn create(&self, new: NewTodo) -> Result<Todo, StoreError> {
        if new.title.is_empty() {
            return Err(StoreError::InvalidTitle);
        }
        let NewTodo { title, completed } = new;
        let todo = self
            .conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO todos (title, completed) VALUES (?1, ?2)",
                    params![title, completed as i64],
                )?;
                let id = conn.last_insert_rowid();
                Ok(Todo {
                    id,
                    title,
                    completed,
                })
            })
            .await?;
        Ok(todo)
    }

    /// Merge `patch` over the existing todo and persist the result.
    ///
    /// Read-modify-write: the row is read first and fields absent from the
    /// patch keep their persisted values. Returns `None` without writing if
    /// the id does not exist.
    pub async fn update(&self, id: i64, patch: TodoPatch) -> Result<Option<Todo>, StoreError> {
        if id <= 0 {
            return Err(StoreError::InvalidId);
        }
        let updated = self
            .conn
            .call(move |conn| {
                let existing = conn
                    .query_row(
                        "SELECT id, title, completed FROM todos WHERE id = ?1",
                        params![id],
                        row_to_todo,
                    )
                    .optional()?;
                let Some(existing) = existing else {
                    return Ok(None);
                };
                let title = patch.title.unwrap_or(existing.title);
                let completed = patch.completed.unwrap_or(existing.completed);
                conn.execute(
                    "UPDATE todos SET title = ?1, completed = ?2 WHERE id = ?3",
                    params![title, completed as i64, id],
                )?;
                Ok(Some(Todo {
                    id,
                    title,
                    completed,
                }))
            })
            .await?;
        Ok(updated)
    }

    /// Delete by id unconditionally. Deleting an absent id is not an error;
    /// the store does not report whether the row existed.
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.conn
            .call(move |conn| {
                conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;
                Ok(())
            })
            .await?;
        Ok(())
    }
}

fn row_to_todo(row: &rusqlite::Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        completed: row.get::<_, i64>(2)? != 0,
    })
}

//! SQLite persistence for the todo service.
//!
//! # Design
//! - `TodoStore` is an explicit adapter object: it owns the database
//!   connection and is constructed once (per process or per test), then
//!   injected into whatever needs it. There is no process-wide handle.
//! - All statements go through a single `tokio_rusqlite::Connection`, which
//!   serializes them on a background thread; no application-level locking.
//! - "Not found" is `None`, never an error. Only driver failures and
//!   shape errors from direct callers surface as `StoreError`.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{NewTodo, Todo, TodoPatch};

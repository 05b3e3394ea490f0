//! Domain types for todo items.
//!
//! # Design
//! `Todo` is the persisted record and the wire shape; `NewTodo` and
//! `TodoPatch` are the inputs to `create` and `update`. The HTTP layer
//! builds the input types from validated JSON rather than deserializing
//! request bodies directly, so these carry no serde constraints beyond
//! what the response needs.

use serde::{Deserialize, Serialize};

/// A single persisted todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Input for creating a new todo. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
}

/// Partial update for an existing todo. `None` fields keep their persisted
/// value; the merge happens in the store (read-modify-write).
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

//! HTTP surface for the todo service.
//!
//! # Design
//! - The router owns a shared `TodoStore` through axum state; handlers hold
//!   no state across requests.
//! - Path ids arrive as raw strings and go through `validate::parse_id`, so
//!   a malformed segment is a 400 shaped by us rather than an axum
//!   rejection.
//! - Both the plain fallback and the method-not-allowed fallback resolve to
//!   the same generic 404 body: any unmatched (method, path) pair behaves
//!   identically.

pub mod handlers;
pub mod validate;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use todo_store::TodoStore;

/// The store as shared by every request handler.
pub type SharedStore = Arc<TodoStore>;

pub fn app(store: TodoStore) -> Router {
    let store: SharedStore = Arc::new(store);
    Router::new()
        .route("/qw", get(handlers::health))
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .fallback(handlers::fallback)
        .method_not_allowed_fallback(handlers::fallback)
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

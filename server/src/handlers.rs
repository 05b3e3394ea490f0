//! Request handlers, one per endpoint.
//!
//! Each handler runs the same pipeline: validate input, call into the
//! store, shape the result (or its absence) into a JSON response. Store
//! failures become 500s here rather than propagating out of the request
//! pipeline; absence is mapped to 404 at this layer only.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use todo_store::StoreError;

use crate::validate;
use crate::SharedStore;

/// Response body for GET /qw.
#[derive(Debug, Serialize)]
pub struct HealthBody {
    ok: bool,
}

/// Generic error response body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Response body for schema validation failures: every violation in one
/// round trip.
#[derive(Debug, Serialize)]
struct ValidationFailedBody {
    error: &'static str,
    details: Vec<String>,
}

fn error(status: StatusCode, message: &'static str) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

fn invalid_id() -> Response {
    error(StatusCode::BAD_REQUEST, "Invalid id")
}

fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Not found")
}

fn validation_failed(details: Vec<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ValidationFailedBody {
            error: "Validation failed",
            details,
        }),
    )
        .into_response()
}

fn internal_error(err: StoreError) -> Response {
    tracing::error!(error = %err, "store operation failed");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { ok: true })
}

pub async fn list_todos(State(store): State<SharedStore>) -> Response {
    match store.list_all().await {
        Ok(todos) => Json(todos).into_response(),
        Err(err) => internal_error(err),
    }
}

pub async fn get_todo(State(store): State<SharedStore>, Path(raw_id): Path<String>) -> Response {
    let Some(id) = validate::parse_id(&raw_id) else {
        return invalid_id();
    };
    match store.get_by_id(id).await {
        Ok(Some(todo)) => Json(todo).into_response(),
        Ok(None) => not_found(),
        Err(err) => internal_error(err),
    }
}

pub async fn create_todo(State(store): State<SharedStore>, body: String) -> Response {
    let Ok(value) = serde_json::from_str::<Value>(&body) else {
        return error(StatusCode::BAD_REQUEST, "Invalid JSON");
    };
    let new = match validate::validate_create(&value) {
        Ok(new) => new,
        Err(details) => return validation_failed(details),
    };
    match store.create(new).await {
        Ok(todo) => (StatusCode::CREATED, Json(todo)).into_response(),
        Err(err) => internal_error(err),
    }
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
    body: String,
) -> Response {
    let Some(id) = validate::parse_id(&raw_id) else {
        return invalid_id();
    };
    // Unlike create, an unparseable body means "no fields supplied" here;
    // the update schema then rejects it for having no keys.
    let value =
        serde_json::from_str::<Value>(&body).unwrap_or_else(|_| Value::Object(Default::default()));
    let patch = match validate::validate_update(&value) {
        Ok(patch) => patch,
        Err(details) => return validation_failed(details),
    };
    match store.update(id, patch).await {
        Ok(Some(todo)) => Json(todo).into_response(),
        Ok(None) => not_found(),
        Err(err) => internal_error(err),
    }
}

pub async fn delete_todo(State(store): State<SharedStore>, Path(raw_id): Path<String>) -> Response {
    let Some(id) = validate::parse_id(&raw_id) else {
        return invalid_id();
    };
    // 204 regardless of whether the row existed; the store does not say.
    match store.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => internal_error(err),
    }
}

/// Catch-all for unmatched paths and mismatched methods alike.
pub async fn fallback() -> Response {
    not_found()
}

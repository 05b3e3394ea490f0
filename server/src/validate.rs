//! Input validation for the HTTP layer.
//!
//! # Design
//! One typed function per schema, each returning either the normalized
//! value or the full list of human-readable violations. Collection is
//! never fail-fast: a client sees every problem in one round trip.
//! Messages quote the offending field name so callers can match on it.

use serde_json::Value;
use todo_store::{NewTodo, TodoPatch};

const TITLE_MAX: usize = 255;

/// Parse a path segment as a todo id: a strictly positive integer.
/// Anything else (non-numeric, zero, negative, fractional) is rejected.
pub fn parse_id(raw: &str) -> Option<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => None,
    }
}

/// Validate a creation payload: required `title` (string, 1–255 chars),
/// optional `completed` (bool, defaults to false), no other fields.
pub fn validate_create(value: &Value) -> Result<NewTodo, Vec<String>> {
    let Some(obj) = value.as_object() else {
        return Err(vec!["\"value\" must be of type object".to_string()]);
    };
    let mut details = Vec::new();

    let title = match obj.get("title") {
        None => {
            details.push("\"title\" is required".to_string());
            None
        }
        Some(value) => check_title(value, &mut details),
    };
    let completed = match obj.get("completed") {
        None => false,
        Some(value) => check_completed(value, &mut details).unwrap_or(false),
    };
    reject_unknown_fields(obj, &mut details);

    match title {
        Some(title) if details.is_empty() => Ok(NewTodo { title, completed }),
        _ => Err(details),
    }
}

/// Validate an update payload: `title` and `completed` both optional with
/// the same constraints as creation, but at least one must be present.
pub fn validate_update(value: &Value) -> Result<TodoPatch, Vec<String>> {
    let Some(obj) = value.as_object() else {
        return Err(vec!["\"value\" must be of type object".to_string()]);
    };
    let mut details = Vec::new();

    if obj.is_empty() {
        details.push("\"value\" must have at least 1 key".to_string());
    }
    let title = obj.get("title").and_then(|v| check_title(v, &mut details));
    let completed = obj
        .get("completed")
        .and_then(|v| check_completed(v, &mut details));
    reject_unknown_fields(obj, &mut details);

    if details.is_empty() {
        Ok(TodoPatch { title, completed })
    } else {
        Err(details)
    }
}

fn check_title(value: &Value, details: &mut Vec<String>) -> Option<String> {
    let Some(s) = value.as_str() else {
        details.push("\"title\" must be a string".to_string());
        return None;
    };
    if s.is_empty() {
        details.push("\"title\" is not allowed to be empty".to_string());
        return None;
    }
    if s.chars().count() > TITLE_MAX {
        details.push(format!(
            "\"title\" length must be less than or equal to {TITLE_MAX} characters long"
        ));
        return None;
    }
    Some(s.to_string())
}

fn check_completed(value: &Value, details: &mut Vec<String>) -> Option<bool> {
    match value.as_bool() {
        Some(b) => Some(b),
        None => {
            details.push("\"completed\" must be a boolean".to_string());
            None
        }
    }
}

fn reject_unknown_fields(obj: &serde_json::Map<String, Value>, details: &mut Vec<String>) {
    for key in obj.keys() {
        if key != "title" && key != "completed" {
            details.push(format!("\"{key}\" is not allowed"));
        }
    }
}

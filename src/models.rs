//! Frontend Models
//!
//! Data structures matching backend entities.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Todo priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TodoPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TodoPriority {
    pub const ALL: [TodoPriority; 4] = [
        TodoPriority::Low,
        TodoPriority::Medium,
        TodoPriority::High,
        TodoPriority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoPriority::Low => "low",
            TodoPriority::Medium => "medium",
            TodoPriority::High => "high",
            TodoPriority::Urgent => "urgent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(TodoPriority::Low),
            "medium" => Some(TodoPriority::Medium),
            "high" => Some(TodoPriority::High),
            "urgent" => Some(TodoPriority::Urgent),
            _ => None,
        }
    }
}

/// Todo workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 4] = [
        TodoStatus::Pending,
        TodoStatus::InProgress,
        TodoStatus::Completed,
        TodoStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::InProgress => "in_progress",
            TodoStatus::Completed => "completed",
            TodoStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TodoStatus::Pending),
            "in_progress" => Some(TodoStatus::InProgress),
            "completed" => Some(TodoStatus::Completed),
            "cancelled" => Some(TodoStatus::Cancelled),
            _ => None,
        }
    }
}

/// Todo data structure (matches backend `TodoPublic`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TodoPriority,
    #[serde(default)]
    pub status: TodoStatus,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub owner_id: Option<Uuid>,
}

/// One page of todos plus the total number of matching todos
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TodosPage {
    pub data: Vec<Todo>,
    pub count: usize,
}

/// Payload for creating a todo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoCreate {
    pub title: String,
    pub description: Option<String>,
    pub priority: TodoPriority,
    pub status: TodoStatus,
    pub due_date: Option<NaiveDateTime>,
}

/// Partial update; only set fields are sent
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TodoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `Some(None)` clears the description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TodoPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
    /// `Some(None)` clears the due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<NaiveDateTime>>,
}

impl TodoUpdate {
    pub fn is_empty(&self) -> bool {
        *self == TodoUpdate::default()
    }
}

/// Generic backend acknowledgement
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Accepts naive ISO timestamps (`2025-01-31T09:00:00.123456`) as well as
/// RFC 3339 timestamps carrying an offset, which are normalized to UTC.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_datetime(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {}", s))),
    }
}

pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    s.parse::<NaiveDateTime>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_todo() {
        let json = r#"{
            "id": "6f1c2d3e-4b5a-4c7d-8e9f-0a1b2c3d4e5f",
            "title": "Write report",
            "description": null,
            "priority": "urgent",
            "status": "in_progress",
            "due_date": "2025-03-01T00:00:00",
            "created_at": "2025-02-01T08:30:00.123456",
            "updated_at": "2025-02-01T08:30:00.123456",
            "completed_at": null,
            "owner_id": "0e9d8c7b-6a5f-4e3d-2c1b-0a9f8e7d6c5b"
        }"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.title, "Write report");
        assert_eq!(todo.priority, TodoPriority::Urgent);
        assert_eq!(todo.status, TodoStatus::InProgress);
        assert!(todo.description.is_none());
        assert_eq!(todo.due_date.unwrap().to_string(), "2025-03-01 00:00:00");
    }

    #[test]
    fn test_rfc3339_due_date_is_normalized() {
        let dt = parse_datetime("2025-03-01T02:00:00+02:00").unwrap();
        assert_eq!(dt.to_string(), "2025-03-01 00:00:00");
        assert!(parse_datetime("not a date").is_none());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"id": "6f1c2d3e-4b5a-4c7d-8e9f-0a1b2c3d4e5f", "title": "x", "status": "archived"}"#;
        assert!(serde_json::from_str::<Todo>(json).is_err());
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let update = TodoUpdate {
            status: Some(TodoStatus::Completed),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"status":"completed"}"#);

        let clear = TodoUpdate {
            due_date: Some(None),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&clear).unwrap(), r#"{"due_date":null}"#);
        assert!(TodoUpdate::default().is_empty());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_enum_string_forms() {
        for p in TodoPriority::ALL {
            assert_eq!(TodoPriority::parse(p.as_str()), Some(p));
        }
        for s in TodoStatus::ALL {
            assert_eq!(TodoStatus::parse(s.as_str()), Some(s));
        }
        assert_eq!(TodoStatus::parse("done"), None);
    }
}

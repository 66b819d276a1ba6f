//! Data Models
//!
//! Data structures matching the todo/user service wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile (owned by the user service)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Free-text note embedded in a todo, append-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Todo priority, serialized lowercase on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Sidebar display order
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Lenient parse for form values; unknown input falls back to medium
    pub fn from_value(value: &str) -> Priority {
        match value {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

/// Todo record (owned by the todo service, cached client-side)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "assignedUsers", default)]
    pub assigned_users: Vec<User>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Active list constraints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub priority: Vec<Priority>,
    pub tags: Vec<String>,
    pub search: String,
}

/// Partial filter change; `None` fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub priority: Option<Vec<Priority>>,
    pub tags: Option<Vec<String>>,
    pub search: Option<String>,
}

/// Server-derived pagination cursor, 1-based
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

/// Per-request state machine for todo-store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_deserializes_from_service_json() {
        let json = r#"{
            "_id": "t1",
            "title": "Buy milk",
            "description": "2 liters",
            "priority": "high",
            "completed": false,
            "userId": "u1",
            "tags": ["errands", "home"],
            "assignedUsers": [],
            "notes": [{"content": "skimmed", "createdAt": "2024-05-01T10:00:00Z"}],
            "createdAt": "2024-05-01T09:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        }"#;

        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, "t1");
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(todo.tags, vec!["errands", "home"]);
        assert_eq!(todo.notes.len(), 1);
    }

    #[test]
    fn todo_tolerates_missing_optional_fields() {
        let json = r#"{
            "_id": "t2",
            "title": "Call dentist",
            "priority": "medium",
            "completed": true,
            "userId": "u1"
        }"#;

        let todo: Todo = serde_json::from_str(json).unwrap();
        assert!(todo.description.is_none());
        assert!(todo.tags.is_empty());
        assert!(todo.assigned_users.is_empty());
        assert!(todo.notes.is_empty());
    }

    #[test]
    fn priority_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), r#""high""#);
        let parsed: Priority = serde_json::from_str(r#""low""#).unwrap();
        assert_eq!(parsed, Priority::Low);
        assert_eq!(Priority::from_value("nonsense"), Priority::Medium);
    }
}

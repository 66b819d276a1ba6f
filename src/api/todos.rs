//! Todo Service Bindings
//!
//! List/search/paginate, tag enumeration, CRUD, note append, and CSV export.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use super::{api_base, check, ApiError};
use crate::models::{Filters, Priority, Todo, User};

/// Everything that must not appear raw inside a query value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

// ========================
// Wire Types
// ========================

/// One page of the filtered todo list
#[derive(Debug, Deserialize)]
pub struct TodoPage {
    pub todos: Vec<Todo>,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

#[derive(Deserialize)]
struct CreatedTodo {
    todo: Todo,
}

/// Payload for creating a todo
#[derive(Debug, Serialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub tags: Vec<String>,
    #[serde(rename = "assignedUsers")]
    pub assigned_users: Vec<User>,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Partial update; only `Some` fields reach the wire
#[derive(Debug, Default, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "assignedUsers", skip_serializing_if = "Option::is_none")]
    pub assigned_users: Option<Vec<User>>,
}

#[derive(Serialize)]
struct NoteBody<'a> {
    content: &'a str,
}

// ========================
// Operations
// ========================

/// Query string for the list endpoint; multi-select filters are comma-joined
fn list_query(user_id: &str, page: u32, filters: &Filters) -> String {
    let priority = filters
        .priority
        .iter()
        .map(|p| p.as_str().to_string())
        .collect::<Vec<_>>()
        .join(",");
    let tags = filters
        .tags
        .iter()
        .map(|tag| encode(tag))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "userId={}&page={}&priority={}&tags={}&search={}",
        encode(user_id),
        page,
        priority,
        tags,
        encode(&filters.search)
    )
}

pub async fn list_todos(user_id: &str, page: u32, filters: &Filters) -> Result<TodoPage, ApiError> {
    let url = format!("{}/todos?{}", api_base(), list_query(user_id, page, filters));
    let response = check(reqwest::get(&url).await?).await?;
    Ok(response.json().await?)
}

pub async fn list_tags(user_id: &str) -> Result<Vec<String>, ApiError> {
    let url = format!("{}/todos/tags?userId={}", api_base(), encode(user_id));
    let response = check(reqwest::get(&url).await?).await?;
    Ok(response.json().await?)
}

pub async fn create_todo(todo: &NewTodo) -> Result<Todo, ApiError> {
    let url = format!("{}/todos", api_base());
    let response = check(
        reqwest::Client::new()
            .post(&url)
            .json(todo)
            .send()
            .await?,
    )
    .await?;
    let created: CreatedTodo = response.json().await?;
    Ok(created.todo)
}

pub async fn update_todo(id: &str, patch: &TodoPatch) -> Result<Todo, ApiError> {
    let url = format!("{}/todos/{}", api_base(), id);
    let response = check(
        reqwest::Client::new()
            .put(&url)
            .json(patch)
            .send()
            .await?,
    )
    .await?;
    Ok(response.json().await?)
}

pub async fn delete_todo(id: &str) -> Result<(), ApiError> {
    let url = format!("{}/todos/{}", api_base(), id);
    check(reqwest::Client::new().delete(&url).send().await?).await?;
    Ok(())
}

pub async fn add_note(todo_id: &str, content: &str) -> Result<Todo, ApiError> {
    let url = format!("{}/todos/{}/notes", api_base(), todo_id);
    let response = check(
        reqwest::Client::new()
            .post(&url)
            .json(&NoteBody { content })
            .send()
            .await?,
    )
    .await?;
    Ok(response.json().await?)
}

/// CSV payload for all of a user's todos; the caller wraps it for download
pub async fn export_todos(user_id: &str) -> Result<Vec<u8>, ApiError> {
    let url = format!("{}/todos/export?userId={}", api_base(), encode(user_id));
    let response = check(
        reqwest::Client::new()
            .get(&url)
            .header(reqwest::header::ACCEPT, "text/csv")
            .send()
            .await?,
    )
    .await?;
    Ok(response.bytes().await?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_joins_filters() {
        let filters = Filters {
            priority: vec![Priority::High, Priority::Low],
            tags: vec!["home".to_string(), "errands".to_string()],
            search: String::new(),
        };
        assert_eq!(
            list_query("u1", 2, &filters),
            "userId=u1&page=2&priority=high,low&tags=home,errands&search="
        );
    }

    #[test]
    fn list_query_with_single_priority_requests_given_page() {
        let filters = Filters {
            priority: vec![Priority::High],
            ..Filters::default()
        };
        assert_eq!(
            list_query("u1", 1, &filters),
            "userId=u1&page=1&priority=high&tags=&search="
        );
    }

    #[test]
    fn list_query_escapes_search_text() {
        let filters = Filters {
            search: "milk & eggs".to_string(),
            ..Filters::default()
        };
        assert_eq!(
            list_query("u1", 1, &filters),
            "userId=u1&page=1&priority=&tags=&search=milk%20%26%20eggs"
        );
    }

    #[test]
    fn todo_patch_serializes_only_set_fields() {
        let patch = TodoPatch {
            completed: Some(true),
            ..TodoPatch::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"completed":true}"#
        );
    }
}

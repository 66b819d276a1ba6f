//! Store Intents
//!
//! Async intent handlers bridging the stores and the REST bindings. Every
//! mutation round-trips through the todo service before the cache changes;
//! there is no optimistic write and no retry. Filter and page changes refetch
//! in the same handler so call sites cannot forget the follow-up fetch.

use leptos::prelude::*;

use crate::api::{self, ApiError, NewTodo, TodoPatch};
use crate::download;
use crate::models::{FilterPatch, RequestStatus, User};
use crate::store::{TodoStore, UserStateStoreFields, UserStore};

fn fail(todos: TodoStore, err: ApiError) {
    let mut state = todos.write();
    state.status = RequestStatus::Failed;
    state.error = Some(err.to_string());
}

/// Fetch the current page for the active user. No-op without an active user.
/// Overlapping calls are fenced; only the newest response lands.
pub async fn load_todos(todos: TodoStore, users: UserStore) {
    let Some(user) = users.current_user().get_untracked() else {
        return;
    };

    let (token, page, filters) = {
        let mut state = todos.write();
        state.status = RequestStatus::Loading;
        let token = state.begin_fetch();
        (token, state.pagination.current_page, state.filters.clone())
    };

    match api::list_todos(&user.id, page, &filters).await {
        Ok(page_data) => {
            let mut state = todos.write();
            if !state.is_current(token) {
                return;
            }
            state.status = RequestStatus::Succeeded;
            state.apply_page(page_data.todos, page_data.total_pages);
        }
        Err(err) => {
            let mut state = todos.write();
            if !state.is_current(token) {
                return;
            }
            state.status = RequestStatus::Failed;
            state.error = Some(err.to_string());
        }
    }
}

/// Refresh the distinct tag set for a user; failures are console-only
pub async fn load_tags(todos: TodoStore, user_id: String) {
    match api::list_tags(&user_id).await {
        Ok(tags) => todos.write().set_tags(tags),
        Err(err) => {
            web_sys::console::error_1(&format!("failed to fetch tags: {err}").into());
        }
    }
}

pub async fn submit_new_todo(todos: TodoStore, todo: NewTodo) {
    todos.write().status = RequestStatus::Loading;
    match api::create_todo(&todo).await {
        Ok(created) => {
            let mut state = todos.write();
            state.status = RequestStatus::Succeeded;
            state.apply_created(created);
        }
        Err(err) => fail(todos, err),
    }
}

pub async fn save_todo(todos: TodoStore, id: String, patch: TodoPatch) {
    todos.write().status = RequestStatus::Loading;
    match api::update_todo(&id, &patch).await {
        Ok(updated) => {
            let mut state = todos.write();
            state.status = RequestStatus::Succeeded;
            state.apply_updated(updated);
        }
        Err(err) => fail(todos, err),
    }
}

/// Delete a todo. The view confirms intent before dispatching this.
pub async fn remove_todo(todos: TodoStore, id: String) {
    todos.write().status = RequestStatus::Loading;
    match api::delete_todo(&id).await {
        Ok(()) => {
            let mut state = todos.write();
            state.status = RequestStatus::Succeeded;
            state.apply_deleted(&id);
        }
        Err(err) => fail(todos, err),
    }
}

pub async fn append_note(todos: TodoStore, todo_id: String, content: String) {
    todos.write().status = RequestStatus::Loading;
    match api::add_note(&todo_id, &content).await {
        Ok(updated) => {
            let mut state = todos.write();
            state.status = RequestStatus::Succeeded;
            state.apply_note_added(updated);
        }
        Err(err) => fail(todos, err),
    }
}

/// Export the user's todos as CSV and hand the payload to the browser as a
/// file download. Failures never touch cached state.
pub async fn export_csv(user_id: String) {
    match api::export_todos(&user_id).await {
        Ok(bytes) => {
            if let Err(err) = download::save_csv(&bytes, "todos.csv") {
                web_sys::console::error_1(&format!("download failed: {err:?}").into());
            }
        }
        Err(err) => {
            web_sys::console::error_1(&format!("failed to export todos: {err}").into());
        }
    }
}

/// Merge a filter patch (resetting to page 1) and refetch in one intent
pub async fn apply_filters(todos: TodoStore, users: UserStore, patch: FilterPatch) {
    todos.write().set_filters(patch);
    load_todos(todos, users).await;
}

/// Move the pagination cursor and refetch
pub async fn change_page(todos: TodoStore, users: UserStore, page: u32) {
    todos.write().set_page(page);
    load_todos(todos, users).await;
}

/// Fetch the user list; on failure the error is only logged
pub async fn load_users(users: UserStore) {
    match api::list_users().await {
        Ok(list) => users.write().apply_users(list),
        Err(err) => {
            web_sys::console::error_1(&format!("failed to fetch users: {err}").into());
        }
    }
}

/// Switch the active profile; tag filters are user-scoped, so they reset.
/// The app effect watching the active user reloads todos and tags.
pub fn switch_user(todos: TodoStore, users: UserStore, user: User) {
    todos.write().reset_tag_filter();
    users.write().set_current_user(user);
}

//! Application State Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Both stores are
//! created by `App` and handed to components through context, never as
//! process-wide globals. The synchronous transition methods below carry every
//! cache invariant; `actions` drives them after service round-trips.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{FilterPatch, Filters, Pagination, RequestStatus, Todo, User};

/// Todo cache plus list view state
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Current page of todos for the active user
    pub todos: Vec<Todo>,
    /// Distinct tag set for the active user
    pub tags: Vec<String>,
    pub filters: Filters,
    pub pagination: Pagination,
    pub status: RequestStatus,
    /// Message retained from the most recent failed mutation
    pub error: Option<String>,
    /// Fence for overlapping list fetches; newest token wins
    pub fetch_seq: u64,
}

impl TodoState {
    /// Merge a partial filter change. Any change resets pagination to page 1.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        if let Some(priority) = patch.priority {
            self.filters.priority = priority;
        }
        if let Some(tags) = patch.tags {
            self.filters.tags = tags;
        }
        if let Some(search) = patch.search {
            self.filters.search = search;
        }
        self.pagination.current_page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.pagination.current_page = page;
    }

    /// Tags are user-scoped; invoked when the active user changes
    pub fn reset_tag_filter(&mut self) {
        self.filters.tags.clear();
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Claim the next fetch token. Responses carrying an older token are stale.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetch_seq
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.fetch_seq == token
    }

    /// Replace the cached page. Keeps 1 <= current_page <= total_pages even
    /// when the server reports fewer pages than the cursor position.
    pub fn apply_page(&mut self, todos: Vec<Todo>, total_pages: u32) {
        self.todos = todos;
        self.pagination.total_pages = total_pages.max(1);
        if self.pagination.current_page > self.pagination.total_pages {
            self.pagination.current_page = self.pagination.total_pages;
        }
    }

    /// Prepend a confirmed new todo and union its tags into the tag cache
    pub fn apply_created(&mut self, todo: Todo) {
        self.merge_tags(&todo.tags);
        self.todos.insert(0, todo);
    }

    /// Replace the entry with matching identity; anything else is untouched
    pub fn apply_updated(&mut self, todo: Todo) {
        self.merge_tags(&todo.tags);
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == todo.id) {
            *slot = todo;
        }
    }

    /// Remove the entry with matching identity; absent identity is a no-op
    pub fn apply_deleted(&mut self, id: &str) {
        self.todos.retain(|todo| todo.id != id);
    }

    /// Swap in the server representation carrying the appended note
    pub fn apply_note_added(&mut self, todo: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == todo.id) {
            *slot = todo;
        }
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
    }

    fn merge_tags(&mut self, incoming: &[String]) {
        for tag in incoming {
            if !self.tags.contains(tag) {
                self.tags.push(tag.clone());
            }
        }
    }
}

/// User list and active profile
#[derive(Clone, Debug, Default, Store)]
pub struct UserState {
    pub users: Vec<User>,
    pub current_user: Option<User>,
}

impl UserState {
    /// Replace the user list. An already-active user survives a refetch as
    /// long as it is still listed (matched by id, entry refreshed); otherwise
    /// the first returned user becomes active.
    pub fn apply_users(&mut self, users: Vec<User>) {
        let kept = self
            .current_user
            .as_ref()
            .and_then(|current| users.iter().find(|user| user.id == current.id).cloned());
        self.current_user = kept.or_else(|| users.first().cloned());
        self.users = users;
    }

    pub fn set_current_user(&mut self, user: User) {
        self.current_user = Some(user);
    }
}

pub type TodoStore = Store<TodoState>;
pub type UserStore = Store<UserState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Get the user store from context
pub fn use_user_store() -> UserStore {
    expect_context::<UserStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::{DateTime, Utc};

    fn make_todo(id: &str, tags: &[&str]) -> Todo {
        Todo {
            id: id.to_string(),
            title: format!("Todo {}", id),
            description: None,
            priority: Priority::Medium,
            completed: false,
            user_id: "u1".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            assigned_users: Vec::new(),
            notes: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn make_user(id: &str) -> User {
        User {
            id: id.to_string(),
            username: format!("user{}", id),
            name: format!("User {}", id),
            email: format!("{}@example.com", id),
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
        }
    }

    #[test]
    fn set_filters_resets_page() {
        let mut state = TodoState::default();
        state.pagination.current_page = 4;
        state.set_filters(FilterPatch {
            priority: Some(vec![Priority::High]),
            ..FilterPatch::default()
        });
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.filters.priority, vec![Priority::High]);
    }

    #[test]
    fn set_filters_keeps_unpatched_fields() {
        let mut state = TodoState::default();
        state.filters.search = "milk".to_string();
        state.set_filters(FilterPatch {
            tags: Some(vec!["home".to_string()]),
            ..FilterPatch::default()
        });
        assert_eq!(state.filters.search, "milk");
        assert_eq!(state.filters.tags, vec!["home"]);
    }

    #[test]
    fn apply_page_sets_list_and_total() {
        let mut state = TodoState::default();
        state.set_filters(FilterPatch {
            priority: Some(vec![Priority::High]),
            ..FilterPatch::default()
        });
        state.apply_page(vec![make_todo("a", &[])], 3);
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.pagination.total_pages, 3);
        assert_eq!(state.todos.len(), 1);
    }

    #[test]
    fn apply_page_clamps_cursor_to_shrunk_total() {
        let mut state = TodoState::default();
        state.pagination.current_page = 5;
        state.apply_page(Vec::new(), 2);
        assert_eq!(state.pagination.current_page, 2);

        state.apply_page(Vec::new(), 0);
        assert_eq!(state.pagination.total_pages, 1);
        assert_eq!(state.pagination.current_page, 1);
    }

    #[test]
    fn apply_created_prepends_and_unions_tags() {
        let mut state = TodoState::default();
        state.todos = vec![make_todo("old", &[])];
        state.tags = vec!["home".to_string()];

        state.apply_created(make_todo("new", &["home", "work"]));

        assert_eq!(state.todos.len(), 2);
        assert_eq!(state.todos[0].id, "new");
        assert_eq!(state.tags, vec!["home", "work"]);
    }

    #[test]
    fn apply_updated_replaces_matching_entry_only() {
        let mut state = TodoState::default();
        state.todos = vec![make_todo("a", &[]), make_todo("b", &[])];

        let mut updated = make_todo("b", &["urgent"]);
        updated.completed = true;
        state.apply_updated(updated);

        assert!(!state.todos[0].completed);
        assert!(state.todos[1].completed);
        assert_eq!(state.tags, vec!["urgent"]);
    }

    #[test]
    fn apply_updated_with_unknown_id_changes_nothing_in_list() {
        let mut state = TodoState::default();
        state.todos = vec![make_todo("a", &[])];
        state.apply_updated(make_todo("ghost", &[]));
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].id, "a");
    }

    #[test]
    fn apply_deleted_removes_matching_entry() {
        let mut state = TodoState::default();
        state.todos = vec![make_todo("a", &[]), make_todo("b", &[])];

        state.apply_deleted("a");
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].id, "b");

        // absent identity is a no-op
        state.apply_deleted("a");
        assert_eq!(state.todos.len(), 1);
    }

    #[test]
    fn apply_note_added_swaps_in_server_entry() {
        let mut state = TodoState::default();
        state.todos = vec![make_todo("a", &[])];

        let mut noted = make_todo("a", &[]);
        noted.notes.push(crate::models::Note {
            content: "remember the coupon".to_string(),
            created_at: DateTime::<Utc>::default(),
        });
        state.apply_note_added(noted);

        assert_eq!(state.todos[0].notes.len(), 1);
    }

    #[test]
    fn stale_fetch_token_is_rejected() {
        let mut state = TodoState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn reset_tag_filter_clears_only_tags() {
        let mut state = TodoState::default();
        state.filters.tags = vec!["home".to_string()];
        state.filters.search = "milk".to_string();
        state.reset_tag_filter();
        assert!(state.filters.tags.is_empty());
        assert_eq!(state.filters.search, "milk");
    }

    #[test]
    fn apply_users_selects_first_when_none_active() {
        let mut state = UserState::default();
        state.apply_users(vec![make_user("u1"), make_user("u2")]);
        assert_eq!(state.current_user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    }

    #[test]
    fn apply_users_preserves_active_user_across_refetch() {
        let mut state = UserState::default();
        state.apply_users(vec![make_user("u1"), make_user("u2")]);
        state.set_current_user(make_user("u2"));

        state.apply_users(vec![make_user("u1"), make_user("u2")]);
        assert_eq!(state.current_user.as_ref().map(|u| u.id.as_str()), Some("u2"));
    }

    #[test]
    fn apply_users_falls_back_when_active_user_disappears() {
        let mut state = UserState::default();
        state.set_current_user(make_user("gone"));
        state.apply_users(vec![make_user("u1")]);
        assert_eq!(state.current_user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    }

    #[test]
    fn apply_users_with_empty_list_clears_selection() {
        let mut state = UserState::default();
        state.set_current_user(make_user("u1"));
        state.apply_users(Vec::new());
        assert!(state.current_user.is_none());
        assert!(state.users.is_empty());
    }
}

//! Pagination Bar Component
//!
//! Previous/next controls over the server-derived cursor; page moves go
//! through the `change_page` intent, which refetches.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::store::{use_todo_store, use_user_store, TodoStateStoreFields};

#[component]
pub fn PaginationBar() -> impl IntoView {
    let todos = use_todo_store();
    let users = use_user_store();

    let current = move || todos.pagination().get().current_page;
    let total = move || todos.pagination().get().total_pages;

    let go_to = move |page: u32| {
        spawn_local(async move {
            actions::change_page(todos, users, page).await;
        });
    };

    view! {
        <div class="pagination-bar">
            <button
                class="pagination-btn"
                disabled=move || current() == 1
                on:click=move |_| {
                    let page = todos.pagination().get_untracked().current_page;
                    if page > 1 {
                        go_to(page - 1);
                    }
                }
            >
                "Previous"
            </button>
            <div class="pagination-label">
                <span>{current}</span> " / " <span>{total}</span>
            </div>
            <button
                class="pagination-btn"
                disabled=move || current() == total()
                on:click=move |_| {
                    let state = todos.pagination().get_untracked();
                    if state.current_page < state.total_pages {
                        go_to(state.current_page + 1);
                    }
                }
            >
                "Next"
            </button>
        </div>
    }
}

//! Todo List Component

use leptos::prelude::*;

use crate::components::{PaginationBar, TodoItem};
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let todos = use_todo_store();

    view! {
        <div class="todo-list">
            <Show
                when=move || !todos.todos().read().is_empty()
                fallback=|| view! {
                    <div class="todo-list-empty">"No todos found. Add a new one!"</div>
                }
            >
                {move || {
                    todos
                        .todos()
                        .get()
                        .into_iter()
                        .map(|todo| view! { <TodoItem todo=todo /> })
                        .collect_view()
                }}
            </Show>
            <PaginationBar />
        </div>
    }
}

//! Todo Board App
//!
//! Root component: owns both stores, provides them through context, and wires
//! the user-driven reload effects.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{AddTodoModal, FilterSidebar, TodoList, UserSwitcher};
use crate::models::{FilterPatch, RequestStatus};
use crate::store::{TodoState, TodoStateStoreFields, UserState, UserStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let todos = Store::new(TodoState::default());
    let users = Store::new(UserState::default());
    provide_context(todos);
    provide_context(users);

    let (add_modal_open, set_add_modal_open) = signal(false);

    // Load the user list on mount
    Effect::new(move |_| {
        spawn_local(async move {
            actions::load_users(users).await;
        });
    });

    // Reload todos and tags whenever the active user changes
    Effect::new(move |_| {
        if let Some(user) = users.current_user().get() {
            spawn_local(async move {
                actions::load_todos(todos, users).await;
                actions::load_tags(todos, user.id).await;
            });
        }
    });

    let on_export = move |_: web_sys::MouseEvent| {
        if let Some(user) = users.current_user().get_untracked() {
            spawn_local(async move {
                actions::export_csv(user.id).await;
            });
        }
    };

    let on_search = move |ev: web_sys::Event| {
        let search = event_target_value(&ev);
        spawn_local(async move {
            let patch = FilterPatch {
                search: Some(search),
                ..FilterPatch::default()
            };
            actions::apply_filters(todos, users, patch).await;
        });
    };

    let is_loading = move || todos.status().get() == RequestStatus::Loading;

    view! {
        <div class="app-container">
            {move || match users.current_user().get() {
                Some(current) => view! {
                    <header class="app-header">
                        <h1>"Todo List"</h1>
                        <div class="header-actions">
                            <button class="export-btn" on:click=on_export disabled=is_loading>
                                "Export"
                            </button>
                            <UserSwitcher />
                            <span class="current-user">{current.name.clone()}</span>
                        </div>
                    </header>
                    <main class="app-main">
                        <aside class="sidebar">
                            <FilterSidebar />
                        </aside>
                        <section class="content">
                            <div class="content-toolbar">
                                <button
                                    class="add-btn"
                                    on:click=move |_| set_add_modal_open.set(true)
                                    disabled=is_loading
                                >
                                    "+ Add Todo"
                                </button>
                                <input
                                    type="text"
                                    class="search-input"
                                    placeholder="Search todos..."
                                    prop:value=move || todos.filters().read().search.clone()
                                    on:input=on_search
                                />
                            </div>
                            {move || is_loading().then(|| view! {
                                <div class="status-banner">"Loading..."</div>
                            })}
                            {move || {
                                (todos.status().get() == RequestStatus::Failed)
                                    .then(|| todos.error().get())
                                    .flatten()
                                    .map(|message| view! {
                                        <div class="error-banner">
                                            {message}
                                            <button
                                                class="error-dismiss"
                                                on:click=move |_| todos.write().clear_error()
                                            >
                                                "✕"
                                            </button>
                                        </div>
                                    })
                            }}
                            <TodoList />
                        </section>
                    </main>
                    <Show when=move || add_modal_open.get()>
                        <AddTodoModal on_close=move |_| set_add_modal_open.set(false) />
                    </Show>
                }.into_any(),
                None => view! { <div class="app-loading">"Loading ..."</div> }.into_any(),
            }}
        </div>
    }
}

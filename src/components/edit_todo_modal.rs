//! Edit Todo Modal Component
//!
//! Same form as the add modal, seeded from an existing todo. Submits a full
//! field patch; assignees can only be appended, matching the service contract.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::TodoPatch;
use crate::models::{Priority, Todo, User};
use crate::store::{use_todo_store, use_user_store, UserStateStoreFields};

#[component]
pub fn EditTodoModal(todo: Todo, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let todos = use_todo_store();
    let users = use_user_store();

    let id = todo.id.clone();
    let (title, set_title) = signal(todo.title.clone());
    let (description, set_description) = signal(todo.description.clone().unwrap_or_default());
    let (priority, set_priority) = signal(todo.priority);
    let (tags, set_tags) = signal(todo.tags.clone());
    let (assigned, set_assigned) = signal(todo.assigned_users.clone());
    let (tag_input, set_tag_input) = signal(String::new());
    let (selected_user_id, set_selected_user_id) = signal(String::new());

    let add_tag = move |_: web_sys::MouseEvent| {
        let tag = tag_input.get();
        if !tag.is_empty() && !tags.get().contains(&tag) {
            set_tags.update(|list| list.push(tag));
            set_tag_input.set(String::new());
        }
    };

    let add_user = move |_: web_sys::MouseEvent| {
        let user_id = selected_user_id.get();
        if user_id.is_empty() {
            return;
        }
        let Some(user) = users.users().get().into_iter().find(|u| u.id == user_id) else {
            return;
        };
        if !assigned.get().iter().any(|u: &User| u.id == user.id) {
            set_assigned.update(|list| list.push(user));
            set_selected_user_id.set(String::new());
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if title.get().is_empty() {
            return;
        }
        let patch = TodoPatch {
            title: Some(title.get()),
            description: Some(description.get()),
            priority: Some(priority.get()),
            tags: Some(tags.get()),
            assigned_users: Some(assigned.get()),
            ..TodoPatch::default()
        };
        let id = id.clone();
        spawn_local(async move {
            actions::save_todo(todos, id, patch).await;
        });
        on_close.run(());
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>"Edit Todo"</h2>
                <form on:submit=on_submit>
                    <div class="form-field">
                        <label>"Title"</label>
                        <input
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-field">
                        <label>"Description"</label>
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-field">
                        <label>"Priority"</label>
                        <select on:change=move |ev| {
                            set_priority.set(Priority::from_value(&event_target_value(&ev)))
                        }>
                            <option value="low" selected=move || priority.get() == Priority::Low>
                                "Low"
                            </option>
                            <option value="medium" selected=move || priority.get() == Priority::Medium>
                                "Medium"
                            </option>
                            <option value="high" selected=move || priority.get() == Priority::High>
                                "High"
                            </option>
                        </select>
                    </div>
                    <div class="form-field">
                        <label>"Tags"</label>
                        <div class="form-row">
                            <input
                                type="text"
                                prop:value=move || tag_input.get()
                                on:input=move |ev| set_tag_input.set(event_target_value(&ev))
                            />
                            <button type="button" on:click=add_tag>"Add"</button>
                        </div>
                        <div class="chip-row">
                            {move || {
                                tags.get()
                                    .into_iter()
                                    .map(|tag| view! { <span class="tag-chip">{tag}</span> })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                    <div class="form-field">
                        <label>"Assign Users"</label>
                        <div class="form-row">
                            <select
                                prop:value=move || selected_user_id.get()
                                on:change=move |ev| set_selected_user_id.set(event_target_value(&ev))
                            >
                                <option value="">"Select a user"</option>
                                {move || {
                                    users
                                        .users()
                                        .get()
                                        .into_iter()
                                        .map(|user| view! {
                                            <option value=user.id.clone()>{user.name.clone()}</option>
                                        })
                                        .collect_view()
                                }}
                            </select>
                            <button
                                type="button"
                                on:click=add_user
                                disabled=move || selected_user_id.get().is_empty()
                            >
                                "Add"
                            </button>
                        </div>
                        <div class="chip-row">
                            {move || {
                                assigned
                                    .get()
                                    .into_iter()
                                    .map(|user| view! {
                                        <span class="user-chip">"@" {user.username}</span>
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                    <div class="modal-actions">
                        <button type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
                        <button type="submit">"Save"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

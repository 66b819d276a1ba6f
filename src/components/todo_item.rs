//! Todo Item Component
//!
//! One list row: completion toggle, priority/tag/assignee badges, note/edit/
//! delete actions, and a click-through details overlay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::TodoPatch;
use crate::components::{DeleteConfirmButton, EditTodoModal, NoteModal};
use crate::models::{Priority, Todo};
use crate::store::use_todo_store;

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "priority-badge high",
        Priority::Medium => "priority-badge medium",
        Priority::Low => "priority-badge low",
    }
}

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let todos = use_todo_store();
    let (edit_open, set_edit_open) = signal(false);
    let (note_open, set_note_open) = signal(false);
    let (details_open, set_details_open) = signal(false);

    let completed = todo.completed;
    let title = todo.title.clone();
    let title_class = if completed {
        "todo-title completed"
    } else {
        "todo-title"
    };
    let tags = todo.tags.clone();
    let assigned = todo.assigned_users.clone();

    let toggle_id = todo.id.clone();
    let on_toggle = move |_: web_sys::Event| {
        let id = toggle_id.clone();
        spawn_local(async move {
            let patch = TodoPatch {
                completed: Some(!completed),
                ..TodoPatch::default()
            };
            actions::save_todo(todos, id, patch).await;
        });
    };

    let delete_id = todo.id.clone();
    let on_delete = move |_: ()| {
        let id = delete_id.clone();
        spawn_local(async move {
            actions::remove_todo(todos, id).await;
        });
    };

    let todo_for_edit = todo.clone();
    let edit_modal = move || {
        edit_open.get().then(|| {
            view! {
                <EditTodoModal
                    todo=todo_for_edit.clone()
                    on_close=move |_| set_edit_open.set(false)
                />
            }
        })
    };

    let note_id = todo.id.clone();
    let note_modal = move || {
        note_open.get().then(|| {
            view! {
                <NoteModal
                    todo_id=note_id.clone()
                    on_close=move |_| set_note_open.set(false)
                />
            }
        })
    };

    let todo_for_details = todo.clone();
    let details_modal = move || {
        details_open
            .get()
            .then(|| details_view(&todo_for_details, set_details_open))
    };

    view! {
        <div class="todo-item">
            <input
                type="checkbox"
                class="todo-checkbox"
                checked=completed
                on:change=on_toggle
            />
            <div class="todo-body" on:click=move |_| set_details_open.set(true)>
                <h3 class=title_class>{title}</h3>
                <div class="todo-badges">
                    <span class=priority_class(todo.priority)>{todo.priority.as_str()}</span>
                    {tags
                        .iter()
                        .map(|tag| view! { <span class="tag-badge">{tag.clone()}</span> })
                        .collect_view()}
                    {assigned
                        .iter()
                        .map(|user| view! {
                            <span class="user-badge">"@" {user.username.clone()}</span>
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="todo-actions">
                <button
                    class="note-btn"
                    title="Add note"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_note_open.set(true);
                    }
                >
                    "✎"
                </button>
                <button
                    class="edit-btn"
                    title="Edit todo"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_edit_open.set(true);
                    }
                >
                    "✏"
                </button>
                <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
            </div>
        </div>
        {edit_modal}
        {note_modal}
        {details_modal}
    }
}

/// Read-only details overlay: description, priority, tags, assignees, notes
fn details_view(todo: &Todo, set_open: WriteSignal<bool>) -> impl IntoView {
    let description = todo
        .description
        .clone()
        .unwrap_or_else(|| "N/A".to_string());
    let notes = todo.notes.clone();

    view! {
        <div class="modal-overlay">
            <div class="modal details-modal">
                <h2>{todo.title.clone()}</h2>
                <div class="details-section">
                    <h3>"Description"</h3>
                    <p>{description}</p>
                </div>
                <div class="details-section">
                    <h3>"Priority"</h3>
                    <span class=priority_class(todo.priority)>{todo.priority.as_str()}</span>
                </div>
                <div class="details-section">
                    <h3>"Tags"</h3>
                    {todo
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="tag-badge">{tag.clone()}</span> })
                        .collect_view()}
                </div>
                <div class="details-section">
                    <h3>"Assigned Users"</h3>
                    {todo
                        .assigned_users
                        .iter()
                        .map(|user| view! {
                            <span class="user-badge">"@" {user.username.clone()}</span>
                        })
                        .collect_view()}
                </div>
                <div class="details-section">
                    <h3>"Notes"</h3>
                    {if notes.is_empty() {
                        view! { <p class="details-empty">"No notes"</p> }.into_any()
                    } else {
                        view! {
                            <ul class="note-list">
                                {notes
                                    .iter()
                                    .map(|note| view! {
                                        <li>
                                            <p>{note.content.clone()}</p>
                                            <p class="note-date">
                                                {note.created_at.format("%Y-%m-%d").to_string()}
                                            </p>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    }}
                </div>
                <div class="modal-actions">
                    <button on:click=move |_| set_open.set(false)>"Close"</button>
                </div>
            </div>
        </div>
    }
}

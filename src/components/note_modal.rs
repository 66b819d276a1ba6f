//! Note Modal Component
//!
//! Append a free-text note to a todo.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::store::use_todo_store;

#[component]
pub fn NoteModal(todo_id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let todos = use_todo_store();
    let (note, set_note) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = note.get();
        if content.is_empty() {
            return;
        }
        let todo_id = todo_id.clone();
        spawn_local(async move {
            actions::append_note(todos, todo_id, content).await;
        });
        set_note.set(String::new());
        on_close.run(());
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>"Add Note"</h2>
                <form on:submit=on_submit>
                    <div class="form-field">
                        <label>"Note"</label>
                        <textarea
                            prop:value=move || note.get()
                            on:input=move |ev| set_note.set(event_target_value(&ev))
                            required
                        ></textarea>
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

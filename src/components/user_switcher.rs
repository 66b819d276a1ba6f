//! User Switcher Component
//!
//! Dropdown for switching the active profile. Picking an entry resets the
//! user-scoped tag filter alongside the switch.

use leptos::prelude::*;

use crate::actions;
use crate::store::{use_todo_store, use_user_store, UserStateStoreFields};

#[component]
pub fn UserSwitcher() -> impl IntoView {
    let todos = use_todo_store();
    let users = use_user_store();
    let (open, set_open) = signal(false);

    let current_name = move || {
        users
            .current_user()
            .get()
            .map(|user| user.name)
            .unwrap_or_default()
    };

    view! {
        <div class="user-switcher">
            <button
                class="user-switcher-btn"
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                {current_name} " ▾"
            </button>
            <Show when=move || open.get()>
                <div class="user-switcher-menu">
                    <For
                        each=move || users.users().get()
                        key=|user| user.id.clone()
                        children=move |user| {
                            let select = user.clone();
                            view! {
                                <div
                                    class="user-switcher-entry"
                                    on:click=move |_| {
                                        actions::switch_user(todos, users, select.clone());
                                        set_open.set(false);
                                    }
                                >
                                    {user.name.clone()}
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

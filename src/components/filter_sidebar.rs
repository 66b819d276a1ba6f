//! Filter Sidebar Component
//!
//! Priority and tag checkboxes. Toggling any box goes through the
//! `apply_filters` intent, which resets pagination and refetches.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::models::{FilterPatch, Priority};
use crate::store::{use_todo_store, use_user_store, TodoStateStoreFields};

#[component]
pub fn FilterSidebar() -> impl IntoView {
    let todos = use_todo_store();
    let users = use_user_store();

    let toggle_priority = move |priority: Priority| {
        let mut selected = todos.filters().read_untracked().priority.clone();
        if let Some(pos) = selected.iter().position(|p| *p == priority) {
            selected.remove(pos);
        } else {
            selected.push(priority);
        }
        spawn_local(async move {
            let patch = FilterPatch {
                priority: Some(selected),
                ..FilterPatch::default()
            };
            actions::apply_filters(todos, users, patch).await;
        });
    };

    let toggle_tag = move |tag: String| {
        let mut selected = todos.filters().read_untracked().tags.clone();
        if let Some(pos) = selected.iter().position(|t| *t == tag) {
            selected.remove(pos);
        } else {
            selected.push(tag);
        }
        spawn_local(async move {
            let patch = FilterPatch {
                tags: Some(selected),
                ..FilterPatch::default()
            };
            actions::apply_filters(todos, users, patch).await;
        });
    };

    view! {
        <div class="filter-sidebar">
            <h3>"Filters"</h3>
            <div class="filter-group">
                <h4>"Priority"</h4>
                {Priority::ALL
                    .iter()
                    .map(|&priority| {
                        let checked = move || todos.filters().read().priority.contains(&priority);
                        view! {
                            <label class="filter-option">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |_| toggle_priority(priority)
                                />
                                {priority.label()}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="filter-group">
                <h4>"Tags"</h4>
                <Show
                    when=move || !todos.tags().read().is_empty()
                    fallback=|| view! { <p class="filter-empty">"No tags available"</p> }
                >
                    <For
                        each=move || todos.tags().get()
                        key=|tag| tag.clone()
                        children=move |tag: String| {
                            let tag_for_toggle = tag.clone();
                            let tag_for_checked = tag.clone();
                            let checked = move || {
                                todos.filters().read().tags.contains(&tag_for_checked)
                            };
                            view! {
                                <label class="filter-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=checked
                                        on:change=move |_| toggle_tag(tag_for_toggle.clone())
                                    />
                                    {tag}
                                </label>
                            }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}

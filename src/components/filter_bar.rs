//! Filter Bar Component
//!
//! Status and priority filters for the list.

use leptos::prelude::*;

use crate::format::{priority_label, status_label};
use crate::models::{TodoPriority, TodoStatus};
use crate::page_state::{ListFilters, PageState};

const ALL_VALUE: &str = "";

#[component]
pub fn FilterBar(page_state: PageState) -> impl IntoView {
    let status_value = move || page_state.filters().status.map(|s| s.as_str()).unwrap_or(ALL_VALUE);
    let priority_value = move || page_state.filters().priority.map(|p| p.as_str()).unwrap_or(ALL_VALUE);

    view! {
        <div class="filter-bar">
            <label>
                "Status "
                <select
                    prop:value=status_value
                    on:change=move |ev| {
                        let filters = ListFilters {
                            status: TodoStatus::parse(&event_target_value(&ev)),
                            ..page_state.params.get_untracked().filters
                        };
                        page_state.set_filters.run(filters);
                    }
                >
                    <option value=ALL_VALUE>"All"</option>
                    {TodoStatus::ALL.iter().map(|s| view! {
                        <option value=s.as_str()>{status_label(*s)}</option>
                    }).collect_view()}
                </select>
            </label>
            <label>
                "Priority "
                <select
                    prop:value=priority_value
                    on:change=move |ev| {
                        let filters = ListFilters {
                            priority: TodoPriority::parse(&event_target_value(&ev)),
                            ..page_state.params.get_untracked().filters
                        };
                        page_state.set_filters.run(filters);
                    }
                >
                    <option value=ALL_VALUE>"All"</option>
                    {TodoPriority::ALL.iter().map(|p| view! {
                        <option value=p.as_str()>{priority_label(*p)}</option>
                    }).collect_view()}
                </select>
            </label>
            <Show when=move || !page_state.filters().is_empty()>
                <button
                    class="clear-filters-btn"
                    on:click=move |_| page_state.set_filters.run(ListFilters::default())
                >
                    "Clear filters"
                </button>
            </Show>
        </div>
    }
}

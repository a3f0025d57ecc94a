//! Priority Selector Component
//!
//! Button row for picking a todo priority.

use leptos::prelude::*;

use crate::format::{priority_color, priority_label};
use crate::models::TodoPriority;

/// Priority selector buttons
#[component]
pub fn PrioritySelector(
    #[prop(into)] current: Signal<TodoPriority>,
    on_change: impl Fn(TodoPriority) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="priority-selector">
            {TodoPriority::ALL.iter().map(|priority| {
                let priority = *priority;
                let is_selected = move || current.get() == priority;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "priority-btn active" } else { "priority-btn" }
                        style=format!("color: {};", priority_color(priority))
                        on:click=move |_| on_change(priority)
                    >
                        {priority_label(priority)}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

//! Todo Row Component
//!
//! A single table row.

use leptos::prelude::*;

use crate::components::TodoActionsMenu;
use crate::format::{
    description_text, due_date_label, priority_color, priority_label, status_color, status_label, MUTED_COLOR,
};
use crate::models::Todo;

/// Opacity of rows that belong to the previous page while the next one loads
pub const STALE_ROW_OPACITY: f32 = 0.5;

#[component]
pub fn TodoRow(todo: Todo, stale: bool) -> impl IntoView {
    let opacity = if stale { STALE_ROW_OPACITY } else { 1.0 };
    let description = description_text(todo.description.as_deref()).map(str::to_string);
    let due_date = due_date_label(todo.due_date);
    let title = todo.title.clone();
    let priority = todo.priority;
    let status = todo.status;

    view! {
        <tr class="todo-row" class:stale=stale style=format!("opacity: {};", opacity)>
            <td class="cell-title truncate">{title}</td>
            {match description {
                Some(text) => view! { <td class="cell-description truncate">{text}</td> }.into_any(),
                None => view! {
                    <td class="cell-description" style=format!("color: {};", MUTED_COLOR)>"N/A"</td>
                }.into_any(),
            }}
            <td>
                <span style=format!("color: {};", priority_color(priority))>
                    {priority_label(priority)}
                </span>
            </td>
            <td>
                <span style=format!("color: {};", status_color(status))>
                    {status_label(status)}
                </span>
            </td>
            {match due_date {
                Some(date) => view! { <td>{date}</td> }.into_any(),
                None => view! {
                    <td style=format!("color: {};", MUTED_COLOR)>"No Due Date"</td>
                }.into_any(),
            }}
            <td>
                <TodoActionsMenu todo=todo />
            </td>
        </tr>
    }
}

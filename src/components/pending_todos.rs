//! Pending Todos Component
//!
//! Skeleton table shown while the first page loads.

use leptos::prelude::*;

use crate::components::todos_table::COLUMNS;

#[component]
pub fn PendingTodos(rows: usize) -> impl IntoView {
    view! {
        <table class="todos-table pending" aria-busy="true">
            <thead>
                <tr>
                    {COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {(0..rows).map(|_| view! {
                    <tr>
                        {COLUMNS.iter().map(|_| view! {
                            <td><div class="skeleton-text"></div></td>
                        }).collect_view()}
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

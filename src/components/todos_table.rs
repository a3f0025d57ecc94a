//! Todos Table Component
//!
//! Renders the list query: loading skeleton, empty state, failure with
//! retry, or the table of rows plus pagination.

use leptos::prelude::*;
use leptos_pagination::Pagination;

use crate::components::{PendingTodos, TodoRow, TodosEmptyState};
use crate::page_state::{Page, PageState};
use crate::query::{ListState, TodosQuery};

pub const COLUMNS: [&str; 6] = ["Title", "Description", "Priority", "Status", "Due Date", "Actions"];

#[component]
pub fn TodosTable(page_state: PageState, query: TodosQuery) -> impl IntoView {
    let page_size = query.page_size();

    let on_page_change = move |n: usize| match Page::new(n) {
        Some(page) => page_state.set_page.run(page),
        None => log::warn!("[TABLE] ignoring page {}", n),
    };

    // memoized so in-flight bookkeeping does not rebuild the rows
    let state = Memo::new(move |_| query.state());
    let total_count = Memo::new(move |_| query.total_count());
    let refreshing = Memo::new(move |_| query.is_fetching());

    let table = move || match state.get() {
        ListState::Loading => view! { <PendingTodos rows=page_size /> }.into_any(),
        ListState::Empty => view! { <TodosEmptyState /> }.into_any(),
        ListState::Failed { message } => view! {
            <div class="query-error">
                <p>{message}</p>
                <button on:click=move |_| query.retry()>"Retry"</button>
            </div>
        }.into_any(),
        ListState::Populated { rows, stale } => view! {
            <table class="todos-table">
                <thead>
                    <tr>
                        {COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|todo| view! { <TodoRow todo=todo stale=stale /> }).collect_view()}
                </tbody>
            </table>
            <div class="pagination-row">
                <Pagination
                    count=total_count
                    page_size=page_size
                    page=Signal::derive(move || page_state.page().get())
                    on_page_change=on_page_change
                />
            </div>
        }.into_any(),
    };

    view! {
        <div class="todos-table-container" aria-busy=move || refreshing.get().to_string()>
            <Show when=move || refreshing.get() && state.with(|s| !matches!(s, ListState::Loading))>
                <span class="refreshing-indicator">"Refreshing..."</span>
            </Show>
            {table}
        </div>
    }
}

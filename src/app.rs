//! Todo List Frontend App
//!
//! Router, shared context and the todos page.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::{AddTodo, EditTodo, FilterBar, TodosTable};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Todo;
use crate::page_state::use_page_state;
use crate::query::use_todos_query;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!(
        "[APP] starting against {} with {} rows per page",
        config.api_base_url,
        config.page_size
    );

    let todos_version = signal(0u32);
    let editing = signal::<Option<Todo>>(None);

    // Provide context to all children
    provide_context(AppContext::new(
        ApiClient::new(config.api_base_url),
        config.page_size,
        todos_version,
        editing,
    ));

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/items" /> } />
                    <Route path=path!("/items") view=TodosPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Paginated todo list with its add/edit dialogs
#[component]
fn TodosPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let page_state = use_page_state();
    let query = use_todos_query(ctx.api.clone(), page_state.params, ctx.todos_version, ctx.page_size);

    view! {
        <div class="todos-page">
            <h1 class="page-title">"Todo Management"</h1>
            <div class="toolbar">
                <AddTodo />
                <FilterBar page_state=page_state />
            </div>
            <TodosTable page_state=page_state query=query />
            <EditTodo />
        </div>
    }
}

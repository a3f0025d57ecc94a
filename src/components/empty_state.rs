//! Empty State Component

use leptos::prelude::*;

#[component]
pub fn TodosEmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-indicator">"🔍"</div>
            <h3 class="empty-state-title">"You don't have any todos yet"</h3>
            <p class="empty-state-description">"Add a new todo to get started"</p>
        </div>
    }
}

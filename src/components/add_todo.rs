//! Add Todo Component
//!
//! Toggleable form for creating a todo.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::todo_form::{TodoDraft, TodoFormFields};
use crate::context::AppContext;

/// "Add Todo" button plus the creation form it reveals
#[component]
pub fn AddTodo() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (open, set_open) = signal(false);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let draft = RwSignal::new(TodoDraft::default());

    let close = move || {
        draft.set(TodoDraft::default());
        set_error.set(None);
        set_open.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let create = match draft.with_untracked(|d| d.to_create()) {
            Ok(create) => create,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };

        let ctx = ctx.clone();
        set_saving.set(true);
        spawn_local(async move {
            match ctx.api.create_todo(&create).await {
                Ok(todo) => {
                    log::info!("[TODO] created {}", todo.id);
                    close();
                    ctx.invalidate_todos();
                }
                Err(e) => {
                    log::error!("[TODO] create failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="add-todo">
            <Show
                when=move || open.get()
                fallback=move || view! {
                    <button class="add-todo-btn" on:click=move |_| set_open.set(true)>
                        "+ Add Todo"
                    </button>
                }
            >
                <form class="todo-form" on:submit=on_submit.clone()>
                    <h2>"Add Todo"</h2>
                    <TodoFormFields draft=draft />

                    {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                    <div class="form-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

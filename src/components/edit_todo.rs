//! Edit Todo Dialog
//!
//! Modal editor for the todo selected from a row's actions menu.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::todo_form::{TodoDraft, TodoFormFields};
use crate::context::AppContext;

#[component]
pub fn EditTodo() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let draft = RwSignal::new(TodoDraft::default());

    // Reset the draft whenever a different todo is opened
    let editing = ctx.editing;
    Effect::new(move |_| {
        if let Some(todo) = editing.get() {
            draft.set(TodoDraft::from_todo(&todo));
            set_error.set(None);
        }
    });

    let close = {
        let ctx = ctx.clone();
        move || ctx.edit(None)
    };

    let on_submit = {
        let ctx = ctx.clone();
        let close = close.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let Some(original) = editing.get_untracked() else { return };
            if saving.get_untracked() {
                return;
            }
            let update = match draft.with_untracked(|d| d.to_update(&original)) {
                Ok(update) => update,
                Err(msg) => {
                    set_error.set(Some(msg));
                    return;
                }
            };
            if update.is_empty() {
                close();
                return;
            }

            let ctx = ctx.clone();
            let close = close.clone();
            set_saving.set(true);
            spawn_local(async move {
                match ctx.api.update_todo(original.id, &update).await {
                    Ok(todo) => {
                        log::info!("[TODO] updated {}", todo.id);
                        close();
                        ctx.invalidate_todos();
                    }
                    Err(e) => {
                        log::error!("[TODO] update of {} failed: {}", original.id, e);
                        set_error.set(Some(e.to_string()));
                    }
                }
                set_saving.set(false);
            });
        }
    };

    view! {
        <Show when=move || editing.with(|t| t.is_some())>
            <div class="modal-backdrop">
                <form class="todo-form modal" on:submit=on_submit.clone()>
                    <h2>"Edit Todo"</h2>
                    <TodoFormFields draft=draft />

                    {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                    <div class="form-actions">
                        <button type="button" class="cancel-btn" on:click={
                            let close = close.clone();
                            move |_| close()
                        }>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

//! Todo Actions Menu
//!
//! Kebab button with a dropdown of per-row actions: edit, toggle
//! completion, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::{Todo, TodoStatus};

#[component]
pub fn TodoActionsMenu(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (open, set_open) = signal(false);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let id = todo.id;
    let title = todo.title.clone();
    let toggle_label = if todo.status == TodoStatus::Completed { "Reopen" } else { "Mark completed" };

    let on_edit = {
        let ctx = ctx.clone();
        let todo = todo.clone();
        move |_: web_sys::MouseEvent| {
            set_open.set(false);
            ctx.edit(Some(todo.clone()));
        }
    };

    let on_toggle = {
        let ctx = ctx.clone();
        move |_: web_sys::MouseEvent| {
            if busy.get_untracked() {
                return;
            }
            let ctx = ctx.clone();
            set_busy.set(true);
            spawn_local(async move {
                match ctx.api.toggle_todo_status(id).await {
                    Ok(todo) => {
                        log::info!("[TODO] {} is now {}", id, todo.status.as_str());
                        set_open.set(false);
                        ctx.invalidate_todos();
                    }
                    Err(e) => {
                        log::error!("[TODO] toggle of {} failed: {}", id, e);
                        set_error.set(Some(e.to_string()));
                    }
                }
                set_busy.set(false);
            });
        }
    };

    let on_delete = Callback::new(move |_: ()| {
        if busy.get_untracked() {
            return;
        }
        let ctx = ctx.clone();
        set_busy.set(true);
        spawn_local(async move {
            match ctx.api.delete_todo(id).await {
                Ok(msg) => {
                    log::info!("[TODO] {}: {}", id, msg.message);
                    ctx.invalidate_todos();
                }
                // Already gone; the list is out of date either way
                Err(e) if e.is_not_found() => {
                    log::warn!("[TODO] {} was already deleted", id);
                    ctx.invalidate_todos();
                }
                Err(e) => {
                    log::error!("[TODO] delete of {} failed: {}", id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_busy.set(false);
        });
    });

    view! {
        <div class="actions-menu">
            <button
                class="actions-menu-trigger"
                aria-label="Actions"
                on:click=move |_| {
                    set_error.set(None);
                    set_open.update(|o| *o = !*o);
                }
            >
                "⋮"
            </button>
            <Show when=move || open.get()>
                <div class="actions-menu-content">
                    <button class="menu-item" on:click=on_edit.clone()>"Edit"</button>
                    <button class="menu-item" disabled=move || busy.get() on:click=on_toggle.clone()>
                        {toggle_label}
                    </button>
                    <DeleteConfirmButton
                        title=title.clone()
                        button_class="menu-item danger"
                        pending=busy
                        on_confirm=on_delete
                    />
                    {move || error.get().map(|msg| view! { <p class="menu-error">{msg}</p> })}
                </div>
            </Show>
        </div>
    }
}

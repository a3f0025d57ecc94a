//! Delete Confirm Button Component
//!
//! Two-step delete for a todo: the first click asks, the second deletes.

use leptos::prelude::*;

/// Inline delete confirmation naming the todo being removed.
///
/// `pending` keeps the confirm step open and disabled while the request runs.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] title: String,
    #[prop(into)] button_class: String,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let prompt = format!("Delete \"{}\"?", title);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || {
                let button_class = button_class.clone();
                view! {
                    <button
                        class=button_class
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(true);
                        }
                    >
                        "Delete"
                    </button>
                }
            }
        >
            <div class="delete-confirm" role="alertdialog">
                <p class="delete-confirm-text">{prompt.clone()}</p>
                <p class="delete-confirm-hint">"This can't be undone."</p>
                <div class="delete-confirm-actions">
                    <button
                        class="cancel-btn"
                        disabled=move || pending.get()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(false);
                        }
                    >
                        "Cancel"
                    </button>
                    <button
                        class="danger-btn"
                        disabled=move || pending.get()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_confirm.run(());
                        }
                    >
                        {move || if pending.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </Show>
    }
}

//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::models::Todo;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Backend client
    pub api: ApiClient,
    /// Rows per table page
    pub page_size: usize,
    /// Bumped after every successful mutation - read
    pub todos_version: ReadSignal<u32>,
    /// Bumped after every successful mutation - write
    set_todos_version: WriteSignal<u32>,
    /// Todo open in the edit dialog - read
    pub editing: ReadSignal<Option<Todo>>,
    /// Todo open in the edit dialog - write
    set_editing: WriteSignal<Option<Todo>>,
}

impl AppContext {
    pub fn new(
        api: ApiClient,
        page_size: usize,
        todos_version: (ReadSignal<u32>, WriteSignal<u32>),
        editing: (ReadSignal<Option<Todo>>, WriteSignal<Option<Todo>>),
    ) -> Self {
        Self {
            api,
            page_size,
            todos_version: todos_version.0,
            set_todos_version: todos_version.1,
            editing: editing.0,
            set_editing: editing.1,
        }
    }

    /// Mark every cached todo page stale
    pub fn invalidate_todos(&self) {
        self.set_todos_version.update(|v| *v += 1);
    }

    /// Open (or close, with `None`) the edit dialog
    pub fn edit(&self, todo: Option<Todo>) {
        self.set_editing.set(todo);
    }
}

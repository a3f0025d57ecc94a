//! Todo List Query
//!
//! Binds the list parameters to backend fetches through a keyed cache and
//! resolves what the table should render.

mod cache;


use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

pub use cache::{CacheView, QueryCache};

use crate::api::{ApiError, TodoSource};
use crate::models::{Todo, TodosPage};
use crate::page_state::{ListFilters, ListParams};

/// Cache key: one entry per page and filter combination
pub type ListKey = ListParams;

/// Render state of the todo table
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    /// First fetch in flight, nothing to show yet
    Loading,
    /// Fetch succeeded with zero rows
    Empty,
    /// `stale` rows belong to a previous key and must be dimmed
    Populated { rows: Vec<Todo>, stale: bool },
    Failed { message: String },
}

/// Pure list query state: cache plus page size
#[derive(Debug, Clone)]
pub struct ListQuery {
    cache: QueryCache<ListKey, TodosPage, ApiError>,
    /// Count from the latest successful fetch, per filter set
    counts: HashMap<ListFilters, usize>,
    page_size: usize,
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            cache: QueryCache::new(),
            counts: HashMap::new(),
            page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Switch to `key`; returns the key to fetch, if any
    pub fn supersede(&mut self, key: ListKey) -> Option<ListKey> {
        self.cache.supersede(key)
    }

    pub fn invalidate(&mut self) -> Option<ListKey> {
        self.cache.invalidate()
    }

    pub fn retry(&mut self) -> Option<ListKey> {
        self.cache.retry()
    }

    /// Apply the outcome of a fetch for `key`
    pub fn settle(&mut self, key: ListKey, result: Result<TodosPage, ApiError>) {
        match result {
            Ok(page) => {
                self.counts.insert(key.filters, page.count);
                let current = self.cache.resolve(key, page);
                log::debug!("[QUERY] page {} resolved (current: {})", key.page, current);
            }
            Err(err) => {
                log::error!("[QUERY] failed to load page {}: {}", key.page, err);
                self.cache.fail(key, err);
            }
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.cache.is_fetching()
    }

    pub fn state(&self) -> ListState {
        match self.cache.view() {
            CacheView::Loading => ListState::Loading,
            CacheView::Failed(_) => ListState::Failed {
                message: "Could not load todos.".to_string(),
            },
            CacheView::Ready { data, placeholder } => {
                let rows: Vec<Todo> = data.data.iter().take(self.page_size).cloned().collect();
                if rows.is_empty() {
                    ListState::Empty
                } else {
                    ListState::Populated { rows, stale: placeholder }
                }
            }
        }
    }

    /// Latest known total for the current filters, 0 when nothing is on screen.
    ///
    /// Falls back to the snapshot on screen while a new filter set loads.
    pub fn total_count(&self) -> usize {
        match self.cache.view() {
            CacheView::Ready { data, .. } => self
                .cache
                .current()
                .and_then(|key| self.counts.get(&key.filters).copied())
                .unwrap_or(data.count),
            _ => 0,
        }
    }
}

/// Fetch one list window from `source`
pub async fn fetch_page<S: TodoSource>(source: &S, key: ListKey, page_size: usize) -> Result<TodosPage, ApiError> {
    source.read_todos(&key.fetch_args(page_size)).await
}

// ========================
// Reactive Binder
// ========================

/// Reactive handle over `ListQuery`
#[derive(Clone, Copy)]
pub struct TodosQuery {
    query: RwSignal<ListQuery>,
    retry: Callback<()>,
}

impl TodosQuery {
    pub fn state(&self) -> ListState {
        self.query.with(|q| q.state())
    }

    pub fn total_count(&self) -> usize {
        self.query.with(|q| q.total_count())
    }

    pub fn page_size(&self) -> usize {
        self.query.with_untracked(|q| q.page_size())
    }

    /// A fetch for the current key is in flight
    pub fn is_fetching(&self) -> bool {
        self.query.with(|q| q.is_fetching())
    }

    pub fn retry(&self) {
        self.retry.run(());
    }
}

/// Keep a `ListQuery` in sync with `key` and with the invalidation counter.
///
/// A key change fetches unless the key has a fresh snapshot; any bump of
/// `version` (a mutation elsewhere) invalidates every snapshot.
pub fn use_todos_query<S>(source: S, key: Memo<ListKey>, version: ReadSignal<u32>, page_size: usize) -> TodosQuery
where
    S: TodoSource + Clone + Send + Sync + 'static,
{
    let query = RwSignal::new(ListQuery::new(page_size));

    let load = {
        let source = source.clone();
        move |key: ListKey| {
            let source = source.clone();
            spawn_local(async move {
                let result = fetch_page(&source, key, page_size).await;
                query.update(|q| q.settle(key, result));
            });
        }
    };

    let on_key = load.clone();
    Effect::new(move |_| {
        let key = key.get();
        if let Some(key) = query.try_update(|q| q.supersede(key)).flatten() {
            on_key(key);
        }
    });

    let on_version = load.clone();
    Effect::new(move |prev: Option<u32>| {
        let v = version.get();
        if prev.is_some_and(|p| p != v) {
            log::debug!("[QUERY] invalidated (version {})", v);
            if let Some(key) = query.try_update(|q| q.invalidate()).flatten() {
                on_version(key);
            }
        }
        v
    });

    let retry = Callback::new(move |_| {
        if let Some(key) = query.try_update(|q| q.retry()).flatten() {
            load(key);
        }
    });

    TodosQuery { query, retry }
}

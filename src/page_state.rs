//! Page State
//!
//! The list's page number and filters, persisted in the URL query so they
//! survive reload and back/forward navigation. The route component resolves
//! them once and hands a typed `PageState` to the list.

use std::fmt;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::api::ReadTodosArgs;
use crate::models::{TodoPriority, TodoStatus};

pub const PAGE_PARAM: &str = "page";
pub const STATUS_PARAM: &str = "status";
pub const PRIORITY_PARAM: &str = "priority";

/// Characters left unescaped in query keys and values
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// ========================
// Page
// ========================

/// A 1-based page number
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Page(usize);

impl Page {
    pub const FIRST: Page = Page(1);

    /// `None` for 0
    pub fn new(n: usize) -> Option<Self> {
        (n >= 1).then_some(Page(n))
    }

    /// Resolve a raw query value; anything that is not a positive integer is page 1
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<usize>().ok())
            .and_then(Page::new)
            .unwrap_or_default()
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Number of rows before this page, saturating at `usize::MAX`
    pub fn offset(self, page_size: usize) -> usize {
        (self.0 - 1).saturating_mul(page_size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ========================
// Filters
// ========================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListFilters {
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
}

impl ListFilters {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none()
    }
}

/// Everything the list view reads from the URL
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListParams {
    pub page: Page,
    pub filters: ListFilters,
}

impl ListParams {
    pub fn from_query(query: &QueryParams) -> Self {
        Self {
            page: Page::parse(query.get(PAGE_PARAM)),
            filters: ListFilters {
                status: query.get(STATUS_PARAM).and_then(TodoStatus::parse),
                priority: query.get(PRIORITY_PARAM).and_then(TodoPriority::parse),
            },
        }
    }

    /// Backend window for these parameters
    pub fn fetch_args(&self, page_size: usize) -> ReadTodosArgs {
        ReadTodosArgs {
            skip: self.page.offset(page_size),
            limit: page_size,
            status: self.filters.status,
            priority: self.filters.priority,
        }
    }
}

// ========================
// Query String
// ========================

/// Ordered `key=value` pairs of a URL query
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Parse `a=1&b=2`, with or without a leading `?`
    pub fn parse(search: &str) -> Self {
        let pairs = search
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        QueryParams(pairs)
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Replace `key` in place (or append it); `None` removes it
    pub fn set(&mut self, key: &str, value: Option<String>) {
        match value {
            Some(value) => {
                if let Some(slot) = self.0.iter_mut().find(|(k, _)| k == key) {
                    slot.1 = value;
                    self.dedup_key(key);
                } else {
                    self.0.push((key.to_string(), value));
                }
            }
            None => self.0.retain(|(k, _)| k != key),
        }
    }

    /// Keep only the first occurrence of `key`
    fn dedup_key(&mut self, key: &str) {
        let mut seen = false;
        self.0.retain(|(k, _)| {
            if k != key {
                return true;
            }
            let keep = !seen;
            seen = true;
            keep
        });
    }

    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, QUERY_ENCODE_SET),
                    utf8_percent_encode(v, QUERY_ENCODE_SET)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn decode_component(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

/// Merge the page into an existing query, keeping unrelated fields
pub fn with_page(search: &str, page: Page) -> String {
    let mut query = QueryParams::parse(search);
    query.set(PAGE_PARAM, Some(page.to_string()));
    query.to_query_string()
}

/// Merge filters into an existing query and restart at page 1
pub fn with_filters(search: &str, filters: ListFilters) -> String {
    let mut query = QueryParams::parse(search);
    query.set(STATUS_PARAM, filters.status.map(|s| s.as_str().to_string()));
    query.set(PRIORITY_PARAM, filters.priority.map(|p| p.as_str().to_string()));
    query.set(PAGE_PARAM, Some(Page::FIRST.to_string()));
    query.to_query_string()
}

// ========================
// Reactive State
// ========================

/// Typed list state handed to the list component
#[derive(Clone, Copy)]
pub struct PageState {
    pub params: Memo<ListParams>,
    pub set_page: Callback<Page>,
    pub set_filters: Callback<ListFilters>,
}

impl PageState {
    pub fn page(&self) -> Page {
        self.params.get().page
    }

    pub fn filters(&self) -> ListFilters {
        self.params.get().filters
    }
}

/// Bind `PageState` to the router's current location
pub fn use_page_state() -> PageState {
    let location = use_location();
    let search = location.search;
    let pathname = location.pathname;
    let navigate = use_navigate();

    let params = Memo::new(move |_| ListParams::from_query(&QueryParams::parse(&search.get())));

    let go = move |query: String| {
        let path = format!("{}?{}", pathname.get_untracked(), query);
        log::debug!("[PAGE] navigate to {}", path);
        navigate(&path, NavigateOptions::default());
    };

    let go_page = go.clone();
    let set_page = Callback::new(move |page: Page| {
        if params.get_untracked().page == page {
            return;
        }
        go_page(with_page(&search.get_untracked(), page));
    });

    let set_filters = Callback::new(move |filters: ListFilters| {
        if params.get_untracked().filters == filters {
            return;
        }
        go(with_filters(&search.get_untracked(), filters));
    });

    PageState { params, set_page, set_filters }
}

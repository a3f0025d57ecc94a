//! Leptos Pagination Control
//!
//! Previous / numbered pages / next control for paged tables.
//! Page numbers are 1-based; the parent owns the current page and
//! receives changes through a callback.

use leptos::prelude::*;

/// Sibling pages shown on each side of the current page
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// One slot in the rendered page list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number
    Page(usize),
    /// A gap standing in for skipped pages
    Ellipsis,
}

/// Number of pages needed to cover `count` items
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Compute visible page slots.
///
/// First and last pages are always visible, together with `sibling_count`
/// pages on each side of `current`. Collapsed ranges become `Ellipsis`.
pub fn page_items(current: usize, total: usize, sibling_count: usize) -> Vec<PageItem> {
    // first + last + current + two ellipses
    let slot_count = sibling_count * 2 + 5;
    if total <= slot_count {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let left_sibling = current.saturating_sub(sibling_count).max(1);
    let right_sibling = (current + sibling_count).min(total);

    let show_left_gap = left_sibling > 2;
    let show_right_gap = right_sibling < total - 1;
    let edge_run = slot_count - 2;

    let mut items = Vec::with_capacity(slot_count);
    match (show_left_gap, show_right_gap) {
        (false, true) => {
            items.extend((1..=edge_run).map(PageItem::Page));
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
        }
        (true, false) => {
            items.push(PageItem::Page(1));
            items.push(PageItem::Ellipsis);
            items.extend((total - edge_run + 1..=total).map(PageItem::Page));
        }
        _ => {
            items.push(PageItem::Page(1));
            items.push(PageItem::Ellipsis);
            items.extend((left_sibling..=right_sibling).map(PageItem::Page));
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
        }
    }
    items
}

/// Pagination control
///
/// # Arguments
/// * `count` - Total number of items across all pages
/// * `page_size` - Items per page
/// * `page` - Current page (1-based)
/// * `on_page_change` - Called with the requested page
#[component]
pub fn Pagination(
    #[prop(into)] count: Signal<usize>,
    page_size: usize,
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] on_page_change: Callback<usize>,
    #[prop(optional)] sibling_count: Option<usize>,
) -> impl IntoView {
    let siblings = sibling_count.unwrap_or(DEFAULT_SIBLING_COUNT);
    let total = move || total_pages(count.get(), page_size);
    let at_start = move || page.get() <= 1;
    let at_end = move || page.get() >= total();

    view! {
        <nav class="pagination" aria-label="pagination">
            <button
                class="pagination-prev"
                disabled=at_start
                on:click=move |_| {
                    if !at_start() {
                        on_page_change.run(page.get_untracked() - 1);
                    }
                }
            >
                "‹"
            </button>

            {move || {
                let current = page.get();
                page_items(current, total(), siblings)
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(n) => view! {
                            <button
                                class=if n == current { "pagination-item active" } else { "pagination-item" }
                                aria-current=if n == current { Some("page") } else { None }
                                on:click=move |_| {
                                    if n != current {
                                        on_page_change.run(n);
                                    }
                                }
                            >
                                {n}
                            </button>
                        }.into_any(),
                        PageItem::Ellipsis => view! {
                            <span class="pagination-ellipsis">"…"</span>
                        }.into_any(),
                    })
                    .collect_view()
            }}

            <button
                class="pagination-next"
                disabled=at_end
                on:click=move |_| {
                    if !at_end() {
                        on_page_change.run(page.get_untracked() + 1);
                    }
                }
            >
                "›"
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(total_pages(12, 0), 0);
    }

    #[test]
    fn test_few_pages_shows_all() {
        assert_eq!(page_items(2, 3, 1), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_items(1, 7, 1).len(), 7);
        assert!(page_items(1, 0, 1).is_empty());
    }

    #[test]
    fn test_gap_on_right_near_start() {
        assert_eq!(
            page_items(2, 10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_gap_on_left_near_end() {
        assert_eq!(
            page_items(9, 10, 1),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_gaps_on_both_sides() {
        assert_eq!(
            page_items(5, 10, 1),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(
            page_items(42, 10, 1),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }
}

//! Keyed Query Cache
//!
//! Snapshots keyed by request parameters, each with a freshness flag.
//! While the current key has no snapshot, the last snapshot that was on
//! screen is offered as a placeholder.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq)]
struct Entry<V> {
    data: V,
    fresh: bool,
}

/// What the cache can show for the current key
#[derive(Debug, Clone, PartialEq)]
pub enum CacheView<'a, V, E> {
    /// Nothing fetched yet and nothing to fall back on
    Loading,
    /// `placeholder` is set when `data` belongs to an earlier key
    Ready { data: &'a V, placeholder: bool },
    /// The last fetch for the current key failed
    Failed(&'a E),
}

#[derive(Debug, Clone)]
pub struct QueryCache<K, V, E> {
    entries: HashMap<K, Entry<V>>,
    /// Key the view currently asks for
    current: Option<K>,
    /// Key of the snapshot most recently shown for its own key
    displayed: Option<K>,
    in_flight: HashSet<K>,
    failures: HashMap<K, E>,
}

impl<K, V, E> Default for QueryCache<K, V, E> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            current: None,
            displayed: None,
            in_flight: HashSet::new(),
            failures: HashMap::new(),
        }
    }
}

impl<K, V, E> QueryCache<K, V, E>
where
    K: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Make `key` current. Returns `Some(key)` when the caller must fetch it.
    pub fn supersede(&mut self, key: K) -> Option<K> {
        self.current = Some(key);
        if self.entries.contains_key(&key) {
            self.displayed = Some(key);
        }
        if self.is_fresh(&key) || self.in_flight.contains(&key) {
            return None;
        }
        self.failures.remove(&key);
        self.begin(key)
    }

    /// Mark every snapshot stale. Returns the current key, which must be refetched.
    pub fn invalidate(&mut self) -> Option<K> {
        for entry in self.entries.values_mut() {
            entry.fresh = false;
        }
        let key = self.current?;
        self.failures.remove(&key);
        self.begin(key)
    }

    /// Forget the failure of the current key and fetch it again
    pub fn retry(&mut self) -> Option<K> {
        let key = self.current?;
        if self.in_flight.contains(&key) {
            return None;
        }
        self.failures.remove(&key);
        self.begin(key)
    }

    /// Store a successful fetch. Returns `true` if `key` is current.
    pub fn resolve(&mut self, key: K, data: V) -> bool {
        self.in_flight.remove(&key);
        self.failures.remove(&key);
        self.entries.insert(key, Entry { data, fresh: true });

        let is_current = self.current == Some(key);
        if is_current {
            self.displayed = Some(key);
        }
        is_current
    }

    /// Record a failed fetch. Returns `true` if `key` is current.
    pub fn fail(&mut self, key: K, error: E) -> bool {
        self.in_flight.remove(&key);
        self.failures.insert(key, error);
        self.current == Some(key)
    }

    pub fn is_fetching(&self) -> bool {
        self.current.is_some_and(|key| self.in_flight.contains(&key))
    }

    pub fn view(&self) -> CacheView<'_, V, E> {
        let Some(key) = self.current else {
            return CacheView::Loading;
        };
        if let Some(entry) = self.entries.get(&key) {
            return CacheView::Ready { data: &entry.data, placeholder: false };
        }
        if let Some(error) = self.failures.get(&key) {
            return CacheView::Failed(error);
        }
        match self.displayed.and_then(|k| self.entries.get(&k)) {
            Some(entry) => CacheView::Ready { data: &entry.data, placeholder: true },
            None => CacheView::Loading,
        }
    }

    fn is_fresh(&self, key: &K) -> bool {
        self.entries.get(key).is_some_and(|e| e.fresh)
    }

    fn begin(&mut self, key: K) -> Option<K> {
        self.in_flight.insert(key);
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Cache = QueryCache<u32, &'static str, String>;

    #[test]
    fn test_first_fetch_is_loading() {
        let mut cache = Cache::new();
        assert_eq!(cache.view(), CacheView::Loading);
        assert_eq!(cache.supersede(1), Some(1));
        assert_eq!(cache.view(), CacheView::Loading);
        assert!(cache.is_fetching());

        assert!(cache.resolve(1, "one"));
        assert_eq!(cache.view(), CacheView::Ready { data: &"one", placeholder: false });
        assert!(!cache.is_fetching());
    }

    #[test]
    fn test_key_change_keeps_previous_as_placeholder() {
        let mut cache = Cache::new();
        cache.supersede(1);
        cache.resolve(1, "one");

        assert_eq!(cache.supersede(2), Some(2));
        assert_eq!(cache.view(), CacheView::Ready { data: &"one", placeholder: true });

        cache.resolve(2, "two");
        assert_eq!(cache.view(), CacheView::Ready { data: &"two", placeholder: false });
    }

    #[test]
    fn test_cached_key_is_not_refetched() {
        let mut cache = Cache::new();
        cache.supersede(1);
        cache.resolve(1, "one");
        cache.supersede(2);
        cache.resolve(2, "two");

        assert_eq!(cache.supersede(1), None);
        assert_eq!(cache.view(), CacheView::Ready { data: &"one", placeholder: false });
    }

    #[test]
    fn test_in_flight_key_is_not_fetched_twice() {
        let mut cache = Cache::new();
        assert_eq!(cache.supersede(1), Some(1));
        assert_eq!(cache.supersede(1), None);
    }

    #[test]
    fn test_late_result_for_old_key_is_not_shown() {
        let mut cache = Cache::new();
        cache.supersede(1);
        cache.resolve(1, "one");
        cache.supersede(2);
        cache.supersede(3);

        // page 2 lands after the user already moved to page 3
        assert!(!cache.resolve(2, "two"));
        assert_eq!(cache.view(), CacheView::Ready { data: &"one", placeholder: true });

        assert!(cache.resolve(3, "three"));
        assert_eq!(cache.view(), CacheView::Ready { data: &"three", placeholder: false });
    }

    #[test]
    fn test_invalidate_refetches_current_and_keeps_rows() {
        let mut cache = Cache::new();
        cache.supersede(1);
        cache.resolve(1, "one");
        cache.supersede(2);
        cache.resolve(2, "two");

        assert_eq!(cache.invalidate(), Some(2));
        assert_eq!(cache.view(), CacheView::Ready { data: &"two", placeholder: false });
        cache.resolve(2, "two v2");

        // page 1 was invalidated too, so revisiting it refetches in the background
        assert_eq!(cache.supersede(1), Some(1));
        assert_eq!(cache.view(), CacheView::Ready { data: &"one", placeholder: false });
    }

    #[test]
    fn test_invalidate_without_current_key() {
        let mut cache = Cache::new();
        assert_eq!(cache.invalidate(), None);
        assert_eq!(cache.retry(), None);
    }

    #[test]
    fn test_failure_and_retry() {
        let mut cache = Cache::new();
        cache.supersede(1);
        assert!(cache.fail(1, "boom".to_string()));
        assert_eq!(cache.view(), CacheView::Failed(&"boom".to_string()));

        assert_eq!(cache.retry(), Some(1));
        assert_eq!(cache.retry(), None);
        assert_eq!(cache.view(), CacheView::Loading);
        cache.resolve(1, "one");
        assert_eq!(cache.view(), CacheView::Ready { data: &"one", placeholder: false });
    }

    #[test]
    fn test_revisiting_failed_key_fetches_again() {
        let mut cache = Cache::new();
        cache.supersede(1);
        cache.fail(1, "boom".to_string());
        cache.supersede(2);
        cache.resolve(2, "two");

        assert_eq!(cache.supersede(1), Some(1));
        assert_eq!(cache.view(), CacheView::Ready { data: &"two", placeholder: true });
    }

    #[test]
    fn test_failure_for_old_key_is_ignored_by_view() {
        let mut cache = Cache::new();
        cache.supersede(1);
        cache.resolve(1, "one");
        cache.supersede(2);
        cache.supersede(3);
        assert!(!cache.fail(2, "boom".to_string()));
        assert_eq!(cache.view(), CacheView::Ready { data: &"one", placeholder: true });
    }
}

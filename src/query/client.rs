//! The query client: cache entries, freshness, and pending fetches.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::QuerySnapshot;

/// Default staleness window: cached data older than this is refetched on
/// next access.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(60 * 5);

/// Default eviction window: entries unused this long are discarded.
pub const DEFAULT_EVICT_AFTER: Duration = Duration::from_secs(60 * 60);

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// One cached query. Data is type-erased so a single client can hold
/// heterogeneous datasets; readers downcast through [`QueryClient::query`].
struct Entry {
    data: Option<Arc<dyn Any + Send + Sync>>,
    error: Option<String>,
    fetched_at: Option<Instant>,
    last_used: Instant,
    in_flight: bool,
}

impl Entry {
    fn new() -> Self {
        Self {
            data: None,
            error: None,
            fetched_at: None,
            last_used: Instant::now(),
            in_flight: false,
        }
    }
}

// ---------------------------------------------------------------------------
// QueryClient
// ---------------------------------------------------------------------------

/// The process-wide query cache.
///
/// Constructed once at startup and passed down explicitly. All access is
/// single-threaded (the app loop); fetch tasks never touch the client —
/// they post results back as messages that the loop stores via
/// [`store`](Self::store).
pub struct QueryClient {
    stale_after: Duration,
    evict_after: Duration,
    entries: HashMap<String, Entry>,
    pending: Vec<String>,
}

impl QueryClient {
    /// Create a client with explicit staleness and eviction windows.
    pub fn new(stale_after: Duration, evict_after: Duration) -> Self {
        Self {
            stale_after,
            evict_after,
            entries: HashMap::new(),
            pending: Vec::new(),
        }
    }

    /// Create a client with the default windows (stale after 5 minutes,
    /// evicted after 60 minutes of disuse).
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_STALE_AFTER, DEFAULT_EVICT_AFTER)
    }

    /// Read a query, recording a fetch if the entry is missing or stale.
    ///
    /// Touches the entry's last-used time. Stale data is still served while
    /// the refetch is pending. A failed entry stays failed until something
    /// explicitly prefetches or invalidates it — the page never retries on
    /// its own.
    pub fn query<T: Send + Sync + 'static>(&mut self, key: &str) -> QuerySnapshot<T> {
        self.ensure_requested(key);
        let stale_after = self.stale_after;
        let Some(entry) = self.entries.get_mut(key) else {
            return QuerySnapshot::loading();
        };
        entry.last_used = Instant::now();

        if let Some(data) = &entry.data {
            if let Ok(typed) = Arc::clone(data).downcast::<T>() {
                if let Some(fetched_at) = entry.fetched_at {
                    if fetched_at.elapsed() >= stale_after && !entry.in_flight {
                        // Stale: serve the data, queue a refetch.
                        entry.in_flight = true;
                        self.pending.push(key.to_owned());
                    }
                }
                return QuerySnapshot::ready(typed);
            }
        }
        if let Some(error) = &entry.error {
            return QuerySnapshot::error(error.clone());
        }
        QuerySnapshot::loading()
    }

    /// Warm a query without reading it: record a fetch if the entry is
    /// missing or stale. This is the preload-on-intent entry point.
    pub fn prefetch(&mut self, key: &str) {
        self.ensure_requested(key);
        let stale_after = self.stale_after;
        if let Some(entry) = self.entries.get_mut(key) {
            if let Some(fetched_at) = entry.fetched_at {
                if fetched_at.elapsed() >= stale_after && !entry.in_flight {
                    entry.in_flight = true;
                    self.pending.push(key.to_owned());
                }
            }
        }
    }

    /// Force the next access to refetch, clearing any cached error.
    pub fn invalidate(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.fetched_at = None;
            entry.error = None;
            if !entry.in_flight {
                entry.in_flight = true;
                self.pending.push(key.to_owned());
            }
        }
    }

    /// Store a fetch result, replacing any previous data or error.
    pub fn store<T: Send + Sync + 'static>(&mut self, key: &str, result: Result<T, String>) {
        let entry = self.entries.entry(key.to_owned()).or_insert_with(Entry::new);
        entry.in_flight = false;
        match result {
            Ok(data) => {
                entry.data = Some(Arc::new(data));
                entry.error = None;
                entry.fetched_at = Some(Instant::now());
            }
            Err(message) => {
                // A failed refetch of existing data keeps the data.
                if entry.data.is_none() {
                    entry.error = Some(message);
                }
                entry.fetched_at = Some(Instant::now());
            }
        }
    }

    /// Drain the keys waiting for a fetch task.
    pub fn take_pending(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    /// Evict entries unused for longer than the eviction window.
    pub fn sweep(&mut self) {
        let evict_after = self.evict_after;
        self.entries
            .retain(|_, entry| entry.in_flight || entry.last_used.elapsed() < evict_after);
    }

    /// Whether an entry exists for the key.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert the entry and queue its first fetch if it does not exist yet.
    fn ensure_requested(&mut self, key: &str) {
        if !self.entries.contains_key(key) {
            let mut entry = Entry::new();
            entry.in_flight = true;
            self.entries.insert(key.to_owned(), entry);
            self.pending.push(key.to_owned());
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const NEVER: Duration = Duration::from_secs(60 * 60 * 24);
    const NOW: Duration = Duration::ZERO;

    fn fresh_client() -> QueryClient {
        QueryClient::new(NEVER, NEVER)
    }

    // ── First access ─────────────────────────────────────────────────

    #[test]
    fn first_access_is_loading_and_records_fetch() {
        let mut client = fresh_client();
        let snapshot = client.query::<Vec<i32>>("nums");
        assert!(snapshot.is_loading);
        assert!(snapshot.data.is_none());
        assert_eq!(client.take_pending(), vec!["nums".to_owned()]);
    }

    #[test]
    fn repeated_access_does_not_duplicate_fetch() {
        let mut client = fresh_client();
        let _ = client.query::<Vec<i32>>("nums");
        let _ = client.query::<Vec<i32>>("nums");
        assert_eq!(client.take_pending().len(), 1);
        assert!(client.take_pending().is_empty());
    }

    // ── Store and read back ──────────────────────────────────────────

    #[test]
    fn stored_data_is_served_fresh_without_refetch() {
        let mut client = fresh_client();
        let _ = client.query::<Vec<i32>>("nums");
        client.take_pending();
        client.store("nums", Ok(vec![1, 2, 3]));

        let snapshot = client.query::<Vec<i32>>("nums");
        assert!(!snapshot.is_loading);
        assert!(!snapshot.is_error);
        assert_eq!(*snapshot.data.unwrap(), vec![1, 2, 3]);
        assert!(client.take_pending().is_empty());
    }

    #[test]
    fn stored_error_is_served_and_terminal() {
        let mut client = fresh_client();
        let _ = client.query::<Vec<i32>>("nums");
        client.take_pending();
        client.store::<Vec<i32>>("nums", Err("boom".into()));

        let snapshot = client.query::<Vec<i32>>("nums");
        assert!(snapshot.is_error);
        assert_eq!(snapshot.error.as_deref(), Some("boom"));
        // No automatic retry.
        assert!(client.take_pending().is_empty());
    }

    // ── Staleness ────────────────────────────────────────────────────

    #[test]
    fn stale_entry_serves_data_and_queues_refetch() {
        let mut client = QueryClient::new(NOW, NEVER);
        let _ = client.query::<Vec<i32>>("nums");
        client.take_pending();
        client.store("nums", Ok(vec![9]));

        let snapshot = client.query::<Vec<i32>>("nums");
        assert_eq!(*snapshot.data.unwrap(), vec![9]);
        assert_eq!(client.take_pending(), vec!["nums".to_owned()]);
    }

    #[test]
    fn prefetch_missing_key_records_fetch() {
        let mut client = fresh_client();
        client.prefetch("posts");
        assert_eq!(client.take_pending(), vec!["posts".to_owned()]);
    }

    #[test]
    fn prefetch_fresh_entry_is_noop() {
        let mut client = fresh_client();
        client.prefetch("posts");
        client.take_pending();
        client.store("posts", Ok(vec![1]));
        client.prefetch("posts");
        assert!(client.take_pending().is_empty());
    }

    // ── Invalidation ─────────────────────────────────────────────────

    #[test]
    fn invalidate_clears_error_and_queues_refetch() {
        let mut client = fresh_client();
        let _ = client.query::<Vec<i32>>("nums");
        client.take_pending();
        client.store::<Vec<i32>>("nums", Err("boom".into()));

        client.invalidate("nums");
        assert_eq!(client.take_pending(), vec!["nums".to_owned()]);
        let snapshot = client.query::<Vec<i32>>("nums");
        assert!(snapshot.is_loading);
    }

    // ── Eviction ─────────────────────────────────────────────────────

    #[test]
    fn sweep_evicts_unused_entries() {
        let mut client = QueryClient::new(NEVER, NOW);
        let _ = client.query::<Vec<i32>>("nums");
        client.take_pending();
        client.store("nums", Ok(vec![1]));

        client.sweep();
        assert!(!client.contains("nums"));
    }

    #[test]
    fn sweep_keeps_entries_inside_window() {
        let mut client = QueryClient::new(NEVER, NEVER);
        let _ = client.query::<Vec<i32>>("nums");
        client.sweep();
        assert!(client.contains("nums"));
    }

    #[test]
    fn failed_refetch_keeps_existing_data() {
        let mut client = QueryClient::new(NOW, NEVER);
        let _ = client.query::<Vec<i32>>("nums");
        client.take_pending();
        client.store("nums", Ok(vec![1]));
        let _ = client.query::<Vec<i32>>("nums");
        client.take_pending();
        client.store::<Vec<i32>>("nums", Err("flaky".into()));

        let snapshot = client.query::<Vec<i32>>("nums");
        assert_eq!(*snapshot.data.unwrap(), vec![1]);
        assert!(!snapshot.is_error);
    }
}

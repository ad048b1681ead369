//! Per-ID widget state
//!
//! Each widget kind gets its own [`Store`]. Entries are created on first
//! touch, so an unknown ID is never an error. Every entry sits behind its own
//! lock: updates to one ID are serialized, different IDs never contend beyond
//! the map shard lookup.

use dashmap::DashMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

pub struct Store<S> {
    entries: Arc<DashMap<String, Arc<RwLock<S>>>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<S> Default for Store<S> {
    fn default() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }
}

impl<S> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl<S: Clone + Send + Sync + 'static> Store<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lock for `id`, created with `init` on first touch. The map guard
    /// is dropped before this returns.
    fn slot(&self, id: &str, init: impl FnOnce() -> S) -> Arc<RwLock<S>> {
        if let Some(existing) = self.entries.get(id) {
            return Arc::clone(existing.value());
        }
        let entry = self
            .entries
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(RwLock::new(init())));
        Arc::clone(entry.value())
    }

    /// Current state for `id`.
    pub fn snapshot(&self, id: &str, init: impl FnOnce() -> S) -> S {
        self.slot(id, init).read().clone()
    }

    /// Mutate under the write lock and return a snapshot for rendering.
    pub fn update(&self, id: &str, init: impl FnOnce() -> S, f: impl FnOnce(&mut S)) -> S {
        self.update_with(id, init, f).1
    }

    /// Like [`Store::update`], also returning what the closure computed.
    pub fn update_with<R>(
        &self,
        id: &str,
        init: impl FnOnce() -> S,
        f: impl FnOnce(&mut S) -> R,
    ) -> (R, S) {
        let slot = self.slot(id, init);
        let mut guard = slot.write();
        let out = f(&mut guard);
        (out, guard.clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_touch_initializes() {
        let store: Store<u32> = Store::new();
        assert!(!store.contains("a"));
        assert_eq!(store.snapshot("a", || 7), 7);
        assert!(store.contains("a"));
        // init is not consulted again
        assert_eq!(store.snapshot("a", || 99), 7);
    }

    #[test]
    fn ids_are_independent() {
        let store: Store<Vec<&'static str>> = Store::new();
        store.update("a", Vec::new, |v| v.push("x"));
        store.update("b", Vec::new, |v| v.push("y"));
        assert_eq!(store.snapshot("a", Vec::new), vec!["x"]);
        assert_eq!(store.snapshot("b", Vec::new), vec!["y"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_with_returns_closure_result() {
        let store: Store<i64> = Store::new();
        let (changed, state) = store.update_with("n", || 1, |n| {
            *n += 1;
            true
        });
        assert!(changed);
        assert_eq!(state, 2);
    }

    #[test]
    fn snapshots_are_detached() {
        let store: Store<String> = Store::new();
        let before = store.snapshot("s", || "old".to_string());
        store.update("s", String::new, |s| *s = "new".to_string());
        assert_eq!(before, "old");
        assert_eq!(store.snapshot("s", String::new), "new");
    }

    #[test]
    fn slot_is_stable_for_the_life_of_the_store() {
        let store: Store<u32> = Store::new();
        let held = store.slot("a", || 0);
        store.update("a", || 0, |n| *n = 5);
        assert!(Arc::ptr_eq(&held, &store.slot("a", || 0)));
        assert_eq!(*held.read(), 5);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_updates_are_serialized() {
        let store: Store<u64> = Store::new();
        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    for _ in 0..250 {
                        store.update("counter", || 0, |n| *n += 1);
                    }
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(store.snapshot("counter", || 0), 4000);
    }
}

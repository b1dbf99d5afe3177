use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Key/value store abstraction for the in-memory host records.
pub trait KeyValueStore<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;
    fn upsert(&self, key: K, value: V);
    fn list(&self) -> Vec<V>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> KeyValueStore<K, V> for Arc<S>
where
    S: KeyValueStore<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn upsert(&self, key: K, value: V) {
        (**self).upsert(key, value)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory store for tests/dev.
#[derive(Debug)]
pub struct InMemoryStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K, V> InMemoryStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> InMemoryStore<K, V>
where
    K: Eq + Hash,
{
    /// Apply `f` to the stored value under the write lock.
    ///
    /// Returns `None` when the key is absent.
    pub fn update<R>(&self, key: &K, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        let mut map = self.inner.write().ok()?;
        map.get_mut(key).map(f)
    }

    /// Insert the entry built by `make` unless a stored value `conflicts`.
    ///
    /// The check and the insert happen under one write lock; `make` only runs
    /// when nothing conflicts. Returns `Some(true)` when inserted,
    /// `Some(false)` on conflict and `None` when the lock is poisoned.
    pub fn insert_unless(
        &self,
        conflicts: impl Fn(&V) -> bool,
        make: impl FnOnce() -> (K, V),
    ) -> Option<bool> {
        let mut map = self.inner.write().ok()?;
        if map.values().any(conflicts) {
            return Some(false);
        }
        let (key, value) = make();
        map.insert(key, value);
        Some(true)
    }
}

impl<K, V> KeyValueStore<K, V> for InMemoryStore<K, V>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().ok()?;
        map.get(key).cloned()
    }

    fn upsert(&self, key: K, value: V) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(key, value);
        }
    }

    fn list(&self) -> Vec<V> {
        match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => vec![],
        }
    }

    fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }
}

/// Monotonic id source; the first id handed out is 1.
#[derive(Debug, Default)]
pub struct IdSequence(AtomicU64);

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_get_and_update() {
        let store: InMemoryStore<u64, String> = InMemoryStore::new();
        assert!(store.is_empty());

        store.upsert(1, "a".to_string());
        assert_eq!(store.get(&1).as_deref(), Some("a"));

        assert_eq!(store.update(&1, |v| v.push('b')), Some(()));
        assert_eq!(store.get(&1).as_deref(), Some("ab"));
        assert_eq!(store.update(&2, |v| v.push('b')), None);
    }

    #[test]
    fn insert_unless_skips_conflicting_values() {
        let store: InMemoryStore<u64, String> = InMemoryStore::new();
        assert_eq!(store.insert_unless(|v| v == "a", || (1, "a".to_string())), Some(true));

        let mut built = false;
        let inserted = store.insert_unless(
            |v| v == "a",
            || {
                built = true;
                (2, "a".to_string())
            },
        );
        assert_eq!(inserted, Some(false));
        assert!(!built);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sequence_starts_at_one() {
        let seq = IdSequence::new();
        assert_eq!(seq.next(), 1);
        assert_eq!(seq.next(), 2);
    }
}

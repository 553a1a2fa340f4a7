use dashmap::DashMap;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::UtilError;
use crate::key::cache_key;

/// Caches the results of a function, keyed by its serialized arguments
///
/// Keys are the canonical JSON encoding of the argument value, so argument
/// lists that differ in order or in type (`1` vs `"1"` vs `1.0`) get separate
/// entries. Map arguments are keyed with their entries sorted, so equal maps
/// share an entry. Pass several arguments as a tuple.
///
/// The cache belongs to this wrapper alone, grows without bound and is never
/// evicted. Lookups and inserts go through a `DashMap`, so a memoizer can be
/// shared between threads. Two threads missing on the same key at the same
/// time may both run the target; the first stored result is kept and
/// returned to both.
///
/// # Example
///
/// ```rust
/// use utilkit_core::Memoizer;
///
/// let square = Memoizer::new(|n: &u64| n * n);
///
/// assert_eq!(square.call(&12).unwrap(), 144); // computed
/// assert_eq!(square.call(&12).unwrap(), 144); // cache hit
/// assert_eq!(square.hits(), 1);
/// ```
pub struct Memoizer<A: ?Sized, R, F> {
    target: F,
    cache: DashMap<String, R>,
    hits: AtomicUsize,
    misses: AtomicUsize,
    _args: PhantomData<fn(&A)>,
}

impl<A, R, F> Memoizer<A, R, F>
where
    A: Serialize + ?Sized,
    R: Clone,
    F: Fn(&A) -> R,
{
    /// Wraps `target` with an empty cache
    pub fn new(target: F) -> Self {
        Self {
            target,
            cache: DashMap::new(),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            _args: PhantomData,
        }
    }

    /// Returns the cached result for `args`, computing and storing it first
    /// if this is the first call with these arguments
    ///
    /// # Errors
    ///
    /// Returns `UtilError::KeySerialization` if `args` cannot be encoded as
    /// JSON (for example a map with non-string keys) or holds a NaN or
    /// infinite float. The target is not called in that case.
    pub fn call(&self, args: &A) -> Result<R, UtilError> {
        let key = cache_key(args)?;

        if let Some(cached) = self.cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(%key, "cache hit");
            return Ok(cached.value().clone());
        }

        // Computed outside the map lock so the target may use this memoizer
        let result = (self.target)(args);
        self.misses.fetch_add(1, Ordering::Relaxed);

        let stored = self.cache.entry(key.clone()).or_insert(result).value().clone();
        tracing::debug!(%key, "stored in cache");
        Ok(stored)
    }

    /// Returns `true` if a result for `args` is already cached
    pub fn contains(&self, args: &A) -> bool {
        cache_key(args)
            .map(|key| self.cache.contains_key(&key))
            .unwrap_or(false)
    }
}

impl<A: ?Sized, R, F> Memoizer<A, R, F> {
    /// Number of calls answered from the cache
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of calls that ran the target
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Number of cached results
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if nothing has been cached yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

//! Memoization for derived views.
//!
//! Selectors are plain functions over state. The expensive ones (filtered
//! catalog, sorted news) are wrapped in a [`Memo`] keyed by their inputs.
//! Large inputs are keyed by [`Identity`], which compares `Arc` pointers
//! instead of contents, so an unchanged list costs one pointer comparison.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Pointer-equality key over shared data.
pub struct Identity<T>(Arc<T>);

impl<T> Identity<T> {
    /// Key on this exact allocation
    #[must_use]
    pub fn of(value: &Arc<T>) -> Self {
        Self(Arc::clone(value))
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> PartialEq for Identity<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for Identity<T> {}

impl<T> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({:p})", Arc::as_ptr(&self.0))
    }
}

/// Single-entry cache: recompute only when the key changes.
pub struct Memo<K, V> {
    last: Mutex<Option<(K, Arc<V>)>>,
    recomputations: AtomicUsize,
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Empty cache
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: Mutex::new(None),
            recomputations: AtomicUsize::new(0),
        }
    }

    /// Cached value for `key`, computing it with `compute` on a miss.
    pub fn get_or_compute(&self, key: K, compute: impl FnOnce() -> V) -> Arc<V> {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((cached_key, value)) = last.as_ref() {
            if *cached_key == key {
                return Arc::clone(value);
            }
        }

        let value = Arc::new(compute());
        self.recomputations.fetch_add(1, Ordering::Relaxed);
        *last = Some((key, Arc::clone(&value)));
        value
    }

    /// How many times the value was (re)computed
    pub fn recomputations(&self) -> usize {
        self.recomputations.load(Ordering::Relaxed)
    }

    /// Drop the cached entry
    pub fn clear(&self) {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl<K: PartialEq, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Memo<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("recomputations", &self.recomputations.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

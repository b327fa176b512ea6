// std imports
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// workspace imports
use wildcard::Pattern;

// local imports
use crate::error::Result;

// ---

/// Thread-safe cache of compiled patterns keyed by pattern string.
///
/// Lookups take a shared lock. A missing pattern is compiled without holding any lock
/// and then inserted under an exclusive lock, keeping the entry inserted first.
/// Two threads missing the same pattern at once may both compile it, which is harmless
/// because compilation is a pure function of the pattern string.
///
/// Entries are never evicted, only [`PatternCache::clear`] removes them.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: RwLock<HashMap<String, Arc<Pattern>>>,
    compilations: AtomicUsize,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            patterns: RwLock::new(HashMap::with_capacity(capacity)),
            compilations: AtomicUsize::new(0),
        }
    }

    /// Returns the compiled pattern for `raw`, compiling it on first use.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Pattern::new`].
    pub fn get(&self, raw: &str) -> Arc<Pattern> {
        if let Some(pattern) = self.lookup(raw) {
            return pattern;
        }
        self.insert(raw, Pattern::new(raw))
    }

    /// Returns the compiled pattern for `raw`, compiling it on first use.
    pub fn try_get(&self, raw: &str) -> Result<Arc<Pattern>> {
        if let Some(pattern) = self.lookup(raw) {
            return Ok(pattern);
        }
        Ok(self.insert(raw, Pattern::try_new(raw)?))
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.read().contains_key(raw)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Removes all cached patterns.
    pub fn clear(&self) {
        let mut patterns = self.write();
        let capacity = patterns.capacity();
        *patterns = HashMap::with_capacity(capacity);
        log::debug!("pattern cache cleared");
    }

    /// Returns the number of compilations performed by this cache so far.
    pub fn compilations(&self) -> usize {
        self.compilations.load(Ordering::Relaxed)
    }

    fn lookup(&self, raw: &str) -> Option<Arc<Pattern>> {
        self.read().get(raw).cloned()
    }

    fn insert(&self, raw: &str, pattern: Pattern) -> Arc<Pattern> {
        self.compilations.fetch_add(1, Ordering::Relaxed);
        log::trace!("compiled pattern {raw:?} as {:?}", pattern.kind());

        self.write()
            .entry(raw.to_owned())
            .or_insert_with(|| Arc::new(pattern))
            .clone()
    }

    // The map is never left in a partially updated state, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Pattern>>> {
        self.patterns.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Pattern>>> {
        self.patterns.write().unwrap_or_else(PoisonError::into_inner)
    }
}

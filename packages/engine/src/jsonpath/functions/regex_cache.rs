//! Bounded cache of compiled regular expressions
//!
//! Least recently used patterns are evicted once the cache is full. The cache
//! sits behind a mutex so one compiled query can be evaluated from several
//! threads at once.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use lru::LruCache;
use regex::Regex;

pub struct RegexCache {
    entries: Option<Mutex<LruCache<String, Regex>>>,
}

impl RegexCache {
    /// A cache holding up to `capacity` patterns. Zero disables caching.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(|capacity| Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Get compiled regex from cache or compile and cache if not present
    ///
    /// # Errors
    ///
    /// Returns the `regex` crate's error if `pattern` does not compile.
    pub fn get_or_compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        let Some(entries) = &self.entries else {
            return Regex::new(pattern);
        };

        if let Some(regex) = lock(entries).get(pattern) {
            return Ok(regex.clone());
        }

        let regex = Regex::new(pattern)?;
        lock(entries).put(pattern.to_string(), regex.clone());
        Ok(regex)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| lock(entries).len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries
            .as_ref()
            .map_or(0, |entries| lock(entries).cap().get())
    }
}

impl std::fmt::Debug for RegexCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegexCache")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish()
    }
}

// A panic while holding the lock cannot leave the cache inconsistent.
fn lock(entries: &Mutex<LruCache<String, Regex>>) -> MutexGuard<'_, LruCache<String, Regex>> {
    entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

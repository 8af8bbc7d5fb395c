use crate::domain::{DiffLine, DiffMode};
use crate::infra::hash::hash64;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

type CacheKey = (u64, u64, DiffMode);

/// Memoized diff results keyed on the hashes of both texts.
#[derive(Clone)]
pub struct DiffCache(Arc<Mutex<LruCache<CacheKey, Arc<[DiffLine]>>>>);

impl Default for DiffCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl DiffCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self(Arc::new(Mutex::new(LruCache::new(capacity))))
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<[DiffLine]>> {
        self.0.lock().get(key).cloned()
    }

    pub fn insert(&self, key: CacheKey, lines: Arc<[DiffLine]>) {
        self.0.lock().put(key, lines);
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn diff_cached(
    original: &str,
    modified: &str,
    mode: DiffMode,
    cache: &DiffCache,
) -> Arc<[DiffLine]> {
    let key = (hash64(original), hash64(modified), mode);

    if let Some(cached) = cache.get(&key) {
        return cached;
    }

    let lines: Arc<[DiffLine]> = Arc::from(super::diff(original, modified, mode));
    cache.insert(key, lines.clone());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_inputs_hit_the_cache() {
        let cache = DiffCache::new();
        let first = diff_cached("a\nb", "a\nc", DiffMode::Positional, &cache);
        let second = diff_cached("a\nb", "a\nc", DiffMode::Positional, &cache);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_mode_is_part_of_the_key() {
        let cache = DiffCache::new();
        diff_cached("a", "b", DiffMode::Positional, &cache);
        diff_cached("a", "b", DiffMode::Minimal, &cache);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let cache = DiffCache::with_capacity(NonZeroUsize::new(1).unwrap());
        diff_cached("a", "b", DiffMode::Positional, &cache);
        diff_cached("c", "d", DiffMode::Positional, &cache);
        assert_eq!(cache.len(), 1);
        assert!(
            cache
                .get(&(hash64("a"), hash64("b"), DiffMode::Positional))
                .is_none()
        );
    }
}

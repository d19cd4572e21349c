//! Generic asynchronous lookup-through cache contract
//!
//! Gemel services consult shared, read-mostly caches whose population,
//! eviction, and invalidation policy live with the cache implementation.
//! This crate fixes only the contract those services rely on:
//!
//! - [`CacheEntry`]: the two-variant entry model in which confirmed absence
//!   (`Nonexistent`) is a first-class, cacheable value distinct from an
//!   uncached/unknown state.
//! - [`Cache`]: the object-safe asynchronous `get` interface, where `None`
//!   means the cache had no information at all for the key.
//!
//! The crate is fully generic over keys and values and has no dependency on
//! the rest of the platform.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

/// Two-variant cache entry model
pub mod entry;

pub use entry::CacheEntry;

use async_trait::async_trait;

/// Asynchronous lookup-through cache
///
/// Implementations own entry lifetimes end to end: loading on miss, eviction,
/// invalidation, and any TTL applied to negative entries. Callers only read.
///
/// # Contract
///
/// - `get` returns `None` when the cache holds no information for the key,
///   a transient/unknown state that can legitimately be observed while an
///   invalidation (for example a tenant-namespace block) races the lookup.
/// - `get` returns `Some(entry)` for a confirmed outcome, where the entry is
///   either a present value or a negative ([`CacheEntry::Nonexistent`])
///   record.
/// - Repeated `get` calls for the same key must be idempotent and free of
///   caller-visible side effects; callers may retry at any time.
#[async_trait]
pub trait Cache<K, V>: Send + Sync
where
    K: Sync,
    V: Send,
{
    /// Look up the entry for `key`, loading it if the implementation does so
    async fn get(&self, key: &K) -> Option<CacheEntry<V>>;
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Minimal map-backed cache: absent key = no information.
    struct MapCache {
        entries: HashMap<String, CacheEntry<u32>>,
    }

    #[async_trait]
    impl Cache<String, u32> for MapCache {
        async fn get(&self, key: &String) -> Option<CacheEntry<u32>> {
            self.entries.get(key).cloned()
        }
    }

    #[tokio::test]
    async fn test_get_distinguishes_unknown_from_negative() {
        let mut entries = HashMap::new();
        entries.insert("present".to_string(), CacheEntry::Exists(1));
        entries.insert("absent".to_string(), CacheEntry::Nonexistent);
        let cache = MapCache { entries };

        assert_eq!(
            cache.get(&"present".to_string()).await,
            Some(CacheEntry::Exists(1))
        );
        assert_eq!(
            cache.get(&"absent".to_string()).await,
            Some(CacheEntry::Nonexistent)
        );
        // No entry at all: the cache has no information for the key.
        assert_eq!(cache.get(&"unknown".to_string()).await, None);
    }
}

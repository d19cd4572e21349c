//! Two-variant cache entry model
//!
//! An entry either holds a value or records confirmed absence. Negative
//! entries let a cache remember that a lookup has already failed, so repeated
//! misses for the same key do not re-trigger loading.

use serde::{Deserialize, Serialize};

/// A cache entry: a present value or a confirmed-absent record
///
/// Entries are immutable once created. `Nonexistent` asserts that the keyed
/// resource is known not to exist; it is distinct from the cache having no
/// information at all, which the [`Cache`](crate::Cache) trait models as
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CacheEntry<V> {
    /// The keyed resource exists and this is its cached value
    Exists(V),
    /// The keyed resource is confirmed not to exist
    Nonexistent,
}

impl<V> CacheEntry<V> {
    /// Whether this entry holds a value
    pub fn exists(&self) -> bool {
        matches!(self, Self::Exists(_))
    }

    /// The held value, if present
    pub fn get(&self) -> Option<&V> {
        match self {
            Self::Exists(value) => Some(value),
            Self::Nonexistent => None,
        }
    }

    /// The held value
    ///
    /// # Panics
    ///
    /// Panics if the entry is `Nonexistent`. Accessing the value of a
    /// negative entry is a contract violation; check [`exists`](Self::exists)
    /// or use [`get`](Self::get) first.
    pub fn value(&self) -> &V {
        match self {
            Self::Exists(value) => value,
            Self::Nonexistent => panic!("accessed value of a nonexistent cache entry"),
        }
    }

    /// Consume the entry, returning the held value
    ///
    /// # Panics
    ///
    /// Panics if the entry is `Nonexistent`, as [`value`](Self::value) does.
    pub fn into_value(self) -> V {
        match self {
            Self::Exists(value) => value,
            Self::Nonexistent => panic!("accessed value of a nonexistent cache entry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists_entry_exposes_value() {
        let entry = CacheEntry::Exists(7);
        assert!(entry.exists());
        assert_eq!(entry.get(), Some(&7));
        assert_eq!(*entry.value(), 7);
        assert_eq!(entry.into_value(), 7);
    }

    #[test]
    fn test_nonexistent_entry_has_no_value() {
        let entry: CacheEntry<u32> = CacheEntry::Nonexistent;
        assert!(!entry.exists());
        assert_eq!(entry.get(), None);
    }

    #[test]
    #[should_panic(expected = "nonexistent cache entry")]
    fn test_value_of_nonexistent_entry_panics() {
        let entry: CacheEntry<u32> = CacheEntry::Nonexistent;
        let _ = entry.value();
    }
}

//! Tagged resolution outcomes
//!
//! Callers that prefer matching on a value over passing a continuation use
//! [`Resolution`], the tagged form of the entry pair a retrieval handler
//! receives. The two forms carry the same information; see
//! [`Resolution::from_entries`] for the mapping.

use gemel_cache::CacheEntry;
use gemel_core::EntityRef;

/// Outcome of resolving the enforcer for an entity reference
///
/// A transient "no information" answer from either cache tier is collapsed
/// into the corresponding miss variant; for security-sensitive decisions a
/// miss must be treated as "unknown, proceed conservatively".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<E> {
    /// The reference cache had no entry (or no information) for the entity
    ReferenceMiss,
    /// The entity maps to an enforcer reference, but the enforcer cache had
    /// no entry (or no information) for it
    EnforcerMiss {
        /// Reference of the enforcer that should govern the entity
        enforcer_ref: EntityRef,
    },
    /// The governing enforcer was materialized
    Resolved {
        /// Reference of the governing enforcer
        enforcer_ref: EntityRef,
        /// The enforcer itself
        enforcer: E,
    },
}

impl<E> Resolution<E> {
    /// Build a resolution from the entry pair a retrieval handler receives
    ///
    /// The pair only ever takes the documented combinations: a nonexistent
    /// reference entry always comes with a nonexistent enforcer entry.
    pub fn from_entries(
        reference_entry: CacheEntry<EntityRef>,
        enforcer_entry: CacheEntry<E>,
    ) -> Self {
        match (reference_entry, enforcer_entry) {
            (CacheEntry::Nonexistent, _) => Self::ReferenceMiss,
            (CacheEntry::Exists(enforcer_ref), CacheEntry::Nonexistent) => {
                Self::EnforcerMiss { enforcer_ref }
            }
            (CacheEntry::Exists(enforcer_ref), CacheEntry::Exists(enforcer)) => Self::Resolved {
                enforcer_ref,
                enforcer,
            },
        }
    }

    /// The resolved enforcer, if any
    pub fn enforcer(&self) -> Option<&E> {
        match self {
            Self::Resolved { enforcer, .. } => Some(enforcer),
            _ => None,
        }
    }

    /// The enforcer reference, when the reference lookup succeeded
    pub fn enforcer_ref(&self) -> Option<&EntityRef> {
        match self {
            Self::EnforcerMiss { enforcer_ref } | Self::Resolved { enforcer_ref, .. } => {
                Some(enforcer_ref)
            }
            Self::ReferenceMiss => None,
        }
    }
}

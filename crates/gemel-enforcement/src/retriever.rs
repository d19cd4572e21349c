//! The two-tier retrieval algorithm
//!
//! [`EnforcerRetriever`] resolves the enforcer governing an entity by chaining
//! a reference-cache lookup with an enforcer-cache lookup, and hands whatever
//! it found to a caller-supplied handler. The handler is invoked exactly once
//! per call, always with concrete [`CacheEntry`] values; missing data arrives
//! as `Nonexistent`, never as an absent argument.
//!
//! Both lookups are non-blocking and read-only. Because the caches are
//! invalidated concurrently with lookups (a tenant-namespace block may remove
//! entries mid-flight), a lookup can legitimately observe "no information";
//! that outcome is logged at info level and handled as a transient negative,
//! not as an error. Calls are idempotent and safe to retry with the same
//! arguments.

use std::future::Future;
use std::sync::Arc;

use gemel_cache::{Cache, CacheEntry};
use gemel_core::{EntityRef, GemelError, ResourceType, Result};

use crate::registry::{EnforcerCache, EnforcerCacheRegistry};
use crate::resolution::Resolution;

// =============================================================================
// Cache selection
// =============================================================================

/// How the retriever picks the enforcer cache for a resource type.
enum CacheSelector<E> {
    /// One cache serves every resource type.
    Fixed(EnforcerCache<E>),
    /// One cache per registered resource type.
    Registry(EnforcerCacheRegistry<E>),
}

impl<E: Send> CacheSelector<E> {
    fn select(&self, resource_type: &ResourceType) -> Option<EnforcerCache<E>> {
        match self {
            Self::Fixed(cache) => Some(Arc::clone(cache)),
            Self::Registry(registry) => registry.get(resource_type),
        }
    }
}

// =============================================================================
// EnforcerRetriever
// =============================================================================

/// Resolves enforcers through the reference cache and the enforcer caches
///
/// The reference cache maps an entity reference to the reference of the
/// enforcer governing it; the selected enforcer cache maps that reference to
/// the materialized enforcer. The enforcer type `E` is opaque to the
/// retriever.
pub struct EnforcerRetriever<E> {
    reference_cache: Arc<dyn Cache<EntityRef, EntityRef>>,
    enforcer_caches: CacheSelector<E>,
}

impl<E: Send> EnforcerRetriever<E> {
    /// Create a retriever backed by a single enforcer cache
    ///
    /// The one cache serves every resource type; the unregistered-type fault
    /// paths are unreachable through a retriever built this way.
    pub fn new(
        reference_cache: Arc<dyn Cache<EntityRef, EntityRef>>,
        enforcer_cache: EnforcerCache<E>,
    ) -> Self {
        Self {
            reference_cache,
            enforcer_caches: CacheSelector::Fixed(enforcer_cache),
        }
    }

    /// Create a retriever with one enforcer cache per resource type
    ///
    /// Deployments that know their supported types should validate the
    /// registry with
    /// [`require_registered`](EnforcerCacheRegistry::require_registered)
    /// before constructing the retriever.
    pub fn with_registry(
        reference_cache: Arc<dyn Cache<EntityRef, EntityRef>>,
        registry: EnforcerCacheRegistry<E>,
    ) -> Self {
        Self {
            reference_cache,
            enforcer_caches: CacheSelector::Registry(registry),
        }
    }

    /// Look up the enforcer governing `entity_ref` and hand both cache
    /// entries to `handler`
    ///
    /// The handler is invoked exactly once with one of three combinations:
    ///
    /// - `(Nonexistent, Nonexistent)`: the reference cache had no entry, or
    ///   no information at all, for the entity.
    /// - `(Exists(enforcer_ref), Nonexistent)`: the entity maps to an
    ///   enforcer reference, but the enforcer cache had no entry or no
    ///   information for it.
    /// - `(Exists(enforcer_ref), Exists(enforcer))`: the enforcer was
    ///   materialized.
    ///
    /// # Errors
    ///
    /// Fails with [`GemelError::Internal`] (after an error-level log) when
    /// the resolved enforcer reference names a resource type with no
    /// registered cache; the handler is not invoked. A handler failure is
    /// returned verbatim.
    pub async fn retrieve<R, F, Fut>(&self, entity_ref: &EntityRef, handler: F) -> Result<R>
    where
        F: FnOnce(CacheEntry<EntityRef>, CacheEntry<E>) -> Fut + Send,
        Fut: Future<Output = Result<R>> + Send,
    {
        match self.reference_cache.get(entity_ref).await {
            None => {
                // Expected while an invalidation (e.g. a namespace block)
                // races the lookup.
                tracing::info!(
                    entity_ref = %entity_ref,
                    "did not get reference-cache value for entity"
                );
                handler(CacheEntry::Nonexistent, CacheEntry::Nonexistent).await
            }
            Some(CacheEntry::Exists(enforcer_ref)) => {
                if self
                    .enforcer_caches
                    .select(enforcer_ref.resource_type())
                    .is_none()
                {
                    tracing::error!(
                        resource_type = %enforcer_ref.resource_type(),
                        "no enforcer cache for resource type"
                    );
                    return Err(GemelError::internal(format!(
                        "no enforcer cache registered for resource type `{}`",
                        enforcer_ref.resource_type()
                    )));
                }
                let enforcer_key = enforcer_ref.clone();
                self.retrieve_by_enforcer_key(&enforcer_key, move |enforcer_entry| {
                    handler(CacheEntry::Exists(enforcer_ref), enforcer_entry)
                })
                .await
            }
            Some(reference_entry) => handler(reference_entry, CacheEntry::Nonexistent).await,
        }
    }

    /// Look up an enforcer by its own reference and hand the entry to
    /// `handler`
    ///
    /// For callers that already hold an enforcer reference rather than the
    /// reference of a governed entity. The handler is invoked exactly once;
    /// a transient "no information" answer arrives as `Nonexistent`.
    ///
    /// # Errors
    ///
    /// Fails with [`GemelError::Wiring`] when no cache is registered for
    /// `enforcer_ref`'s resource type. This entry point is reached only by
    /// already-validated internal paths, so that fault indicates a
    /// programmer error rather than a tenant condition. A handler failure is
    /// returned verbatim.
    pub async fn retrieve_by_enforcer_key<R, F, Fut>(
        &self,
        enforcer_ref: &EntityRef,
        handler: F,
    ) -> Result<R>
    where
        F: FnOnce(CacheEntry<E>) -> Fut + Send,
        Fut: Future<Output = Result<R>> + Send,
    {
        let resource_type = enforcer_ref.resource_type();
        let cache = self.enforcer_caches.select(resource_type).ok_or_else(|| {
            GemelError::wiring(format!(
                "no enforcer cache registered for resource type `{resource_type}`"
            ))
        })?;

        match cache.get(enforcer_ref).await {
            None => {
                // Expected while an invalidation races the lookup.
                tracing::info!(
                    enforcer_ref = %enforcer_ref,
                    "did not get enforcer-cache value for enforcer key"
                );
                handler(CacheEntry::Nonexistent).await
            }
            Some(enforcer_entry) => handler(enforcer_entry).await,
        }
    }

    /// Resolve the enforcer governing `entity_ref` as a tagged value
    ///
    /// The match-friendly form of [`retrieve`](Self::retrieve); failure
    /// semantics are identical.
    pub async fn resolve(&self, entity_ref: &EntityRef) -> Result<Resolution<E>> {
        self.retrieve(entity_ref, |reference_entry, enforcer_entry| async move {
            Ok(Resolution::from_entries(reference_entry, enforcer_entry))
        })
        .await
    }
}

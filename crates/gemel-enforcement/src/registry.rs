//! Resource-type to enforcer-cache routing
//!
//! Each resource domain (things, policies, connections, ...) runs its own
//! enforcer cache so that sizing, eviction, and invalidation streams stay
//! independent. The registry maps a [`ResourceType`] to the cache handle for
//! that domain and is queried synchronously during retrieval.
//!
//! A resource type that is reachable through the reference cache but has no
//! registered enforcer cache is a deployment fault. Deployments that know
//! their supported types up front should call
//! [`EnforcerCacheRegistry::require_registered`] at startup to turn that
//! fault into a load-time error; the runtime fault path remains for
//! dynamically-added types.

use std::collections::HashMap;
use std::sync::Arc;

use gemel_cache::Cache;
use gemel_core::{EntityRef, GemelError, ResourceType, Result};

/// Shared handle to an enforcer cache for one resource domain
///
/// Keys are enforcer references; the value type is the opaque enforcer owned
/// by the policy-evaluation subsystem.
pub type EnforcerCache<E> = Arc<dyn Cache<EntityRef, E>>;

/// Registry of enforcer caches keyed by resource type
pub struct EnforcerCacheRegistry<E> {
    caches: HashMap<ResourceType, EnforcerCache<E>>,
}

impl<E: Send> EnforcerCacheRegistry<E> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            caches: HashMap::new(),
        }
    }

    /// Register the enforcer cache for a resource type
    ///
    /// Registering the same type twice replaces the earlier handle.
    pub fn register(
        mut self,
        resource_type: impl Into<ResourceType>,
        cache: EnforcerCache<E>,
    ) -> Self {
        self.caches.insert(resource_type.into(), cache);
        self
    }

    /// The cache registered for `resource_type`, if any
    pub fn get(&self, resource_type: &ResourceType) -> Option<EnforcerCache<E>> {
        self.caches.get(resource_type).map(Arc::clone)
    }

    /// Resource types with a registered cache
    pub fn resource_types(&self) -> impl Iterator<Item = &ResourceType> {
        self.caches.keys()
    }

    /// Number of registered caches
    pub fn len(&self) -> usize {
        self.caches.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.caches.is_empty()
    }

    /// Verify that every type in `required` has a registered cache
    ///
    /// Load-time completeness check: fails with a wiring error naming every
    /// missing type, so a deployment misconfiguration surfaces at startup
    /// instead of on the first affected command.
    pub fn require_registered(&self, required: &[ResourceType]) -> Result<()> {
        let mut missing: Vec<&str> = required
            .iter()
            .filter(|resource_type| !self.caches.contains_key(resource_type))
            .map(ResourceType::as_str)
            .collect();

        if missing.is_empty() {
            return Ok(());
        }
        missing.sort_unstable();
        Err(GemelError::wiring(format!(
            "no enforcer cache registered for resource types: {}",
            missing.join(", ")
        )))
    }
}

impl<E: Send> Default for EnforcerCacheRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

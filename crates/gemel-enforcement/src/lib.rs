//! Enforcer resolution for Gemel authorization
//!
//! Every inbound command is authorized by an *enforcer*: an opaque capability
//! object that governs one or more entities. Entities do not carry their
//! enforcer directly; a level of indirection lets many entities (for example
//! things) share one enforcer (for example a policy). Resolution therefore
//! walks two independently-invalidated cache tiers:
//!
//! 1. The **reference cache** maps an entity reference to the reference of
//!    the enforcer governing it.
//! 2. A per-resource-type **enforcer cache** maps an enforcer reference to
//!    the materialized enforcer.
//!
//! [`EnforcerRetriever`] performs the chained lookup and hands the outcome to
//! caller-supplied decision logic, either as a continuation over cache
//! entries ([`EnforcerRetriever::retrieve`]) or as a tagged [`Resolution`]
//! value ([`EnforcerRetriever::resolve`]). Enforcer caches are selected
//! through an [`EnforcerCacheRegistry`], whose completeness can be checked at
//! startup.
//!
//! This crate only reads the caches; population, eviction, and invalidation
//! belong to the cache implementations, and permit/deny decisions belong to
//! the caller.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

/// Resource-type to enforcer-cache routing
pub mod registry;

/// Tagged resolution outcomes
pub mod resolution;

/// The two-tier retrieval algorithm
pub mod retriever;

pub use registry::{EnforcerCache, EnforcerCacheRegistry};
pub use resolution::Resolution;
pub use retriever::EnforcerRetriever;

//! Gemel Core - identifier and error types for the digital-twin platform
//!
//! Gemel is a multi-tenant, actor-based platform in which every inbound
//! command must be authorized before it reaches the entity owning the data.
//! This crate provides the foundational value types shared across its
//! services:
//!
//! - Namespace-qualified entity identifiers ([`EntityId`])
//! - Resource-domain tags ([`ResourceType`])
//! - Combined cache/routing keys ([`EntityRef`])
//! - The unified error type ([`GemelError`])
//!
//! It contains no I/O and no application logic.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

/// Unified error handling
pub mod errors;

/// Entity, resource-type, and reference identifiers
pub mod ids;

pub use errors::{GemelError, Result};
pub use ids::{EntityId, EntityRef, ResourceType};

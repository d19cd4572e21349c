//! Entity, resource-type, and reference identifiers
//!
//! Every governed resource in Gemel is addressed by an [`EntityRef`]: an
//! opaque, namespace-qualified identifier plus a tag naming the resource
//! domain it belongs to (thing, policy, connection, ...). The same
//! identifier string may be reused across domains; references only compare
//! equal when both the identifier and the resource type match.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// ResourceType
// =============================================================================

/// Tag naming the domain a resource belongs to
///
/// Resource types partition the platform into independently managed domains.
/// The three built-in domains have convenience constructors; deployments may
/// introduce further types at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceType(String);

impl ResourceType {
    /// Create a resource type from an arbitrary tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The digital-twin domain
    pub fn thing() -> Self {
        Self::new("thing")
    }

    /// The access-policy domain
    pub fn policy() -> Self {
        Self::new("policy")
    }

    /// The connectivity domain
    pub fn connection() -> Self {
        Self::new("connection")
    }

    /// The tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceType {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for ResourceType {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

// =============================================================================
// EntityId
// =============================================================================

/// Opaque, namespace-qualified entity identifier
///
/// Identifiers follow the `namespace:name` convention. The namespace is the
/// tenant-scoping prefix that namespace-blocking events act on; this type
/// does not validate it beyond locating the separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Create an entity identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The namespace prefix, when the identifier carries one
    pub fn namespace(&self) -> Option<&str> {
        self.0.split_once(':').map(|(ns, _)| ns)
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// =============================================================================
// EntityRef
// =============================================================================

/// Reference to a governed resource: entity identifier plus resource type
///
/// Used as the key of both authorization cache tiers. Equality and hashing
/// cover both fields, so the same identifier under two resource types forms
/// two distinct keys. An enforcer is itself addressed by an `EntityRef`
/// (its own identifier under its own resource type).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityRef {
    id: EntityId,
    resource_type: ResourceType,
}

impl EntityRef {
    /// Create a reference from an identifier and a resource type
    pub fn new(id: impl Into<EntityId>, resource_type: impl Into<ResourceType>) -> Self {
        Self {
            id: id.into(),
            resource_type: resource_type.into(),
        }
    }

    /// The entity identifier
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// The resource type the entity belongs to
    pub fn resource_type(&self) -> &ResourceType {
        &self.resource_type
    }
}

// `type:id`, the platform-wide rendering of references in logs and errors.
impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource_type, self.id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_same_id_different_resource_type_are_distinct_keys() {
        let as_thing = EntityRef::new("ns:42", ResourceType::thing());
        let as_policy = EntityRef::new("ns:42", ResourceType::policy());
        assert_ne!(as_thing, as_policy);

        let mut map = HashMap::new();
        map.insert(as_thing.clone(), "thing-entry");
        map.insert(as_policy.clone(), "policy-entry");
        assert_eq!(map.len(), 2);
        assert_eq!(map[&as_thing], "thing-entry");
        assert_eq!(map[&as_policy], "policy-entry");
    }

    #[test]
    fn test_namespace_prefix() {
        assert_eq!(EntityId::new("acme:sensor-7").namespace(), Some("acme"));
        assert_eq!(EntityId::new("unqualified").namespace(), None);
    }

    #[test]
    fn test_reference_display() {
        let reference = EntityRef::new("acme:sensor-7", ResourceType::thing());
        assert_eq!(reference.to_string(), "thing:acme:sensor-7");
    }
}

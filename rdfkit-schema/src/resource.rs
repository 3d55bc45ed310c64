//! Session-local resource names
//!
//! Statements refer to resources either by a short name registered in the
//! session's [`ResourceRegistry`] or by a literal identifier.

use crate::error::{Result, SchemaError};
use crate::options::DuplicatePolicy;
use rdfkit_graph_ir::Term;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identifier of a resource (an expanded IRI)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId(Arc<str>);

impl ResourceId {
    /// Create a resource identifier from an IRI
    pub fn new(iri: impl AsRef<str>) -> Self {
        ResourceId(Arc::from(iri.as_ref()))
    }

    /// The resource IRI
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// IRI term for subject or object position
    pub fn to_term(&self) -> Term {
        Term::iri_shared(self.0.clone())
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// A resource as written in a statement
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceRef {
    /// Back-reference to a short name registered in the session
    Name(String),
    /// Literal identifier, used as-is
    Iri(ResourceId),
}

impl ResourceRef {
    /// Back-reference to a registered short name
    pub fn name(name: impl Into<String>) -> Self {
        ResourceRef::Name(name.into())
    }

    /// Literal resource identifier
    pub fn iri(iri: impl AsRef<str>) -> Self {
        ResourceRef::Iri(ResourceId::new(iri))
    }
}

/// Reference a previously registered resource by short name
pub fn ref_resource(name: impl Into<String>) -> ResourceRef {
    ResourceRef::name(name)
}

/// Turn a raw string into a resource identifier reference
pub fn to_resource_id(iri: impl AsRef<str>) -> ResourceRef {
    ResourceRef::iri(iri)
}

/// Subjects given as plain strings are short names
impl From<&str> for ResourceRef {
    fn from(name: &str) -> Self {
        ResourceRef::Name(name.to_string())
    }
}

impl From<String> for ResourceRef {
    fn from(name: String) -> Self {
        ResourceRef::Name(name)
    }
}

impl From<ResourceId> for ResourceRef {
    fn from(id: ResourceId) -> Self {
        ResourceRef::Iri(id)
    }
}

impl From<&ResourceId> for ResourceRef {
    fn from(id: &ResourceId) -> Self {
        ResourceRef::Iri(id.clone())
    }
}

impl std::fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceRef::Name(name) => write!(f, "{}", name),
            ResourceRef::Iri(id) => write!(f, "{}", id),
        }
    }
}

/// Short name to resource identifier mapping for one session
///
/// Iteration follows first-registration order. Under
/// [`DuplicatePolicy::LastWriteWins`] a re-registration replaces the
/// identifier in place.
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    entries: Vec<(Arc<str>, ResourceId)>,
    index: FxHashMap<Arc<str>, usize>,
    policy: DuplicatePolicy,
}

impl ResourceRegistry {
    /// Empty registry with the default (last-write-wins) policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty registry with an explicit duplicate policy
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Duplicate policy in effect
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Bind `name` to `iri`.
    ///
    /// Re-binding a name to the identical identifier always succeeds.
    /// Re-binding to a different identifier follows the registry's policy.
    pub fn register(&mut self, name: &str, iri: impl AsRef<str>) -> Result<ResourceId> {
        self.bind(name, ResourceId::new(iri), self.policy)
    }

    /// Bind `name` to `iri` unless it is already bound elsewhere.
    ///
    /// Always refuses a different identifier, whatever the registry's
    /// policy. Used once statements may already refer to the name.
    pub fn declare(&mut self, name: &str, iri: impl AsRef<str>) -> Result<ResourceId> {
        self.bind(name, ResourceId::new(iri), DuplicatePolicy::Reject)
    }

    fn bind(&mut self, name: &str, id: ResourceId, policy: DuplicatePolicy) -> Result<ResourceId> {
        if let Some(&pos) = self.index.get(name) {
            let existing = &self.entries[pos].1;
            if *existing == id {
                return Ok(existing.clone());
            }
            match policy {
                DuplicatePolicy::Reject => {
                    return Err(SchemaError::DuplicateResource {
                        name: name.to_string(),
                        existing: existing.as_str().to_string(),
                        attempted: id.as_str().to_string(),
                    });
                }
                DuplicatePolicy::LastWriteWins => {
                    tracing::warn!(
                        name,
                        previous = %existing,
                        replacement = %id,
                        "resource name re-registered; last registration wins"
                    );
                    self.entries[pos].1 = id.clone();
                    return Ok(id);
                }
            }
        }

        tracing::debug!(name, resource = %id, "resource registered");
        let key: Arc<str> = Arc::from(name);
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, id.clone()));
        Ok(id)
    }

    /// Look up a registered short name
    pub fn resolve(&self, name: &str) -> Result<ResourceId> {
        self.get(name)
            .cloned()
            .ok_or_else(|| SchemaError::unknown_resource(name))
    }

    /// Resolve a [`ResourceRef`]: names through the registry, identifiers as-is
    pub fn resolve_ref(&self, resource: &ResourceRef) -> Result<ResourceId> {
        match resource {
            ResourceRef::Name(name) => self.resolve(name),
            ResourceRef::Iri(id) => Ok(id.clone()),
        }
    }

    /// Look up a registered short name without failing
    pub fn get(&self, name: &str) -> Option<&ResourceId> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }

    /// True if `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, id)` pairs in first-registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceId)> {
        self.entries.iter().map(|(name, id)| (name.as_ref(), id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let mut registry = ResourceRegistry::new();
        registry.register("dog", "http://example.com/animals/dog").unwrap();

        assert_eq!(
            registry.resolve("dog").unwrap().as_str(),
            "http://example.com/animals/dog"
        );
        assert!(registry.contains("dog"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_resource() {
        let registry = ResourceRegistry::new();
        match registry.resolve("cat") {
            Err(SchemaError::UnknownResource(name)) => assert_eq!(name, "cat"),
            other => panic!("expected UnknownResource, got {other:?}"),
        }
    }

    #[test]
    fn test_last_write_wins() {
        let mut registry = ResourceRegistry::new();
        registry.register("dog", "http://a/dog").unwrap();
        registry.register("cat", "http://a/cat").unwrap();
        registry.register("dog", "http://b/dog").unwrap();

        assert_eq!(registry.resolve("dog").unwrap().as_str(), "http://b/dog");
        // position of the first registration is kept
        let names: Vec<&str> = registry.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["dog", "cat"]);
    }

    #[test]
    fn test_reject_duplicate() {
        let mut registry = ResourceRegistry::with_policy(DuplicatePolicy::Reject);
        registry.register("dog", "http://a/dog").unwrap();

        // same identifier is fine
        registry.register("dog", "http://a/dog").unwrap();

        let err = registry.register("dog", "http://b/dog").unwrap_err();
        match err {
            SchemaError::DuplicateResource {
                name,
                existing,
                attempted,
            } => {
                assert_eq!(name, "dog");
                assert_eq!(existing, "http://a/dog");
                assert_eq!(attempted, "http://b/dog");
            }
            other => panic!("expected DuplicateResource, got {other:?}"),
        }
        assert_eq!(registry.resolve("dog").unwrap().as_str(), "http://a/dog");
    }

    #[test]
    fn test_declare_never_rebinds() {
        let mut registry = ResourceRegistry::new();
        registry.register("dog", "http://a/dog").unwrap();

        assert!(matches!(
            registry.declare("dog", "http://b/dog"),
            Err(SchemaError::DuplicateResource { .. })
        ));
        assert_eq!(registry.declare("dog", "http://a/dog").unwrap().as_str(), "http://a/dog");
        assert_eq!(registry.declare("cat", "http://a/cat").unwrap().as_str(), "http://a/cat");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_resolve_ref_dual_mode() {
        let mut registry = ResourceRegistry::new();
        registry.register("dog", "http://a/dog").unwrap();

        assert_eq!(
            registry.resolve_ref(&ref_resource("dog")).unwrap().as_str(),
            "http://a/dog"
        );
        assert_eq!(
            registry
                .resolve_ref(&to_resource_id("http://person/nick"))
                .unwrap()
                .as_str(),
            "http://person/nick"
        );
        assert!(registry.resolve_ref(&ResourceRef::from("parrot")).is_err());
    }
}

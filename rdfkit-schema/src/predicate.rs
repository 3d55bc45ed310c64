//! Predicate identifiers and predicate references

use rdfkit_graph_ir::Term;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Opaque identifier of a predicate (an expanded IRI)
///
/// Cloning shares the underlying allocation, so every clone of one
/// identifier is reference-equal to it (see [`PredicateId::ptr_eq`]). A
/// schema hands out clones of a single allocation for a property and all
/// of its aliases.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PredicateId(Arc<str>);

impl PredicateId {
    /// Create a predicate identifier from an expanded IRI
    pub fn new(iri: impl AsRef<str>) -> Self {
        PredicateId(Arc::from(iri.as_ref()))
    }

    /// The predicate IRI
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when both identifiers share one allocation
    pub fn ptr_eq(&self, other: &PredicateId) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// IRI term for the predicate position of a triple, sharing the allocation
    pub fn to_term(&self) -> Term {
        Term::iri_shared(self.0.clone())
    }
}

impl std::fmt::Display for PredicateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl AsRef<str> for PredicateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A predicate as written in a statement: either a short name to resolve
/// through the session's schema set, or an identifier already looked up
/// from a specific schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyRef {
    /// Short property name or alias
    Name(String),
    /// Identifier obtained directly from a schema; bypasses schema-set precedence
    Predicate(PredicateId),
}

impl PropertyRef {
    /// Reference a property by short name
    pub fn name(name: impl Into<String>) -> Self {
        PropertyRef::Name(name.into())
    }
}

impl From<&str> for PropertyRef {
    fn from(name: &str) -> Self {
        PropertyRef::Name(name.to_string())
    }
}

impl From<String> for PropertyRef {
    fn from(name: String) -> Self {
        PropertyRef::Name(name)
    }
}

impl From<PredicateId> for PropertyRef {
    fn from(predicate: PredicateId) -> Self {
        PropertyRef::Predicate(predicate)
    }
}

impl From<&PredicateId> for PropertyRef {
    fn from(predicate: &PredicateId) -> Self {
        PropertyRef::Predicate(predicate.clone())
    }
}

impl std::fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyRef::Name(name) => write!(f, "{}", name),
            PropertyRef::Predicate(p) => write!(f, "{}", p),
        }
    }
}

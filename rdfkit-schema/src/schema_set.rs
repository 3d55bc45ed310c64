//! Ordered schema composition for a graph-building session
//!
//! A [`SchemaSet`] resolves bare property names against several schemas.
//! The first schema in list order that defines a name answers for it; later
//! schemas only fill in names the earlier ones lack. This is shadowing, not
//! a merge: a later schema's definition of a shadowed name is unreachable
//! through the set, though still reachable by looking it up on that schema
//! directly and passing the resulting [`PredicateId`].

use crate::error::{Result, SchemaError};
use crate::predicate::{PredicateId, PropertyRef};
use crate::schema::PropertySchema;

/// Ordered list of schemas; earlier entries take precedence
#[derive(Clone, Debug, Default)]
pub struct SchemaSet<'a> {
    schemas: Vec<&'a PropertySchema>,
}

impl<'a> SchemaSet<'a> {
    /// Empty set; every bare name fails to resolve
    pub fn new() -> Self {
        Self::default()
    }

    /// Set containing a single schema
    pub fn single(schema: &'a PropertySchema) -> Self {
        Self {
            schemas: vec![schema],
        }
    }

    /// Append a schema with lower precedence than those already present
    pub fn push(&mut self, schema: &'a PropertySchema) {
        self.schemas.push(schema);
    }

    /// Builder-style [`push`](Self::push)
    pub fn with(mut self, schema: &'a PropertySchema) -> Self {
        self.push(schema);
        self
    }

    /// Number of schemas in the set
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True when no schema is attached
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Schemas in precedence order
    pub fn iter(&self) -> impl Iterator<Item = &'a PropertySchema> + '_ {
        self.schemas.iter().copied()
    }

    /// Find the first schema defining `name`; returns its position and predicate
    pub fn resolve_with_index(&self, name: &str) -> Option<(usize, &'a PredicateId)> {
        self.schemas
            .iter()
            .copied()
            .enumerate()
            .find_map(|(idx, schema)| schema.get(name).map(|p| (idx, p)))
    }

    /// Resolve a bare property name through the set
    pub fn resolve(&self, name: &str) -> Result<PredicateId> {
        if self.schemas.is_empty() {
            tracing::debug!(name, "no schema attached; bare property name cannot resolve");
            return Err(SchemaError::unknown_property(name));
        }
        match self.resolve_with_index(name) {
            Some((idx, predicate)) => {
                tracing::trace!(name, schema_index = idx, predicate = %predicate, "property resolved");
                Ok(predicate.clone())
            }
            None => Err(SchemaError::unknown_property(name)),
        }
    }

    /// Resolve a [`PropertyRef`]: names go through the set, identifiers pass through
    pub fn resolve_ref(&self, property: &PropertyRef) -> Result<PredicateId> {
        match property {
            PropertyRef::Name(name) => self.resolve(name),
            PropertyRef::Predicate(predicate) => Ok(predicate.clone()),
        }
    }
}

impl<'a> FromIterator<&'a PropertySchema> for SchemaSet<'a> {
    fn from_iter<T: IntoIterator<Item = &'a PropertySchema>>(iter: T) -> Self {
        Self {
            schemas: iter.into_iter().collect(),
        }
    }
}

impl<'a, const N: usize> From<[&'a PropertySchema; N]> for SchemaSet<'a> {
    fn from(schemas: [&'a PropertySchema; N]) -> Self {
        schemas.into_iter().collect()
    }
}

impl<'a> From<&'a PropertySchema> for SchemaSet<'a> {
    fn from(schema: &'a PropertySchema) -> Self {
        Self::single(schema)
    }
}

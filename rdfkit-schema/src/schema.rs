//! Immutable property schemas
//!
//! A [`PropertySchema`] maps short property names, including aliases, to
//! predicate identifiers. It is produced once by a
//! [`SchemaBuilder`](crate::SchemaBuilder) and is read-only afterwards, so a
//! single schema can back any number of graph-building sessions.
//!
//! Unknown names are only detected on lookup. Building a schema fails solely
//! on an invalid namespace template.

use crate::builder::SchemaBuilder;
use crate::error::{Result, SchemaError};
use crate::predicate::PredicateId;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Property name to predicate mapping plus the namespace template it was
/// built from
///
/// Alias entries hold a clone of the aliased property's identifier, so
/// `schema.property("alias")` and `schema.property("name")` are
/// reference-equal ([`PredicateId::ptr_eq`]).
#[derive(Clone, Debug)]
pub struct PropertySchema {
    namespace: Arc<str>,
    properties: FxHashMap<Arc<str>, PredicateId>,
}

impl PropertySchema {
    pub(crate) fn from_parts(
        namespace: Arc<str>,
        properties: FxHashMap<Arc<str>, PredicateId>,
    ) -> Self {
        Self {
            namespace,
            properties,
        }
    }

    /// Start a builder for the given namespace template.
    ///
    /// Fails with [`SchemaError::InvalidNamespace`] if the template lacks the
    /// `{{property}}` placeholder.
    pub fn builder(namespace: impl AsRef<str>) -> Result<SchemaBuilder> {
        SchemaBuilder::new(namespace)
    }

    /// Build a schema by running `define` against a fresh builder.
    ///
    /// The namespace is validated before `define` runs.
    ///
    /// ```
    /// use rdfkit_schema::PropertySchema;
    ///
    /// let schema = PropertySchema::build("http://example.com/schema/{{property}}", |b| {
    ///     b.define("name");
    ///     b.define_with("number", |p| {
    ///         p.uri("http://sample.com/props/number");
    ///     })
    ///     .alias("n");
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(schema.len(), 3);
    /// assert_eq!(
    ///     schema.property("name").unwrap().as_str(),
    ///     "http://example.com/schema/name"
    /// );
    /// assert!(schema.property("n").unwrap().ptr_eq(&schema.property("number").unwrap()));
    /// ```
    pub fn build<F>(namespace: impl AsRef<str>, define: F) -> Result<PropertySchema>
    where
        F: FnOnce(&mut SchemaBuilder),
    {
        let mut builder = SchemaBuilder::new(namespace)?;
        define(&mut builder);
        builder.build()
    }

    /// Namespace template the schema was built from
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Look up a property or alias.
    ///
    /// Returns a clone sharing the schema's allocation.
    pub fn property(&self, name: &str) -> Result<PredicateId> {
        self.get(name)
            .cloned()
            .ok_or_else(|| SchemaError::unknown_property(name))
    }

    /// Look up a property or alias without failing
    pub fn get(&self, name: &str) -> Option<&PredicateId> {
        self.properties.get(name)
    }

    /// True if `name` is a declared property or alias
    pub fn contains_key(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Number of entries; aliases count separately
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True if the schema declares no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate `(name, predicate)` entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PredicateId)> {
        self.properties.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// All names and aliases, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.properties.keys().map(|k| k.as_ref()).collect();
        names.sort_unstable();
        names
    }
}

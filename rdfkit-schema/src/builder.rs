//! Schema construction
//!
//! [`SchemaBuilder`] accumulates property definitions against a validated
//! namespace template and produces an immutable
//! [`PropertySchema`](crate::PropertySchema). Building and querying are
//! separate types, so a schema cannot be extended after it is in use.
//!
//! Redefining a name replaces the earlier entry; aliases registered for the
//! earlier definition keep pointing at its predicate. Empty names and aliases
//! are recorded and make [`SchemaBuilder::build`] fail.

use crate::error::{Result, SchemaError};
use crate::predicate::PredicateId;
use crate::schema::PropertySchema;
use rdfkit_vocab::schema::{expand, PROPERTY_PLACEHOLDER};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Ensure a namespace template contains the `{{property}}` placeholder.
pub fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.contains(PROPERTY_PLACEHOLDER) {
        Ok(())
    } else {
        Err(SchemaError::invalid_namespace(namespace))
    }
}

/// Accumulates property definitions for one schema
#[derive(Debug)]
pub struct SchemaBuilder {
    namespace: Arc<str>,
    properties: FxHashMap<Arc<str>, PredicateId>,
    /// First rejected entry, reported by `build`
    invalid: Option<String>,
}

impl SchemaBuilder {
    /// Create a builder, validating the namespace template up front
    pub fn new(namespace: impl AsRef<str>) -> Result<Self> {
        let namespace = namespace.as_ref();
        validate_namespace(namespace)?;
        Ok(Self {
            namespace: Arc::from(namespace),
            properties: FxHashMap::default(),
            invalid: None,
        })
    }

    /// Namespace template this builder expands
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Define a property whose IRI is the namespace template expanded with `name`
    pub fn define(&mut self, name: &str) -> PropertyHandle<'_> {
        self.define_with(name, |_| {})
    }

    /// Define a property, letting `customize` override the derived IRI
    pub fn define_with<F>(&mut self, name: &str, customize: F) -> PropertyHandle<'_>
    where
        F: FnOnce(&mut PropertyBuilder),
    {
        let mut property = PropertyBuilder::new(name, &self.namespace);
        customize(&mut property);
        let predicate = property.build();
        if name.is_empty() {
            self.reject("property name must not be empty".to_string());
        } else {
            self.insert(name, predicate.clone());
        }
        PropertyHandle {
            builder: self,
            predicate,
        }
    }

    /// Register `alias` as another name for an already defined predicate.
    ///
    /// The alias maps to a clone of `predicate`, keeping reference equality.
    pub fn alias(&mut self, predicate: &PredicateId, alias: &str) {
        if alias.is_empty() {
            self.reject(format!("empty alias for property '{predicate}'"));
        } else {
            self.insert(alias, predicate.clone());
        }
    }

    fn reject(&mut self, msg: String) {
        tracing::debug!(reason = %msg, "schema entry rejected");
        if self.invalid.is_none() {
            self.invalid = Some(msg);
        }
    }

    fn insert(&mut self, name: &str, predicate: PredicateId) {
        if let Some(previous) = self.properties.insert(Arc::from(name), predicate) {
            tracing::debug!(name, previous = %previous, "schema entry redefined");
        }
    }

    /// Number of entries defined so far; aliases count separately
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True if nothing has been defined yet
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Finish the schema.
    ///
    /// Fails with `InvalidDefinition` if any name or alias was empty.
    pub fn build(self) -> Result<PropertySchema> {
        if let Some(msg) = self.invalid {
            return Err(SchemaError::invalid_definition(msg));
        }
        tracing::debug!(
            namespace = %self.namespace,
            entries = self.properties.len(),
            "property schema built"
        );
        Ok(PropertySchema::from_parts(self.namespace, self.properties))
    }
}

/// Handle to a just-defined property, used to attach aliases
///
/// ```
/// use rdfkit_schema::SchemaBuilder;
///
/// let mut builder = SchemaBuilder::new("http://example.com/{{property}}").unwrap();
/// builder.define("leg_count").alias("lc").alias("l").alias("c");
///
/// let schema = builder.build().unwrap();
/// assert_eq!(schema.len(), 4);
/// ```
#[derive(Debug)]
pub struct PropertyHandle<'a> {
    builder: &'a mut SchemaBuilder,
    predicate: PredicateId,
}

impl<'a> PropertyHandle<'a> {
    /// Add an alias for this property; chainable
    pub fn alias(self, alias: &str) -> Self {
        self.builder.alias(&self.predicate, alias);
        self
    }

    /// The predicate that was defined
    pub fn predicate(&self) -> &PredicateId {
        &self.predicate
    }
}

/// Customization hook for a single property before it is finalized
#[derive(Debug)]
pub struct PropertyBuilder {
    name: String,
    uri: String,
}

impl PropertyBuilder {
    fn new(name: &str, namespace: &str) -> Self {
        Self {
            name: name.to_string(),
            uri: expand(namespace, name),
        }
    }

    /// Property name being defined
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current IRI (the derived one unless overridden)
    pub fn current_uri(&self) -> &str {
        &self.uri
    }

    /// Override the derived IRI with an arbitrary absolute IRI
    pub fn uri(&mut self, uri: impl Into<String>) -> &mut Self {
        self.uri = uri.into();
        self
    }

    fn build(self) -> PredicateId {
        PredicateId::new(self.uri)
    }
}

//! Graph-building sessions
//!
//! A session turns short subject, predicate and object references into
//! triples and hands them to a [`GraphStore`] in one bulk insert.
//!
//! ## Phases
//!
//! ```text
//! GraphSession ──statements()──▶ StatementSession ──commit()──▶ Graph / store
//!  (register resources)           (assert statements,
//!                                  inline declarations)
//! ```
//!
//! The phases are separate types and `commit` consumes the session, so a
//! committed session cannot be reused. Nothing reaches the store before
//! `commit`; an assertion that fails appends nothing, and a failed
//! [`StatementSession::subject`] block discards the whole block.
//!
//! ## Example
//!
//! ```
//! use rdfkit_schema::{ref_resource, GraphSession, PropertySchema};
//!
//! let schema = PropertySchema::build("http://example.com/animals/{{property}}", |b| {
//!     b.define("enemies_with");
//!     b.define("leg_count").alias("legs");
//! })?;
//!
//! let mut session = GraphSession::new(&schema);
//! session.register("dog", "http://example.com/dog")?;
//! session.register("cat", "http://example.com/cat")?;
//!
//! let mut statements = session.statements();
//! statements.subject("dog", |s| {
//!     s.assert("enemies_with", ref_resource("cat"))?
//!         .assert("legs", 4)?;
//!     Ok(())
//! })?;
//!
//! let graph = statements.commit()?;
//! assert_eq!(graph.len(), 2);
//! # Ok::<(), rdfkit_schema::SchemaError>(())
//! ```

use crate::error::Result;
use crate::options::SessionOptions;
use crate::predicate::PropertyRef;
use crate::resource::{ResourceId, ResourceRef, ResourceRegistry};
use crate::schema_set::SchemaSet;
use rdfkit_graph_ir::{
    dedupe_triples, Graph, GraphStore, IntoLiteral, LiteralValue, Term, Triple,
};

/// Object of an assertion
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A resource, by short name or identifier
    Resource(ResourceRef),
    /// A typed literal
    Literal(Term),
}

impl Value {
    /// Literal object from any native scalar
    pub fn literal(value: impl IntoLiteral) -> Self {
        Value::Literal(value.into_literal())
    }
}

macro_rules! value_from_literal {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Literal(value.into_literal())
                }
            }
        )*
    };
}

value_from_literal!(&str, String, &String, bool, i32, i64, u32, f32, f64, LiteralValue);

impl From<Term> for Value {
    fn from(term: Term) -> Self {
        Value::Literal(term)
    }
}

impl From<ResourceRef> for Value {
    fn from(resource: ResourceRef) -> Self {
        Value::Resource(resource)
    }
}

impl From<ResourceId> for Value {
    fn from(id: ResourceId) -> Self {
        Value::Resource(ResourceRef::Iri(id))
    }
}

impl From<&ResourceId> for Value {
    fn from(id: &ResourceId) -> Self {
        Value::Resource(ResourceRef::Iri(id.clone()))
    }
}

/// Outcome of a successful commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitReceipt {
    /// Triples handed to the store
    pub triple_count: usize,
    /// Resources declared on the store
    pub resource_count: usize,
}

/// Build one triple from already-parsed references.
fn assemble(
    schemas: &SchemaSet<'_>,
    registry: &ResourceRegistry,
    subject: &ResourceId,
    predicate: &PropertyRef,
    value: Value,
) -> Result<Triple> {
    let p = schemas.resolve_ref(predicate)?;
    let o = match value {
        Value::Resource(resource) => registry.resolve_ref(&resource)?.to_term(),
        Value::Literal(term) => term,
    };
    tracing::trace!(subject = %subject, predicate = %p, object = %o, "statement assembled");
    Ok(Triple::new(subject.to_term(), p.to_term(), o))
}

/// Resource-registration phase of a session
#[derive(Debug, Default)]
pub struct GraphSession<'s> {
    schemas: SchemaSet<'s>,
    registry: ResourceRegistry,
    options: SessionOptions,
}

impl<'s> GraphSession<'s> {
    /// Open a session resolving bare property names through `schemas`
    pub fn new(schemas: impl Into<SchemaSet<'s>>) -> Self {
        Self::with_options(schemas, SessionOptions::default())
    }

    /// Open a session with explicit options
    pub fn with_options(schemas: impl Into<SchemaSet<'s>>, options: SessionOptions) -> Self {
        let schemas = schemas.into();
        tracing::debug!(
            schema_count = schemas.len(),
            duplicate_policy = ?options.duplicate_policy,
            "graph session opened"
        );
        Self {
            registry: ResourceRegistry::with_policy(options.duplicate_policy),
            schemas,
            options,
        }
    }

    /// Schemas attached to the session
    pub fn schemas(&self) -> &SchemaSet<'s> {
        &self.schemas
    }

    /// Session options
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Registered resources
    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Register a resource under a short name
    pub fn register(&mut self, name: &str, iri: impl AsRef<str>) -> Result<ResourceId> {
        self.registry.register(name, iri)
    }

    /// Look up a registered resource
    pub fn resource(&self, name: &str) -> Result<ResourceId> {
        self.registry.resolve(name)
    }

    /// Finish registration and start asserting statements
    pub fn statements(self) -> StatementSession<'s> {
        StatementSession {
            schemas: self.schemas,
            registry: self.registry,
            options: self.options,
            pending: Vec::new(),
        }
    }

    /// Commit without statements into a fresh graph
    pub fn commit(self) -> Result<Graph> {
        self.statements().commit()
    }

    /// Commit without statements into an existing store
    pub fn commit_into<G: GraphStore + ?Sized>(self, store: &mut G) -> Result<CommitReceipt> {
        self.statements().commit_into(store)
    }
}

/// Statement-assembly phase of a session
#[derive(Debug)]
pub struct StatementSession<'s> {
    schemas: SchemaSet<'s>,
    registry: ResourceRegistry,
    options: SessionOptions,
    pending: Vec<Triple>,
}

impl<'s> StatementSession<'s> {
    /// Register a resource at its point of first use.
    ///
    /// A bound name stays bound for the rest of the session: declaring it
    /// again with another identifier fails with `DuplicateResource` under
    /// either policy.
    pub fn declare(&mut self, name: &str, iri: impl AsRef<str>) -> Result<ResourceId> {
        self.registry.declare(name, iri)
    }

    /// Look up a registered resource
    pub fn resource(&self, name: &str) -> Result<ResourceId> {
        self.registry.resolve(name)
    }

    /// Registered resources
    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Schemas attached to the session
    pub fn schemas(&self) -> &SchemaSet<'s> {
        &self.schemas
    }

    /// Assert one fact.
    ///
    /// Appends exactly one triple, without de-duplication. On error nothing
    /// is appended.
    pub fn assert(
        &mut self,
        subject: impl Into<ResourceRef>,
        predicate: impl Into<PropertyRef>,
        value: impl Into<Value>,
    ) -> Result<()> {
        let subject = self.registry.resolve_ref(&subject.into())?;
        let triple = assemble(
            &self.schemas,
            &self.registry,
            &subject,
            &predicate.into(),
            value.into(),
        )?;
        self.pending.push(triple);
        Ok(())
    }

    /// Assert a block of facts about one subject.
    ///
    /// The block's triples are appended only if `f` returns `Ok`.
    pub fn subject<F>(&mut self, subject: impl Into<ResourceRef>, f: F) -> Result<()>
    where
        F: FnOnce(&mut SubjectStatements<'_>) -> Result<()>,
    {
        let subject = self.registry.resolve_ref(&subject.into())?;
        let mut block = SubjectStatements {
            subject,
            schemas: &self.schemas,
            registry: &self.registry,
            triples: Vec::new(),
        };
        f(&mut block)?;
        let triples = block.triples;
        self.pending.extend(triples);
        Ok(())
    }

    /// Triples assembled so far, in assertion order
    pub fn pending(&self) -> &[Triple] {
        &self.pending
    }

    /// Number of pending triples
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True if nothing has been asserted
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Commit into a fresh in-memory graph
    pub fn commit(self) -> Result<Graph> {
        let mut graph = Graph::new();
        self.commit_into(&mut graph)?;
        Ok(graph)
    }

    /// Commit into an existing store.
    ///
    /// Triples go in as one bulk insert in assertion order; then every
    /// registered resource is declared on the store. Triples already in the
    /// store are left untouched.
    pub fn commit_into<G: GraphStore + ?Sized>(self, store: &mut G) -> Result<CommitReceipt> {
        let span = tracing::info_span!(
            "graph_commit",
            triple_count = self.pending.len(),
            resource_count = self.registry.len()
        );
        let _guard = span.enter();

        let mut triples = self.pending;
        if self.options.dedupe_on_commit {
            let removed = dedupe_triples(&mut triples);
            tracing::debug!(removed, "duplicate triples dropped");
        }

        let triple_count = triples.len();
        store.add_triples(triples)?;

        for (_, id) in self.registry.iter() {
            store.create_resource(id.as_str());
        }

        tracing::debug!(
            triple_count,
            resource_count = self.registry.len(),
            store_size = store.len(),
            "session committed"
        );

        Ok(CommitReceipt {
            triple_count,
            resource_count: self.registry.len(),
        })
    }
}

/// Assertions about a single subject, collected as one block
#[derive(Debug)]
pub struct SubjectStatements<'a> {
    subject: ResourceId,
    schemas: &'a SchemaSet<'a>,
    registry: &'a ResourceRegistry,
    triples: Vec<Triple>,
}

impl<'a> SubjectStatements<'a> {
    /// Subject of this block
    pub fn subject(&self) -> &ResourceId {
        &self.subject
    }

    /// Assert one fact about the subject; chainable
    pub fn assert(
        &mut self,
        predicate: impl Into<PropertyRef>,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        let triple = assemble(
            self.schemas,
            self.registry,
            &self.subject,
            &predicate.into(),
            value.into(),
        )?;
        self.triples.push(triple);
        Ok(self)
    }

    /// Triples collected in this block so far
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }
}

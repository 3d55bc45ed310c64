//! # rdfkit schema
//!
//! Short property names for RDF graph construction.
//!
//! This crate provides:
//! - Property schemas: a namespace template plus named properties, each with
//!   an optional IRI override and aliases
//! - Schema sets: ordered composition where the earliest schema wins
//! - Resource registries: session-local short names for resources
//! - Graph sessions: register resources, assert statements, commit the
//!   resulting triples to a [`GraphStore`](rdfkit_graph_ir::GraphStore)
//!
//! ## Example
//!
//! ```
//! use rdfkit_schema::{ref_resource, GraphSession, PropertySchema, SchemaSet};
//!
//! let animals = PropertySchema::build("http://example.com/animals/{{property}}", |b| {
//!     b.define("enemies_with");
//!     b.define("hair_color");
//! })?;
//! let people = PropertySchema::build("http://example.com/people/{{property}}", |b| {
//!     b.define("hair_color");
//! })?;
//!
//! // `people` is listed first, so it answers for `hair_color`
//! let mut session = GraphSession::new(SchemaSet::from([&people, &animals]));
//! session.register("dog", "http://example.com/dog")?;
//! session.register("cat", "http://example.com/cat")?;
//!
//! let mut statements = session.statements();
//! statements.assert("dog", "enemies_with", ref_resource("cat"))?;
//! statements.assert("dog", "hair_color", "brown")?;
//!
//! let graph = statements.commit()?;
//! assert_eq!(
//!     graph.triples()[1].p.as_iri(),
//!     Some("http://example.com/people/hair_color")
//! );
//! # Ok::<(), rdfkit_schema::SchemaError>(())
//! ```

pub mod builder;
pub mod definition;
pub mod error;
pub mod options;
pub mod predicate;
pub mod resource;
pub mod schema;
pub mod schema_set;
pub mod session;

// Re-exports
pub use builder::{validate_namespace, PropertyBuilder, PropertyHandle, SchemaBuilder};
pub use definition::{PropertyDefinition, SchemaDefinition};
pub use error::{Result, SchemaError};
pub use options::{DuplicatePolicy, SessionOptions};
pub use predicate::{PredicateId, PropertyRef};
pub use resource::{ref_resource, to_resource_id, ResourceId, ResourceRef, ResourceRegistry};
pub use schema::PropertySchema;
pub use schema_set::SchemaSet;
pub use session::{CommitReceipt, GraphSession, StatementSession, SubjectStatements, Value};

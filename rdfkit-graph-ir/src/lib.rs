//! In-memory RDF graph representation for rdfkit
//!
//! This crate provides the value types that schema-driven statement assembly
//! produces (terms, literals, triples), an in-memory [`Graph`], and the
//! [`GraphStore`] trait through which finished triples are handed to storage.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form.
//!
//! 2. **Explicit datatypes** - Literals always have an explicit datatype, never
//!    optional. Plain strings use `xsd:string`.
//!
//! 3. **Native literal values** - A literal built from a Rust integer keeps an
//!    integer value, and every integer width maps to `xsd:integer`; see
//!    [`IntoLiteral`].
//!
//! 4. **Bag semantics by default** - The `Graph` type uses `Vec<Triple>` to
//!    preserve duplicates. Call `dedupe()` explicitly for set semantics.
//!
//! # Example
//!
//! ```
//! use rdfkit_graph_ir::{make_literal, Graph, Term};
//!
//! let mut graph = Graph::new();
//!
//! graph.add_triple(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/age"),
//!     make_literal(30),
//! );
//!
//! let ages = graph.objects_of_predicate("http://xmlns.com/foaf/0.1/age");
//! assert_eq!(ages.len(), 1);
//! ```

pub mod datatype;
mod graph;
mod literal;
mod store;
mod term;
mod triple;

pub use datatype::Datatype;
pub use graph::{dedupe_triples, Graph};
pub use literal::{make_literal, IntoLiteral};
pub use store::{GraphStore, StoreError};
pub use term::{LiteralValue, Term};
pub use triple::Triple;

//! GraphStore trait: the boundary between statement assembly and storage
//!
//! Session code hands finished triples to a store through this trait and
//! never touches storage internals. `Graph` is the in-memory implementation;
//! other backends implement the same small surface.
//!
//! # Design
//!
//! - Writes: `create_resource`, `add_triple`, and a bulk `add_triples` that
//!   may refuse the whole batch.
//! - Reads: `len`, `is_empty`, `statements`, and predicate-indexed lookups.
//!   The lookups have default implementations that scan `statements()`;
//!   indexed backends should override them.

use crate::{Graph, Term, Triple};
use std::collections::BTreeSet;
use thiserror::Error;

/// A store refused a write
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("graph store rejected write: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    /// Create a store error with a message
    pub fn new(msg: impl Into<String>) -> Self {
        StoreError(msg.into())
    }
}

/// Storage surface used when committing a graph-building session
///
/// # Example
///
/// ```
/// use rdfkit_graph_ir::{Graph, GraphStore, Term, Triple};
///
/// let mut store = Graph::new();
/// let dog = store.create_resource("http://example.org/dog");
///
/// store
///     .add_triples(vec![Triple::new(
///         dog,
///         Term::iri("http://example.org/legs"),
///         Term::integer(4),
///     )])
///     .unwrap();
///
/// assert_eq!(store.len(), 1);
/// assert_eq!(store.subjects_with_predicate("http://example.org/legs").len(), 1);
/// ```
pub trait GraphStore {
    /// Declare a resource and return its IRI term
    fn create_resource(&mut self, iri: &str) -> Term;

    /// Insert one triple
    fn add_triple(&mut self, triple: Triple);

    /// Insert a batch of triples in order.
    ///
    /// Either every triple is inserted or, on error, none are. The default
    /// implementation cannot fail.
    fn add_triples(&mut self, triples: Vec<Triple>) -> Result<(), StoreError> {
        for triple in triples {
            self.add_triple(triple);
        }
        Ok(())
    }

    /// Number of stored triples
    fn len(&self) -> usize;

    /// True when no triples are stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate stored triples in the store's own order
    fn statements(&self) -> Box<dyn Iterator<Item = &Triple> + '_>;

    /// Distinct subjects with at least one triple using `predicate`
    fn subjects_with_predicate(&self, predicate: &str) -> BTreeSet<&Term> {
        self.statements()
            .filter(|t| t.p.as_iri() == Some(predicate))
            .map(|t| &t.s)
            .collect()
    }

    /// Distinct objects of triples using `predicate`
    fn objects_of_predicate(&self, predicate: &str) -> BTreeSet<&Term> {
        self.statements()
            .filter(|t| t.p.as_iri() == Some(predicate))
            .map(|t| &t.o)
            .collect()
    }
}

impl GraphStore for Graph {
    fn create_resource(&mut self, iri: &str) -> Term {
        Graph::create_resource(self, iri)
    }

    fn add_triple(&mut self, triple: Triple) {
        self.add(triple);
    }

    fn add_triples(&mut self, triples: Vec<Triple>) -> Result<(), StoreError> {
        tracing::trace!(count = triples.len(), "bulk insert into in-memory graph");
        self.extend(triples);
        Ok(())
    }

    fn len(&self) -> usize {
        Graph::len(self)
    }

    fn is_empty(&self) -> bool {
        Graph::is_empty(self)
    }

    fn statements(&self) -> Box<dyn Iterator<Item = &Triple> + '_> {
        Box::new(self.iter())
    }

    fn subjects_with_predicate(&self, predicate: &str) -> BTreeSet<&Term> {
        Graph::subjects_with_predicate(self, predicate)
    }

    fn objects_of_predicate(&self, predicate: &str) -> BTreeSet<&Term> {
        Graph::objects_of_predicate(self, predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store with only the required methods, exercising the defaults
    #[derive(Default)]
    struct VecStore {
        triples: Vec<Triple>,
    }

    impl GraphStore for VecStore {
        fn create_resource(&mut self, iri: &str) -> Term {
            Term::iri(iri)
        }

        fn add_triple(&mut self, triple: Triple) {
            self.triples.push(triple);
        }

        fn len(&self) -> usize {
            self.triples.len()
        }

        fn statements(&self) -> Box<dyn Iterator<Item = &Triple> + '_> {
            Box::new(self.triples.iter())
        }
    }

    fn triple(s: &str, p: &str, o: Term) -> Triple {
        Triple::new(Term::iri(s), Term::iri(p), o)
    }

    #[test]
    fn test_default_methods() {
        let mut store = VecStore::default();
        assert!(store.is_empty());

        store
            .add_triples(vec![
                triple("http://s/dog", "http://p/color", Term::string("brown")),
                triple("http://s/cat", "http://p/color", Term::string("brown")),
                triple("http://s/cat", "http://p/legs", Term::integer(4)),
            ])
            .unwrap();

        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
        assert_eq!(store.subjects_with_predicate("http://p/color").len(), 2);
        assert_eq!(store.objects_of_predicate("http://p/color").len(), 1);
        assert_eq!(store.statements().count(), 3);
    }

    #[test]
    fn test_graph_store_matches_graph() {
        let mut graph = Graph::new();
        GraphStore::add_triple(
            &mut graph,
            triple("http://s/dog", "http://p/color", Term::string("brown")),
        );
        assert_eq!(GraphStore::len(&graph), 1);
        assert_eq!(
            GraphStore::subjects_with_predicate(&graph, "http://p/color")
                .into_iter()
                .collect::<Vec<_>>(),
            vec![&Term::iri("http://s/dog")]
        );
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::new("full");
        assert_eq!(err.to_string(), "graph store rejected write: full");
    }
}

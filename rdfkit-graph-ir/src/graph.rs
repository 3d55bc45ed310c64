//! In-memory graph
//!
//! Triples are kept as a bag in insertion order: asserting a fact twice
//! stores it twice until [`Graph::dedupe`] is called. Resources declared with
//! [`Graph::create_resource`] are tracked on their own and are not
//! statements.

use crate::{Term, Triple};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Drop repeated triples, keeping each first occurrence in place.
///
/// Returns the number of triples removed.
pub fn dedupe_triples(triples: &mut Vec<Triple>) -> usize {
    let before = triples.len();
    let mut seen: FxHashSet<Triple> = FxHashSet::default();
    triples.retain(|t| seen.insert(t.clone()));
    before - triples.len()
}

/// Triples plus the resources declared on them
///
/// ```
/// use rdfkit_graph_ir::{Graph, Term};
///
/// let mut graph = Graph::new();
/// let dog = graph.create_resource("http://example.org/dog");
/// graph.add_triple(dog, Term::iri("http://example.org/legs"), Term::integer(4));
///
/// assert_eq!(graph.len(), 1);
/// assert_eq!(graph.resources().count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    /// Declaration order
    resources: Vec<Arc<str>>,
    declared: FxHashSet<Arc<str>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    /// Declare a resource and return its IRI term.
    ///
    /// Re-declaring an IRI is a no-op that returns the first allocation.
    pub fn create_resource(&mut self, iri: &str) -> Term {
        let iri = match self.declared.get(iri) {
            Some(existing) => existing.clone(),
            None => {
                let iri: Arc<str> = Arc::from(iri);
                self.declared.insert(iri.clone());
                self.resources.push(iri.clone());
                iri
            }
        };
        Term::iri_shared(iri)
    }

    /// True if `iri` was declared or appears as a subject
    pub fn contains_resource(&self, iri: &str) -> bool {
        self.declared.contains(iri) || self.triples.iter().any(|t| t.s.as_iri() == Some(iri))
    }

    /// Declared resource IRIs in declaration order
    pub fn resources(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(|r| &**r)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Triples in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Distinct subjects of triples using `predicate`
    pub fn subjects_with_predicate(&self, predicate: &str) -> BTreeSet<&Term> {
        self.iter()
            .filter(|t| t.p.as_iri() == Some(predicate))
            .map(|t| &t.s)
            .collect()
    }

    /// Distinct objects of triples using `predicate`
    pub fn objects_of_predicate(&self, predicate: &str) -> BTreeSet<&Term> {
        self.iter()
            .filter(|t| t.p.as_iri() == Some(predicate))
            .map(|t| &t.o)
            .collect()
    }

    /// Switch to set semantics; see [`dedupe_triples`]
    pub fn dedupe(&mut self) -> usize {
        dedupe_triples(&mut self.triples)
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}

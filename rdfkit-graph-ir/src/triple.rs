//! RDF triple: subject, predicate, object

use crate::Term;
use serde::{Deserialize, Serialize};

/// A single `(subject, predicate, object)` fact.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Subject (an IRI)
    pub s: Term,
    /// Predicate (an IRI)
    pub p: Term,
    /// Object (an IRI or a literal)
    pub o: Term,
}

impl Triple {
    /// Create a new triple
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self { s, p, o }
    }

    /// Predicate IRI, if the predicate is an IRI term
    pub fn predicate_iri(&self) -> Option<&str> {
        self.p.as_iri()
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}

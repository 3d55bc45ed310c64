//! Literal datatypes
//!
//! Every literal carries an explicit datatype IRI. Literals built from native
//! values get the datatype of their value kind (see [`Datatype::of`]), so a
//! given value always produces the same term regardless of the Rust type it
//! came from.

use crate::LiteralValue;
use rdfkit_vocab::xsd;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// RDF literal datatype, always an expanded IRI.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// Canonical datatype for a value kind:
    /// string, boolean, integer or double.
    pub fn of(value: &LiteralValue) -> Self {
        Self::from_iri(match value {
            LiteralValue::String(_) => xsd::STRING,
            LiteralValue::Boolean(_) => xsd::BOOLEAN,
            LiteralValue::Integer(_) => xsd::INTEGER,
            LiteralValue::Double(_) => xsd::DOUBLE,
        })
    }

    /// Expanded datatype IRI
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// True for xsd:string, which N-Triples output leaves implicit
    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == xsd::STRING
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_iri())
    }
}

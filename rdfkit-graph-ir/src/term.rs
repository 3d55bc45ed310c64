//! Terms: the IRIs and literals that fill triple positions

use crate::Datatype;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Native value held by a literal
///
/// Integers stay integers and booleans stay booleans; only the
/// [`lexical`](Self::lexical) form is textual.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LiteralValue {
    String(Arc<str>),
    Boolean(bool),
    Integer(i64),
    Double(f64),
}

/// Comparison key; doubles compare by IEEE total order so NaN equals itself.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
enum ValueKey<'a> {
    String(&'a str),
    Boolean(bool),
    Integer(i64),
    Double(i64),
}

impl LiteralValue {
    /// String value
    pub fn string(s: impl AsRef<str>) -> Self {
        LiteralValue::String(Arc::from(s.as_ref()))
    }

    fn key(&self) -> ValueKey<'_> {
        match self {
            LiteralValue::String(s) => ValueKey::String(s),
            LiteralValue::Boolean(b) => ValueKey::Boolean(*b),
            LiteralValue::Integer(i) => ValueKey::Integer(*i),
            LiteralValue::Double(d) => {
                let bits = d.to_bits() as i64;
                ValueKey::Double(bits ^ ((((bits >> 63) as u64) >> 1) as i64))
            }
        }
    }

    /// Lexical form as written in N-Triples
    pub fn lexical(&self) -> String {
        match self {
            LiteralValue::String(s) => s.to_string(),
            LiteralValue::Boolean(b) => b.to_string(),
            LiteralValue::Integer(i) => i.to_string(),
            LiteralValue::Double(d) if d.is_nan() => "NaN".into(),
            LiteralValue::Double(d) if d.is_infinite() && *d > 0.0 => "INF".into(),
            LiteralValue::Double(d) if d.is_infinite() => "-INF".into(),
            LiteralValue::Double(d) => d.to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LiteralValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            LiteralValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Double value; integers widen
    pub fn as_double(&self) -> Option<f64> {
        match self {
            LiteralValue::Double(d) => Some(*d),
            LiteralValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl PartialEq for LiteralValue {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for LiteralValue {}

impl Hash for LiteralValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

impl PartialOrd for LiteralValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LiteralValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// A term in subject, predicate or object position
///
/// Subjects and predicates are always `Iri`. IRIs are `Arc<str>` so that
/// terms built from one registered identifier share an allocation
/// ([`Term::same_iri_allocation`]). IRIs sort before literals.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    /// Expanded IRI
    Iri(Arc<str>),
    /// Literal value with its datatype
    Literal { value: LiteralValue, datatype: Datatype },
}

impl Term {
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    /// IRI term reusing an existing allocation
    pub fn iri_shared(iri: Arc<str>) -> Self {
        Term::Iri(iri)
    }

    /// Literal with the canonical datatype of its value kind
    pub fn literal(value: LiteralValue) -> Self {
        let datatype = Datatype::of(&value);
        Term::Literal { value, datatype }
    }

    pub fn string(value: impl AsRef<str>) -> Self {
        Self::literal(LiteralValue::string(value))
    }

    pub fn boolean(value: bool) -> Self {
        Self::literal(LiteralValue::Boolean(value))
    }

    pub fn integer(value: i64) -> Self {
        Self::literal(LiteralValue::Integer(value))
    }

    pub fn double(value: f64) -> Self {
        Self::literal(LiteralValue::Double(value))
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal { .. } => None,
        }
    }

    pub fn as_literal(&self) -> Option<(&LiteralValue, &Datatype)> {
        match self {
            Term::Literal { value, datatype } => Some((value, datatype)),
            Term::Iri(_) => None,
        }
    }

    /// True when both are IRIs backed by the same allocation
    pub fn same_iri_allocation(&self, other: &Term) -> bool {
        matches!((self, other), (Term::Iri(a), Term::Iri(b)) if Arc::ptr_eq(a, b))
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Literal { value, datatype } => {
                f.write_str("\"")?;
                write_escaped(f, &value.lexical())?;
                f.write_str("\"")?;
                if !datatype.is_xsd_string() {
                    write!(f, "^^<{datatype}>")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_literal_is_not_a_string() {
        let four = Term::integer(4);
        let (value, dt) = four.as_literal().unwrap();
        assert_eq!(value.as_integer(), Some(4));
        assert_eq!(value.as_str(), None);
        assert_eq!(dt.as_iri(), rdfkit_vocab::xsd::INTEGER);
        assert_ne!(four, Term::string("4"));
        assert_eq!(four.as_iri(), None);
    }

    #[test]
    fn test_lexical_forms() {
        assert_eq!(LiteralValue::Boolean(true).lexical(), "true");
        assert_eq!(LiteralValue::Integer(-42).lexical(), "-42");
        assert_eq!(LiteralValue::Double(2.5).lexical(), "2.5");
        assert_eq!(LiteralValue::Double(f64::NAN).lexical(), "NaN");
        assert_eq!(LiteralValue::Double(f64::INFINITY).lexical(), "INF");
        assert_eq!(LiteralValue::Double(f64::NEG_INFINITY).lexical(), "-INF");
    }

    #[test]
    fn test_iris_sort_before_literals() {
        assert!(Term::iri("http://z.org") < Term::string("a"));
        assert!(Term::iri("http://a.org") < Term::iri("http://b.org"));
        assert!(Term::double(-1.0) < Term::double(0.5));
    }

    #[test]
    fn test_display_escapes_strings() {
        assert_eq!(Term::iri("http://example.org").to_string(), "<http://example.org>");
        assert_eq!(Term::string("say \"hi\"\n").to_string(), r#""say \"hi\"\n""#);
        assert_eq!(
            Term::boolean(false).to_string(),
            "\"false\"^^<http://www.w3.org/2001/XMLSchema#boolean>"
        );
    }

    #[test]
    fn test_shared_iri_allocation() {
        let shared: Arc<str> = Arc::from("http://example.org/p");
        let a = Term::iri_shared(shared.clone());
        let b = Term::iri_shared(shared);
        let c = Term::iri("http://example.org/p");

        assert!(a.same_iri_allocation(&b));
        assert!(!a.same_iri_allocation(&c));
        assert_eq!(a, c);
    }

    #[test]
    fn test_nan_equals_itself() {
        assert_eq!(Term::double(f64::NAN), Term::double(f64::NAN));
        assert_ne!(Term::double(0.0), Term::double(-0.0));
    }
}

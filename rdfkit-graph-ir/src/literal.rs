//! Native value to typed literal conversion
//!
//! [`IntoLiteral`] is the literal constructor used when a statement object is
//! a plain Rust value. Conversion goes through [`LiteralValue`], so every
//! integer type yields `xsd:integer`, every float type `xsd:double`, and
//! `make_literal(4)` equals `Term::integer(4)`.

use crate::{LiteralValue, Term};

/// Convert a native scalar into a typed literal term.
pub trait IntoLiteral {
    /// Build the literal term for this value
    fn into_literal(self) -> Term;
}

impl IntoLiteral for LiteralValue {
    fn into_literal(self) -> Term {
        Term::literal(self)
    }
}

macro_rules! into_literal_via {
    ($variant:ident: $($t:ty),+) => {
        $(
            impl IntoLiteral for $t {
                fn into_literal(self) -> Term {
                    Term::literal(LiteralValue::$variant(self.into()))
                }
            }
        )+
    };
}

into_literal_via!(Integer: i8, i16, i32, i64, u8, u16, u32);
into_literal_via!(Double: f32, f64);
into_literal_via!(Boolean: bool);

impl IntoLiteral for &str {
    fn into_literal(self) -> Term {
        Term::string(self)
    }
}

impl IntoLiteral for String {
    fn into_literal(self) -> Term {
        Term::string(self)
    }
}

impl IntoLiteral for &String {
    fn into_literal(self) -> Term {
        Term::string(self)
    }
}

/// Build a typed literal from any supported native value.
pub fn make_literal(value: impl IntoLiteral) -> Term {
    value.into_literal()
}

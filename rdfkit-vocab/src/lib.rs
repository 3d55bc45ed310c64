//! RDF Vocabulary Constants for rdfkit
//!
//! This crate provides a centralized location for the vocabulary IRIs and
//! shared string constants used across the rdfkit crates.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `schema` - Property schema templating tokens
//! - `errors` - Error type compact IRIs for API responses

pub mod errors;

/// XSD vocabulary constants
pub mod xsd {
    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
}

/// Property schema templating
pub mod schema {
    /// Placeholder that a namespace template must contain exactly where the
    /// property name is substituted, e.g. `http://example.com/{{property}}`.
    pub const PROPERTY_PLACEHOLDER: &str = "{{property}}";

    /// Expand a namespace template for a property name.
    ///
    /// Every occurrence of [`PROPERTY_PLACEHOLDER`] is replaced. Callers are
    /// expected to have validated the template already.
    pub fn expand(template: &str, name: &str) -> String {
        template.replace(PROPERTY_PLACEHOLDER, name)
    }
}

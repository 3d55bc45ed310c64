//! Error type compact IRIs
//!
//! These compact IRI strings identify error types in API responses.
//! They follow the pattern: `err:category/ErrorName`
//!
//! The `err:` prefix is expected to map to an application-chosen errors
//! namespace in a JSON-LD context.
//!
//! # Example Usage
//!
//! ```json
//! {
//!   "error": "Unknown property: hair_colour",
//!   "@type": "err:schema/UnknownProperty"
//! }
//! ```

/// Error namespace prefix
pub const ERR_PREFIX: &str = "err:";

// =============================================================================
// Schema Errors (schema)
// =============================================================================

/// Namespace template is missing the property placeholder
pub const INVALID_NAMESPACE: &str = "err:schema/InvalidNamespace";

/// Property name did not resolve against any schema
pub const UNKNOWN_PROPERTY: &str = "err:schema/UnknownProperty";

/// Declarative schema definition is malformed
pub const INVALID_DEFINITION: &str = "err:schema/InvalidDefinition";

/// Schema definition could not be parsed as JSON
pub const INVALID_JSON: &str = "err:schema/InvalidJson";

// =============================================================================
// Graph Session Errors (graph)
// =============================================================================

/// Resource short name was never registered in the session
pub const UNKNOWN_RESOURCE: &str = "err:graph/UnknownResource";

/// Resource short name registered twice with different identifiers
pub const DUPLICATE_RESOURCE: &str = "err:graph/DuplicateResource";

/// Graph store rejected the commit
pub const STORE_REJECTED: &str = "err:graph/StoreRejected";

/// Check whether a string is one of the compact error IRIs.
pub fn is_error_iri(s: &str) -> bool {
    s.starts_with(ERR_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_iris_use_prefix() {
        for iri in [
            INVALID_NAMESPACE,
            UNKNOWN_PROPERTY,
            INVALID_DEFINITION,
            INVALID_JSON,
            UNKNOWN_RESOURCE,
            DUPLICATE_RESOURCE,
            STORE_REJECTED,
        ] {
            assert!(is_error_iri(iri), "{iri} missing prefix");
        }
    }
}

//! Schema and session error types

use rdfkit_graph_ir::StoreError;
use rdfkit_vocab::errors;
use thiserror::Error;

/// Errors raised while building schemas, resolving names, or assembling
/// and committing statements
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Namespace template lacks the `{{property}}` placeholder
    #[error("Invalid namespace: {namespace}; missing '{{{{property}}}}' placeholder")]
    InvalidNamespace { namespace: String },

    /// Property name not found in the schema (or in any schema of a set)
    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    /// Resource short name never registered in the session
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// Resource short name registered again with a different identifier
    #[error("Duplicate resource '{name}': already bound to {existing}, refused {attempted}")]
    DuplicateResource {
        name: String,
        existing: String,
        attempted: String,
    },

    /// Declarative schema definition is malformed
    #[error("Invalid schema definition: {0}")]
    InvalidDefinition(String),

    /// JSON parsing error for a schema definition
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Graph store refused the commit
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl SchemaError {
    /// Create an invalid namespace error
    pub fn invalid_namespace(namespace: impl Into<String>) -> Self {
        SchemaError::InvalidNamespace {
            namespace: namespace.into(),
        }
    }

    /// Create an unknown property error
    pub fn unknown_property(name: impl Into<String>) -> Self {
        SchemaError::UnknownProperty(name.into())
    }

    /// Create an unknown resource error
    pub fn unknown_resource(name: impl Into<String>) -> Self {
        SchemaError::UnknownResource(name.into())
    }

    /// Create an invalid definition error
    pub fn invalid_definition(msg: impl Into<String>) -> Self {
        SchemaError::InvalidDefinition(msg.into())
    }

    /// Compact error-type IRI for API responses
    pub fn error_type(&self) -> &'static str {
        match self {
            SchemaError::InvalidNamespace { .. } => errors::INVALID_NAMESPACE,
            SchemaError::UnknownProperty(_) => errors::UNKNOWN_PROPERTY,
            SchemaError::UnknownResource(_) => errors::UNKNOWN_RESOURCE,
            SchemaError::DuplicateResource { .. } => errors::DUPLICATE_RESOURCE,
            SchemaError::InvalidDefinition(_) => errors::INVALID_DEFINITION,
            SchemaError::Json(_) => errors::INVALID_JSON,
            SchemaError::Store(_) => errors::STORE_REJECTED,
        }
    }
}

/// Result type for schema and session operations
pub type Result<T> = std::result::Result<T, SchemaError>;

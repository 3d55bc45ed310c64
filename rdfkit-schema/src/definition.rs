//! Declarative schema definitions
//!
//! A [`SchemaDefinition`] is the data form of a schema: a namespace template
//! plus a list of properties, each with an optional IRI override and any
//! number of aliases. It deserializes with serde, so schemas can be shipped
//! as JSON:
//!
//! ```json
//! {
//!   "namespace": "http://example.com/animals/{{property}}",
//!   "properties": [
//!     { "name": "leg_count", "aliases": ["lc", "l"] },
//!     { "name": "tail_count", "uri": "http://other.com/tail_count", "aliases": ["tc"] }
//!   ]
//! }
//! ```
//!
//! Converting a definition goes through [`SchemaBuilder`], so the result is
//! identical to building the same schema in code.

use crate::builder::SchemaBuilder;
use crate::error::Result;
use crate::schema::PropertySchema;
use serde::{Deserialize, Serialize};

/// Data form of a property schema
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Namespace template containing `{{property}}`
    pub namespace: String,
    /// Properties, applied in order
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
}

/// One property of a [`SchemaDefinition`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    /// Short property name
    pub name: String,
    /// Explicit IRI; derived from the namespace when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Alternate names resolving to the same predicate
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl PropertyDefinition {
    /// Property with a derived IRI and no aliases
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: None,
            aliases: Vec::new(),
        }
    }
}

impl SchemaDefinition {
    /// Validate and build the schema.
    ///
    /// Empty names and aliases fail with `InvalidDefinition`, the same as
    /// when the schema is built in code.
    pub fn into_schema(self) -> Result<PropertySchema> {
        let mut builder = SchemaBuilder::new(&self.namespace)?;
        for property in &self.properties {
            let predicate = builder
                .define_with(&property.name, |p| {
                    if let Some(uri) = &property.uri {
                        p.uri(uri.as_str());
                    }
                })
                .predicate()
                .clone();
            for alias in &property.aliases {
                builder.alias(&predicate, alias);
            }
        }
        builder.build()
    }
}

impl PropertySchema {
    /// Build a schema from its data form
    pub fn from_definition(definition: SchemaDefinition) -> Result<PropertySchema> {
        definition.into_schema()
    }

    /// Parse a JSON schema definition and build it
    pub fn from_json(json: &str) -> Result<PropertySchema> {
        let definition: SchemaDefinition = serde_json::from_str(json)?;
        definition.into_schema()
    }

    /// Build a schema from an already-parsed JSON value
    pub fn from_json_value(value: &serde_json::Value) -> Result<PropertySchema> {
        let definition = SchemaDefinition::deserialize(value)?;
        definition.into_schema()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;
    use serde_json::json;

    #[test]
    fn test_from_json_value() {
        let schema = PropertySchema::from_json_value(&json!({
            "namespace": "http://example.com/animals/{{property}}",
            "properties": [
                { "name": "leg_count", "aliases": ["lc", "l"] },
                { "name": "tail_count", "uri": "http://other.com/tail_count", "aliases": ["tc"] }
            ]
        }))
        .unwrap();

        assert_eq!(schema.len(), 5);
        let legs = schema.property("leg_count").unwrap();
        assert_eq!(legs.as_str(), "http://example.com/animals/leg_count");
        assert!(legs.ptr_eq(&schema.property("l").unwrap()));
        assert_eq!(
            schema.property("tc").unwrap().as_str(),
            "http://other.com/tail_count"
        );
    }

    #[test]
    fn test_invalid_namespace_wins_over_other_problems() {
        let err = PropertySchema::from_json(r#"{"namespace": "ns", "properties": [{"name": ""}]}"#)
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidNamespace { .. }));
    }

    #[test]
    fn test_empty_names_rejected() {
        let err = SchemaDefinition {
            namespace: "http://x/{{property}}".into(),
            properties: vec![PropertyDefinition::new("")],
        }
        .into_schema()
        .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDefinition(_)));

        let mut prop = PropertyDefinition::new("name");
        prop.aliases.push(String::new());
        let err = SchemaDefinition {
            namespace: "http://x/{{property}}".into(),
            properties: vec![prop],
        }
        .into_schema()
        .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDefinition(_)));
    }

    #[test]
    fn test_empty_name_rejected_by_both_paths() {
        let from_code = PropertySchema::build("http://x/{{property}}", |b| {
            b.define("");
        })
        .unwrap_err();
        let from_data = SchemaDefinition {
            namespace: "http://x/{{property}}".into(),
            properties: vec![PropertyDefinition::new("")],
        }
        .into_schema()
        .unwrap_err();

        assert_eq!(from_code.error_type(), "err:schema/InvalidDefinition");
        assert_eq!(from_code.to_string(), from_data.to_string());
    }

    #[test]
    fn test_malformed_json() {
        let err = PropertySchema::from_json("{not json").unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
        assert_eq!(err.error_type(), "err:schema/InvalidJson");
    }

    #[test]
    fn test_properties_default_to_empty() {
        let schema = PropertySchema::from_json(r#"{"namespace": "http://x/{{property}}"}"#).unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_definition_serializes_compactly() {
        let def = SchemaDefinition {
            namespace: "http://x/{{property}}".into(),
            properties: vec![PropertyDefinition::new("name")],
        };
        assert_eq!(
            serde_json::to_value(&def).unwrap(),
            json!({"namespace": "http://x/{{property}}", "properties": [{"name": "name"}]})
        );
    }
}

//! Schema document model for flat-object JSON-Schema documents.
//!
//! The model covers exactly the subset of JSON-Schema this crate maps to
//! command-line flags: named properties on a root-level object, each with a
//! primitive type, optional description, default, enumerated choices, and
//! (for arrays) a scalar element type. Unknown keywords are ignored here;
//! meta-schema validation of the raw document happens before the model is
//! ever constructed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BuildError;

/// A JSON-Schema document describing a flat object.
///
/// Properties keep their document order, which is the order flags are
/// registered on the generated parser.
///
/// # Examples
///
/// ```
/// use schema_args_core::SchemaDocument;
///
/// let document: SchemaDocument = serde_json::from_value(serde_json::json!({
///     "title": "greeter",
///     "properties": {
///         "name": { "type": "string" },
///         "count": { "type": "integer", "default": 1 },
///     },
///     "required": ["name"],
/// }))
/// .unwrap();
///
/// assert_eq!(document.title.as_deref(), Some("greeter"));
/// assert_eq!(document.properties.len(), 2);
/// assert_eq!(document.required, vec!["name"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Program title, used as the generated parser's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Document description, used as the generated parser's help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Property name → property schema, in document order.
    pub properties: IndexMap<String, PropertySchema>,
    /// Names of required properties. Entries naming absent properties are
    /// not an error; they simply never mark a flag required.
    #[serde(default)]
    pub required: Vec<String>,
}

/// Schema for a single property of the root object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Declared primitive type name(s).
    #[serde(rename = "type")]
    pub type_decl: TypeDecl,
    /// Help text for the derived flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default value, inserted verbatim when the flag is not supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Allowed values; supplied arguments must coerce into this set.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Value>>,
    /// Element schema for array-typed properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemsSchema>,
}

/// Element schema for array-typed properties.
///
/// Only the element type name is consulted; every other keyword is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemsSchema {
    /// Element type name. Absent means elements stay strings.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

/// The `type` keyword: a single type name or a union of names.
///
/// # Examples
///
/// ```
/// use schema_args_core::{PropertyType, TypeDecl};
///
/// let single: TypeDecl = serde_json::from_value(serde_json::json!("integer")).unwrap();
/// assert_eq!(single.resolve("count").unwrap(), (PropertyType::Integer, false));
///
/// // A union with "null" resolves to the other member and forces the flag
/// // optional.
/// let union: TypeDecl = serde_json::from_value(serde_json::json!(["string", "null"])).unwrap();
/// assert_eq!(union.resolve("mode").unwrap(), (PropertyType::String, true));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeDecl {
    /// A single type name.
    One(String),
    /// A union of type names.
    Union(Vec<String>),
}

impl TypeDecl {
    /// Resolves the declaration to a single supported type, plus whether
    /// `"null"` was declared alongside it (which forces the derived flag
    /// optional).
    ///
    /// # Errors
    ///
    /// [`BuildError::MultipleTypeOptions`] when more than one non-null type
    /// remains, since a single flag cannot carry ambiguous coercion semantics.
    /// [`BuildError::UnknownType`] when the name is outside the supported
    /// primitive set, or when `"null"` is the only declared type.
    pub fn resolve(&self, property: &str) -> Result<(PropertyType, bool), BuildError> {
        match self {
            TypeDecl::One(name) => Ok((lookup_type(property, name)?, false)),
            TypeDecl::Union(names) => {
                let nullable = names.iter().any(|name| name == "null");
                let rest: Vec<&String> =
                    names.iter().filter(|name| name.as_str() != "null").collect();
                match rest.as_slice() {
                    [only] => Ok((lookup_type(property, only)?, nullable)),
                    [] => Err(BuildError::UnknownType {
                        property: property.to_string(),
                        type_name: "null".to_string(),
                    }),
                    _ => Err(BuildError::MultipleTypeOptions {
                        property: property.to_string(),
                    }),
                }
            }
        }
    }
}

fn lookup_type(property: &str, name: &str) -> Result<PropertyType, BuildError> {
    PropertyType::from_name(name).ok_or_else(|| BuildError::UnknownType {
        property: property.to_string(),
        type_name: name.to_string(),
    })
}

/// The supported primitive types, one per coercion behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    /// Identity string parse.
    String,
    /// Integer parse.
    Integer,
    /// Floating-point parse.
    Number,
    /// Boolean spellings (`true`/`false`/`1`/`0`).
    Boolean,
    /// Variable-length sequence of scalar elements.
    Array,
    /// Data file loaded at parse time.
    Object,
}

impl PropertyType {
    /// Resolves a JSON-Schema primitive type name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "array" => Some(Self::Array),
            "object" => Some(Self::Object),
            _ => None,
        }
    }

    /// The JSON-Schema name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// Scalar types accepted for array elements.
///
/// Arrays carry a single scalar element type for all elements; nested object
/// or array items are unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemType {
    /// Elements stay strings (the default when `items` is absent).
    #[default]
    String,
    /// Elements parse as integers.
    Integer,
    /// Elements parse as numbers.
    Number,
    /// Elements parse as booleans.
    Boolean,
}

impl ItemType {
    /// Resolves a scalar element type name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(value: serde_json::Value) -> TypeDecl {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_resolve_single_type() {
        let (resolved, nullable) = decl(serde_json::json!("string")).resolve("name").unwrap();
        assert_eq!(resolved, PropertyType::String);
        assert!(!nullable);
    }

    #[test]
    fn test_resolve_null_union_forces_optional() {
        let (resolved, nullable) = decl(serde_json::json!(["null", "integer"]))
            .resolve("count")
            .unwrap();
        assert_eq!(resolved, PropertyType::Integer);
        assert!(nullable);
    }

    #[test]
    fn test_resolve_single_element_union() {
        let (resolved, nullable) = decl(serde_json::json!(["number"])).resolve("ratio").unwrap();
        assert_eq!(resolved, PropertyType::Number);
        assert!(!nullable);
    }

    #[test]
    fn test_resolve_rejects_multiple_types() {
        let err = decl(serde_json::json!(["string", "integer"]))
            .resolve("mode")
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::MultipleTypeOptions { property } if property == "mode"
        ));
    }

    #[test]
    fn test_resolve_rejects_null_only() {
        let err = decl(serde_json::json!(["null"])).resolve("mode").unwrap_err();
        assert!(matches!(
            err,
            BuildError::UnknownType { property, type_name }
                if property == "mode" && type_name == "null"
        ));
    }

    #[test]
    fn test_resolve_rejects_unknown_name() {
        let err = decl(serde_json::json!("quaternion")).resolve("spin").unwrap_err();
        assert!(matches!(
            err,
            BuildError::UnknownType { type_name, .. } if type_name == "quaternion"
        ));
    }

    #[test]
    fn test_document_preserves_property_order() {
        let document: SchemaDocument = serde_json::from_value(serde_json::json!({
            "properties": {
                "zeta": { "type": "string" },
                "alpha": { "type": "string" },
                "mid": { "type": "string" },
            },
        }))
        .unwrap();

        let names: Vec<&str> = document.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_document_requires_properties_key() {
        let result: Result<SchemaDocument, _> =
            serde_json::from_value(serde_json::json!({ "title": "empty" }));
        assert!(result.is_err());
    }
}

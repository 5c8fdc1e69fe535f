//! Schema-to-CLI building: one flag per declared property.
//!
//! [`build`] validates the document against the JSON-Schema meta-schema,
//! then walks `properties` in document order, deriving a [`FlagSpec`] for
//! each and registering it on a [`clap::Command`]. No I/O happens here;
//! object-typed flags only touch the filesystem later, at parse time.

use clap::{Arg, ArgAction, Command};
use serde_json::Value;
use tracing::debug;

use crate::coerce::Coercion;
use crate::error::BuildError;
use crate::parser::Parser;
use crate::types::{ItemType, PropertySchema, PropertyType, SchemaDocument};

/// Program name used when the document has no `title`.
const DEFAULT_PROG: &str = "schema-args";

/// Builds an argument parser from a JSON-Schema document.
///
/// The document is first validated against the standard meta-schema for
/// whatever draft its `$schema` keyword selects, then deserialized into the
/// flat-object model and turned into a [`Parser`] with one flag per
/// property.
///
/// # Examples
///
/// ```
/// let schema = serde_json::json!({
///     "title": "greeter",
///     "description": "Greet someone",
///     "properties": {
///         "name": { "type": "string", "description": "Who to greet" },
///         "count": { "type": "integer", "default": 1 },
///     },
///     "required": ["name"],
/// });
///
/// let parser = schema_args_core::build(&schema).unwrap();
/// assert_eq!(parser.flags().len(), 2);
/// ```
///
/// # Errors
///
/// [`BuildError::SchemaValidation`] if the document is not a valid
/// JSON-Schema, [`BuildError::Document`] if it does not fit the flat-object
/// model, and the per-property resolution errors
/// ([`BuildError::MultipleTypeOptions`], [`BuildError::UnknownType`])
/// described on [`TypeDecl::resolve`](crate::TypeDecl::resolve).
pub fn build(schema: &Value) -> Result<Parser, BuildError> {
    jsonschema::meta::validate(schema)
        .map_err(|err| BuildError::SchemaValidation(err.to_string()))?;
    let document: SchemaDocument = serde_json::from_value(schema.clone())?;
    build_from_document(&document)
}

/// Builds an argument parser from an already-deserialized document.
///
/// Skips meta-schema validation; use [`build`] when starting from a raw
/// document.
///
/// # Errors
///
/// The per-property resolution errors described on [`build`].
pub fn build_from_document(document: &SchemaDocument) -> Result<Parser, BuildError> {
    let prog = document
        .title
        .clone()
        .unwrap_or_else(|| DEFAULT_PROG.to_string());
    let mut command = Command::new(prog).no_binary_name(true);
    if let Some(about) = &document.description {
        command = command.about(about.clone());
    }

    let mut flags = Vec::with_capacity(document.properties.len());
    for (name, property) in &document.properties {
        let spec = FlagSpec::derive(name, property, &document.required)?;
        debug!(
            property = %spec.property,
            flag = %spec.flag,
            coercion = ?spec.coercion,
            required = spec.required,
            "Registered flag"
        );
        command = command.arg(spec.to_arg());
        flags.push(spec);
    }

    Ok(Parser::new(command, flags))
}

/// Derived CLI flag specification for one schema property.
///
/// Captures the common registration parameters (name, required, help,
/// default, choices) together with the type-specific [`Coercion`]. Specs are
/// held by the [`Parser`] in declaration order and drive its parse-time
/// behavior.
#[derive(Debug, Clone)]
pub struct FlagSpec {
    /// Property name as declared in the document; key of the parse result.
    pub property: String,
    /// Long flag name: the property name with underscores replaced by
    /// hyphens (rendered as `--{flag}` on the command line).
    pub flag: String,
    /// Whether the flag must be supplied.
    pub required: bool,
    /// Help text from the property description.
    pub help: Option<String>,
    /// Default value, inserted verbatim when the flag is absent.
    pub default: Option<Value>,
    /// Enumerated choices; supplied values must coerce into this set.
    pub choices: Option<Vec<Value>>,
    /// Coercion applied to supplied tokens.
    pub coercion: Coercion,
}

impl FlagSpec {
    /// Derives the specification for one `(name, property)` pair.
    fn derive(
        name: &str,
        property: &PropertySchema,
        required_names: &[String],
    ) -> Result<Self, BuildError> {
        let (property_type, nullable) = property.type_decl.resolve(name)?;
        let required = !nullable && required_names.iter().any(|entry| entry == name);

        let coercion = match property_type {
            PropertyType::String => Coercion::String,
            PropertyType::Integer => Coercion::Integer,
            PropertyType::Number => Coercion::Number,
            PropertyType::Boolean => Coercion::Boolean,
            PropertyType::Array => Coercion::Array(item_type(name, property)?),
            PropertyType::Object => Coercion::Object,
        };

        Ok(Self {
            property: name.to_string(),
            flag: name.replace('_', "-"),
            required,
            help: property.description.clone(),
            default: property.default.clone(),
            choices: property.choices.clone(),
            coercion,
        })
    }

    /// Whether this flag accepts a variable-length sequence of values.
    pub fn is_array(&self) -> bool {
        matches!(self.coercion, Coercion::Array(_))
    }

    /// Renders the clap argument for this flag.
    fn to_arg(&self) -> Arg {
        let mut arg = Arg::new(self.property.clone())
            .long(self.flag.clone())
            .required(self.required)
            .action(ArgAction::Set);
        if self.is_array() {
            arg = arg.num_args(0..);
        }
        if let Some(help) = &self.help {
            arg = arg.help(help.clone());
        }
        arg
    }
}

fn item_type(name: &str, property: &PropertySchema) -> Result<ItemType, BuildError> {
    let Some(declared) = property
        .items
        .as_ref()
        .and_then(|items| items.type_name.as_deref())
    else {
        return Ok(ItemType::String);
    };
    ItemType::from_name(declared).ok_or_else(|| BuildError::UnknownType {
        property: name.to_string(),
        type_name: declared.to_string(),
    })
}

//! Coercion functions: raw command-line tokens → typed JSON values.
//!
//! Each supported primitive type has exactly one [`Coercion`] variant, so
//! dispatch is an exhaustive match rather than a runtime type-name
//! comparison.

use serde_json::Value;

use crate::error::CoerceError;
use crate::loader::load_data;
use crate::types::ItemType;

/// Coercion behavior attached to a derived flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Identity string parse.
    String,
    /// Integer parse.
    Integer,
    /// Floating-point parse.
    Number,
    /// Boolean spellings via [`coerce_bool`].
    Boolean,
    /// Variable-length sequence; each element coerced to the item type.
    Array(ItemType),
    /// File path, loaded as JSON or YAML by [`load_data`].
    Object,
}

impl Coercion {
    /// Coerces one raw token to its typed value.
    ///
    /// For `Array`, the token is a single element of the sequence; callers
    /// apply this to each supplied value in turn.
    ///
    /// # Errors
    ///
    /// The [`CoerceError`] variant matching the failed conversion, or any
    /// loader failure for `Object` tokens.
    pub fn apply(&self, raw: &str) -> Result<Value, CoerceError> {
        match self {
            Coercion::String => Ok(Value::String(raw.to_string())),
            Coercion::Integer => coerce_integer(raw),
            Coercion::Number => coerce_number(raw),
            Coercion::Boolean => coerce_bool(raw).map(Value::Bool),
            Coercion::Array(item) => item.coercion().apply(raw),
            Coercion::Object => load_data(raw),
        }
    }

    /// The JSON-Schema type name this coercion corresponds to.
    pub fn type_name(&self) -> &'static str {
        match self {
            Coercion::String => "string",
            Coercion::Integer => "integer",
            Coercion::Number => "number",
            Coercion::Boolean => "boolean",
            Coercion::Array(_) => "array",
            Coercion::Object => "object",
        }
    }
}

impl ItemType {
    /// The scalar coercion for elements of this type.
    pub fn coercion(&self) -> Coercion {
        match self {
            ItemType::String => Coercion::String,
            ItemType::Integer => Coercion::Integer,
            ItemType::Number => Coercion::Number,
            ItemType::Boolean => Coercion::Boolean,
        }
    }
}

/// Converts a string to a boolean.
///
/// Case-insensitive `"true"`/`"1"` and `"false"`/`"0"` are supported.
///
/// # Examples
///
/// ```
/// use schema_args_core::coerce_bool;
///
/// assert!(coerce_bool("TRUE").unwrap());
/// assert!(!coerce_bool("0").unwrap());
/// assert!(coerce_bool("yes").is_err());
/// ```
///
/// # Errors
///
/// [`CoerceError::UnknownBoolean`] naming the unrecognized text.
pub fn coerce_bool(text: &str) -> Result<bool, CoerceError> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(CoerceError::UnknownBoolean(text.to_string())),
    }
}

fn coerce_integer(raw: &str) -> Result<Value, CoerceError> {
    raw.parse::<i64>()
        .map(Value::from)
        .map_err(|_| CoerceError::InvalidInteger(raw.to_string()))
}

fn coerce_number(raw: &str) -> Result<Value, CoerceError> {
    let parsed = raw
        .parse::<f64>()
        .map_err(|_| CoerceError::InvalidNumber(raw.to_string()))?;
    // NaN and infinities have no JSON representation.
    serde_json::Number::from_f64(parsed)
        .map(Value::Number)
        .ok_or_else(|| CoerceError::InvalidNumber(raw.to_string()))
}

//! Error types for schema-to-CLI building and argument parsing.
//!
//! One family per phase: [`BuildError`] for parser construction,
//! [`ParseError`] for argument parsing, and [`CoerceError`] for token
//! coercion and data-file loading. Every variant carries the offending
//! property name, flag name, or file path as structured data.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a parser from a schema document.
///
/// All of these abort construction immediately; no partial parser is ever
/// returned.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The document is not a structurally valid JSON-Schema.
    #[error("invalid JSON-Schema document: {0}")]
    SchemaValidation(String),

    /// The document does not fit the flat-object model (e.g. missing
    /// `properties`, or a `type` keyword of the wrong shape).
    #[error("malformed schema document: {0}")]
    Document(#[from] serde_json::Error),

    /// A property declares more than one non-null type.
    #[error("only one type allowed per property: {property}")]
    MultipleTypeOptions {
        /// Name of the offending property.
        property: String,
    },

    /// A property declares a type outside the supported primitive set.
    #[error("unknown type `{type_name}` for property: {property}")]
    UnknownType {
        /// Name of the offending property.
        property: String,
        /// The unrecognized type name.
        type_name: String,
    },
}

/// Errors raised while parsing argument tokens with a built parser.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Usage-level failure from the underlying argument matcher: an unknown
    /// flag, a missing required flag, or a help/version request. Front ends
    /// should let the wrapped error render itself so users get conventional
    /// usage output.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// A supplied value could not be coerced to the flag's declared type.
    #[error("invalid value for --{flag}: {source}")]
    Coercion {
        /// The flag the value was supplied for.
        flag: String,
        /// The underlying coercion failure.
        #[source]
        source: CoerceError,
    },

    /// A supplied value is not one of the flag's enumerated choices.
    #[error("invalid choice for --{flag}: {value} is not one of [{choices}]")]
    InvalidChoice {
        /// The flag the value was supplied for.
        flag: String,
        /// The rejected value, rendered as JSON.
        value: String,
        /// The allowed choices, rendered as JSON.
        choices: String,
    },
}

/// Errors raised by coercion functions and the data loader.
#[derive(Debug, Error)]
pub enum CoerceError {
    /// Text that does not parse as an integer.
    #[error("invalid integer value: {0}")]
    InvalidInteger(String),

    /// Text that does not parse as a number.
    #[error("invalid numeric value: {0}")]
    InvalidNumber(String),

    /// Text that is not a recognized boolean spelling.
    #[error("unknown boolean value: {0}")]
    UnknownBoolean(String),

    /// Data file with an extension other than `.json`/`.yml`/`.yaml`.
    #[error("unknown file type: {}", .0.display())]
    UnknownFileType(PathBuf),

    /// Data file could not be resolved or opened.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Data file contained invalid JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        /// Path of the file.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Data file contained invalid YAML.
    #[error("invalid YAML in {}: {source}", .path.display())]
    Yaml {
        /// Path of the file.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_yaml::Error,
    },
}

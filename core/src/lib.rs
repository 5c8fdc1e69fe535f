//! Build command-line argument parsers from JSON-Schema documents.
//!
//! Given a JSON-Schema document describing a flat object (named properties
//! on a root-level object), [`build`] derives one CLI flag per property,
//! with type coercion, required/optional status, default values, enumerated
//! choices, and help text, and returns a ready [`Parser`].
//!
//! - [`SchemaDocument`] — the flat-object document model.
//! - [`build`] — meta-validates a document and constructs the parser.
//! - [`Parser`] — parses argument tokens into a property → value mapping.
//! - [`coerce_bool`] and [`load_data`] — the boolean and data-file coercion
//!   helpers, also usable on their own.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let schema = json!({
//!     "title": "greeter",
//!     "description": "Greet someone",
//!     "properties": {
//!         "name": { "type": "string", "description": "Who to greet" },
//!         "count": { "type": "integer", "default": 1 },
//!         "loud": { "type": "boolean", "default": false },
//!     },
//!     "required": ["name"],
//! });
//!
//! let parser = schema_args_core::build(&schema).unwrap();
//! let values = parser.parse(["--name", "world", "--count", "3"]).unwrap();
//!
//! assert_eq!(values["name"], json!("world"));
//! assert_eq!(values["count"], json!(3));
//! assert_eq!(values["loud"], json!(false));
//! ```

mod builder;
mod coerce;
mod error;
mod loader;
mod parser;
mod types;

pub use builder::{FlagSpec, build, build_from_document};
pub use coerce::{Coercion, coerce_bool};
pub use error::{BuildError, CoerceError, ParseError};
pub use loader::load_data;
pub use parser::Parser;
pub use types::{ItemType, ItemsSchema, PropertySchema, PropertyType, SchemaDocument, TypeDecl};

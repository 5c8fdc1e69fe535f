//! The constructed argument parser and its parse-time semantics.

use clap::ArgMatches;
use clap::parser::ValueSource;
use serde_json::{Map, Value};

use crate::builder::FlagSpec;
use crate::error::ParseError;

/// A command-line argument parser derived from a schema document.
///
/// Owns the underlying [`clap::Command`] plus one [`FlagSpec`] per declared
/// property. Obtain one with [`build`](crate::build); parsing never mutates
/// the parser, so it can be reused across invocations.
///
/// # Examples
///
/// ```
/// let schema = serde_json::json!({
///     "properties": {
///         "count": { "type": "integer", "default": 5 },
///     },
/// });
///
/// let parser = schema_args_core::build(&schema).unwrap();
/// let values = parser.parse(["--count", "7"]).unwrap();
/// assert_eq!(values["count"], serde_json::json!(7));
///
/// let values = parser.parse(Vec::<&str>::new()).unwrap();
/// assert_eq!(values["count"], serde_json::json!(5));
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    command: clap::Command,
    flags: Vec<FlagSpec>,
}

impl Parser {
    pub(crate) fn new(command: clap::Command, flags: Vec<FlagSpec>) -> Self {
        Self { command, flags }
    }

    /// The derived flag specifications, in declaration order.
    pub fn flags(&self) -> &[FlagSpec] {
        &self.flags
    }

    /// Renders the generated usage/help text.
    pub fn render_help(&self) -> String {
        self.command.clone().render_help().to_string()
    }

    /// Parses argument tokens into a property-name → value mapping.
    ///
    /// Tokens are the bare flags and values, without a leading program name.
    /// Every declared property appears in the result: supplied flags carry
    /// their coerced values, absent flags their schema default, or JSON
    /// `null` when no default exists. Result keys are the original property
    /// names (underscored), not the hyphenated flag names.
    ///
    /// # Errors
    ///
    /// [`ParseError::Usage`] for matcher-level failures (unknown flag,
    /// missing required flag, help request), [`ParseError::Coercion`] when a
    /// supplied value does not convert to the declared type, and
    /// [`ParseError::InvalidChoice`] when it converts but is outside the
    /// property's `enum`.
    pub fn parse<I, T>(&self, args: I) -> Result<Map<String, Value>, ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = self.command.clone().try_get_matches_from(args)?;

        let mut values = Map::new();
        for spec in &self.flags {
            let value = if spec.is_array() {
                sequence_value(spec, &matches)?
            } else {
                single_value(spec, &matches)?
            };
            values.insert(spec.property.clone(), value);
        }
        Ok(values)
    }
}

fn single_value(spec: &FlagSpec, matches: &ArgMatches) -> Result<Value, ParseError> {
    match matches.get_one::<String>(&spec.property) {
        Some(raw) => coerce_and_check(spec, raw),
        None => Ok(absent_value(spec)),
    }
}

fn sequence_value(spec: &FlagSpec, matches: &ArgMatches) -> Result<Value, ParseError> {
    let supplied = matches
        .value_source(&spec.property)
        .is_some_and(|source| source == ValueSource::CommandLine);
    if !supplied {
        return Ok(absent_value(spec));
    }

    let mut elements = Vec::new();
    if let Some(raws) = matches.get_many::<String>(&spec.property) {
        for raw in raws {
            elements.push(coerce_and_check(spec, raw)?);
        }
    }
    Ok(Value::Array(elements))
}

fn absent_value(spec: &FlagSpec) -> Value {
    spec.default.clone().unwrap_or(Value::Null)
}

fn coerce_and_check(spec: &FlagSpec, raw: &str) -> Result<Value, ParseError> {
    let value = spec
        .coercion
        .apply(raw)
        .map_err(|source| ParseError::Coercion {
            flag: spec.flag.clone(),
            source,
        })?;

    if let Some(choices) = &spec.choices {
        if !choices.contains(&value) {
            return Err(ParseError::InvalidChoice {
                flag: spec.flag.clone(),
                value: value.to_string(),
                choices: render_choices(choices),
            });
        }
    }
    Ok(value)
}

fn render_choices(choices: &[Value]) -> String {
    choices
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

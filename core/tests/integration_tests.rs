//! Integration tests for the schema-args-core crate.
//!
//! Exercises the full path: raw schema document → meta-validation → parser
//! construction → argument parsing, including the file-loading behavior of
//! object-typed flags.

use std::fs;
use std::path::PathBuf;

use schema_args_core::{BuildError, CoerceError, ParseError, Parser, build};
use serde_json::{Value, json};

fn parser_for(schema: Value) -> Parser {
    build(&schema).expect("schema should build")
}

fn no_args() -> Vec<&'static str> {
    Vec::new()
}

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write test file");
    path
}

#[test]
fn builds_one_flag_per_property() {
    let parser = parser_for(json!({
        "properties": {
            "name": { "type": "string" },
            "count": { "type": "integer" },
            "ratio": { "type": "number" },
            "enabled": { "type": "boolean" },
            "tags": { "type": "array" },
            "config": { "type": "object" },
        },
    }));

    let properties: Vec<&str> = parser
        .flags()
        .iter()
        .map(|spec| spec.property.as_str())
        .collect();
    assert_eq!(
        properties,
        vec!["name", "count", "ratio", "enabled", "tags", "config"]
    );
}

#[test]
fn integer_flag_defaults_overrides_and_rejects() {
    let parser = parser_for(json!({
        "properties": { "count": { "type": "integer", "default": 5 } },
    }));

    let values = parser.parse(no_args()).unwrap();
    assert_eq!(values["count"], json!(5));

    let values = parser.parse(["--count", "7"]).unwrap();
    assert_eq!(values["count"], json!(7));

    let err = parser.parse(["--count", "abc"]).unwrap_err();
    match err {
        ParseError::Coercion { flag, source } => {
            assert_eq!(flag, "count");
            assert!(matches!(source, CoerceError::InvalidInteger(text) if text == "abc"));
        }
        other => panic!("expected Coercion error, got: {other:?}"),
    }
}

#[test]
fn required_boolean_flag_parses_and_enforces_presence() {
    let parser = parser_for(json!({
        "properties": { "enabled": { "type": "boolean" } },
        "required": ["enabled"],
    }));

    let values = parser.parse(["--enabled", "true"]).unwrap();
    assert_eq!(values["enabled"], json!(true));

    let err = parser.parse(no_args()).unwrap_err();
    assert!(matches!(err, ParseError::Usage(_)));
}

#[test]
fn object_flag_loads_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "settings.yaml", "retries: 3\nname: demo\n");

    let parser = parser_for(json!({
        "properties": { "config": { "type": "object" } },
    }));

    let values = parser.parse(["--config", path.to_str().unwrap()]).unwrap();
    assert_eq!(values["config"]["retries"], json!(3));
    assert_eq!(values["config"]["name"], json!("demo"));
}

#[test]
fn object_flag_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "settings.txt", "retries: 3\n");

    let parser = parser_for(json!({
        "properties": { "config": { "type": "object" } },
    }));

    let err = parser
        .parse(["--config", path.to_str().unwrap()])
        .unwrap_err();
    match err {
        ParseError::Coercion { flag, source } => {
            assert_eq!(flag, "config");
            assert!(matches!(source, CoerceError::UnknownFileType(_)));
        }
        other => panic!("expected Coercion error, got: {other:?}"),
    }
}

#[test]
fn null_union_flag_is_optional_despite_required_listing() {
    let parser = parser_for(json!({
        "properties": { "mode": { "type": ["string", "null"] } },
        "required": ["mode"],
    }));

    let values = parser.parse(no_args()).unwrap();
    assert_eq!(values["mode"], Value::Null);

    let values = parser.parse(["--mode", "fast"]).unwrap();
    assert_eq!(values["mode"], json!("fast"));
}

#[test]
fn multi_type_property_fails_with_multiple_type_options() {
    let err = build(&json!({
        "properties": { "mode": { "type": ["string", "integer"] } },
    }))
    .unwrap_err();

    assert!(matches!(
        err,
        BuildError::MultipleTypeOptions { property } if property == "mode"
    ));
}

#[test]
fn enum_values_round_trip_and_reject_outsiders() {
    let parser = parser_for(json!({
        "properties": {
            "mode": { "type": "string", "enum": ["a", "b", "c"] },
        },
    }));

    for choice in ["a", "b", "c"] {
        let values = parser.parse(["--mode", choice]).unwrap();
        assert_eq!(values["mode"], json!(choice));
    }

    let err = parser.parse(["--mode", "z"]).unwrap_err();
    assert!(matches!(err, ParseError::InvalidChoice { flag, .. } if flag == "mode"));
}

#[test]
fn array_flag_coerces_elements_by_item_type() {
    let parser = parser_for(json!({
        "properties": {
            "ids": { "type": "array", "items": { "type": "integer" } },
        },
    }));

    let values = parser.parse(["--ids", "10", "20", "30"]).unwrap();
    assert_eq!(values["ids"], json!([10, 20, 30]));
}

#[test]
fn invalid_meta_schema_fails_before_any_flag_is_built() {
    let err = build(&json!({
        "properties": { "mode": { "type": 42 } },
    }))
    .unwrap_err();

    assert!(matches!(err, BuildError::SchemaValidation(_)));
}

#[test]
fn number_flag_parses_floats() {
    let parser = parser_for(json!({
        "properties": { "ratio": { "type": "number" } },
    }));

    let values = parser.parse(["--ratio", "0.25"]).unwrap();
    assert_eq!(values["ratio"], json!(0.25));

    let err = parser.parse(["--ratio", "lots"]).unwrap_err();
    assert!(matches!(
        err,
        ParseError::Coercion { flag, source: CoerceError::InvalidNumber(_) } if flag == "ratio"
    ));
}

#[test]
fn help_text_derives_from_title_description_and_properties() {
    let parser = parser_for(json!({
        "title": "loader",
        "description": "Load things carefully",
        "properties": {
            "max_retries": {
                "type": "integer",
                "description": "Give up after this many attempts",
            },
        },
    }));

    let help = parser.render_help();
    assert!(help.contains("Load things carefully"));
    assert!(help.contains("--max-retries"));
    assert!(help.contains("Give up after this many attempts"));
}

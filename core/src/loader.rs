//! Data-file loading for object-typed flags.
//!
//! Object-typed properties take a file path on the command line; the file is
//! read at argument-parse time and loaded as JSON or YAML based on its
//! extension. The CLI front end reuses the same loader to read the schema
//! document itself.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::CoerceError;

/// Loads data from a YAML or JSON file.
///
/// The path is resolved to an absolute path, the file is opened, and the
/// format is selected by a case-insensitive match on the file extension:
/// `.json` parses as JSON, `.yml`/`.yaml` as YAML. The parsed structure is
/// returned as-is; no shape validation happens beyond a successful parse.
///
/// # Errors
///
/// [`CoerceError::Io`] if the path cannot be resolved or opened,
/// [`CoerceError::UnknownFileType`] for any other extension, and
/// [`CoerceError::Json`]/[`CoerceError::Yaml`] when the content does not
/// parse.
pub fn load_data(path: impl AsRef<Path>) -> Result<Value, CoerceError> {
    let path = absolute(path.as_ref())?;

    let file = File::open(&path).map_err(|source| CoerceError::Io {
        path: path.clone(),
        source,
    })?;
    let reader = BufReader::new(file);

    let format = FileFormat::detect(&path)
        .ok_or_else(|| CoerceError::UnknownFileType(path.clone()))?;
    let value = match format {
        FileFormat::Json => serde_json::from_reader(reader).map_err(|source| CoerceError::Json {
            path: path.clone(),
            source,
        })?,
        FileFormat::Yaml => serde_yaml::from_reader(reader).map_err(|source| CoerceError::Yaml {
            path: path.clone(),
            source,
        })?,
    };

    debug!(path = %path.display(), format = ?format, "Loaded data file");
    Ok(value)
}

/// Data-file format, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    fn detect(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if extension.eq_ignore_ascii_case("yml") || extension.eq_ignore_ascii_case("yaml") {
            Some(Self::Yaml)
        } else {
            None
        }
    }
}

fn absolute(path: &Path) -> Result<PathBuf, CoerceError> {
    std::path::absolute(path).map_err(|source| CoerceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

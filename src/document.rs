//! Loading of configuration documents.

use crate::error::{KeywatchError, Result};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Load a configuration document from a YAML file.
///
/// A file that is empty, contains only comments, or parses to `null` yields
/// an empty mapping: every watched path then resolves to absent on that
/// side. A missing or unreadable file is an error, since the calling
/// pipeline is expected to supply both document versions.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or is not
/// valid YAML.
pub fn load(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(KeywatchError::LoadError(format!(
            "document not found: {}",
            path.display()
        )));
    }

    let text = fs::read_to_string(path)?;
    let document = parse(&text, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), "loaded document");
    Ok(document)
}

/// Parse a document from YAML text, coercing null/empty input to an empty
/// mapping. `origin` names the input in error messages.
pub fn parse(text: &str, origin: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Mapping(Mapping::new()));
    }

    let value: Value = serde_yaml::from_str(text)
        .map_err(|e| KeywatchError::ParseError(format!("document {origin}"), e))?;

    Ok(match value {
        Value::Null => Value::Mapping(Mapping::new()),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("old.yml");

        fs::write(
            &path,
            r#"
service:
  image: v1
  replicas: 2
"#,
        )
        .unwrap();

        let doc = load(&path).unwrap();
        assert!(doc.is_mapping());
        assert_eq!(doc["service"]["replicas"], Value::Number(2.into()));
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let result = load(Path::new("/nonexistent/old.yml"));
        assert!(matches!(result, Err(KeywatchError::LoadError(_))));
    }

    #[test]
    fn test_empty_file_is_empty_mapping() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("old.yml");
        fs::write(&path, "").unwrap();

        assert_eq!(load(&path).unwrap(), Value::Mapping(Mapping::new()));
    }

    #[test]
    fn test_null_document_is_empty_mapping() {
        assert_eq!(
            parse("null", "test").unwrap(),
            Value::Mapping(Mapping::new())
        );
        assert_eq!(
            parse("# just a comment\n", "test").unwrap(),
            Value::Mapping(Mapping::new())
        );
    }

    #[test]
    fn test_malformed_document_is_fatal() {
        let result = parse("a: [unclosed", "test");
        assert!(matches!(result, Err(KeywatchError::ParseError(_, _))));
    }
}

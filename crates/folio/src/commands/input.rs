//! Field value input shared by all commands.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use folio_richtext::parse_content;
use serde_json::Value;

use crate::error::CliError;

/// Input arguments: where to read the field value from and how to parse it.
#[derive(Args)]
pub(crate) struct InputArgs {
    /// Path to the field value as JSON (`-` or omitted reads stdin).
    input: Option<PathBuf>,

    /// Treat the input as a plain string instead of JSON.
    #[arg(long)]
    raw: bool,
}

impl InputArgs {
    /// Read and parse the field value.
    pub(crate) fn read(&self) -> Result<Value, CliError> {
        let text = match self.input.as_deref() {
            Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
            _ => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        parse_input(&text, self.raw)
    }
}

/// Parse input text as a field value.
///
/// Raw input becomes a string value with trailing newlines removed.
pub(crate) fn parse_input(text: &str, raw: bool) -> Result<Value, CliError> {
    if raw {
        return Ok(Value::String(text.trim_end_matches(['\n', '\r']).to_owned()));
    }
    Ok(parse_content(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_input_json() {
        let value = parse_input(r#"{ "type": "doc", "children": [] }"#, false).unwrap();
        assert_eq!(value, json!({ "type": "doc", "children": [] }));
    }

    #[test]
    fn test_parse_input_raw() {
        let value = parse_input("Hello\n\nWorld\n", true).unwrap();
        assert_eq!(value, json!("Hello\n\nWorld"));
    }

    #[test]
    fn test_parse_input_raw_keeps_json_text() {
        let value = parse_input("[1, 2]", true).unwrap();
        assert_eq!(value, json!("[1, 2]"));
    }

    #[test]
    fn test_parse_input_invalid_json() {
        let err = parse_input("Hello", false).unwrap_err();
        assert!(matches!(err, CliError::Parse(_)));
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.json");
        std::fs::write(&path, r#"[{ "text": "A" }]"#).unwrap();

        let args = InputArgs {
            input: Some(path),
            raw: false,
        };
        assert_eq!(args.read().unwrap(), json!([{ "text": "A" }]));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = InputArgs {
            input: Some(dir.path().join("missing.json")),
            raw: false,
        };
        assert!(matches!(args.read().unwrap_err(), CliError::Io(_)));
    }
}

//! Content-shape classification for rich text capable fields.
//!
//! A field declared as rich text may hold a plain string, a full document,
//! a bare node, an array of nodes, or nothing at all. [`Content::classify`]
//! maps a raw JSON value onto a closed set of shapes so callers choose a
//! rendering strategy with an exhaustive `match` instead of probing fields.

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Discriminator carried by the root document object.
pub const DOCUMENT_TYPE: &str = "doc";

/// Shape of a rich text field value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Content<'a> {
    /// Absent or falsy value (`null`, `false`, `""`, `0`).
    Empty,
    /// A plain string.
    PlainText(&'a str),
    /// A `{ "type": "doc", "children": [...] }` document, holding its children.
    Document(&'a [Value]),
    /// A single node without the document wrapper.
    Node(&'a Map<String, Value>),
    /// An array of nodes without the document wrapper.
    NodeArray(&'a [Value]),
    /// Anything else (numbers, `true`, objects that are not nodes).
    Unrecognized(&'a Value),
}

impl<'a> Content<'a> {
    /// Classify a raw field value.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_richtext::Content;
    /// use serde_json::json;
    ///
    /// let value = json!({ "type": "doc", "children": [] });
    /// assert!(matches!(Content::classify(&value), Content::Document(_)));
    /// assert_eq!(Content::classify(&json!(null)), Content::Empty);
    /// ```
    #[must_use]
    pub fn classify(value: &'a Value) -> Self {
        if is_empty(value) {
            return Self::Empty;
        }
        match value {
            Value::String(text) => Self::PlainText(text),
            Value::Array(items) => Self::NodeArray(items),
            Value::Object(obj) => {
                if let Some(children) = document_children(obj) {
                    Self::Document(children)
                } else if is_node_object(obj) {
                    Self::Node(obj)
                } else {
                    Self::Unrecognized(value)
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => Self::Unrecognized(value),
        }
    }

    /// Short machine-friendly name of the shape.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::PlainText(_) => "plain-text",
            Self::Document(_) => "document",
            Self::Node(_) => "node",
            Self::NodeArray(_) => "node-array",
            Self::Unrecognized(_) => "unrecognized",
        }
    }
}

impl fmt::Display for Content<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a field value from JSON text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Input is not valid JSON.
    #[error("Invalid rich text JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a field value from JSON text.
///
/// Any valid JSON is accepted; shape checks happen in [`Content::classify`].
/// Nesting is not limited here: deep documents are parsed in full and
/// truncated by the renderer's depth limit instead.
pub fn parse_content(input: &str) -> Result<Value, ParseError> {
    let mut deserializer = serde_json::Deserializer::from_str(input);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

/// Returns true iff the value is a string.
#[must_use]
pub fn is_plain_text(value: &Value) -> bool {
    value.is_string()
}

/// Returns true iff the value is an object tagged `"doc"` with an array of children.
///
/// Both conditions are required: `{ "type": "doc", "children": "oops" }` is not a document.
#[must_use]
pub fn is_document(value: &Value) -> bool {
    value.as_object().and_then(document_children).is_some()
}

/// Best-effort check for a bare node.
///
/// True for objects with a string `type` and at least one of an array `children`,
/// a `text` field, or a `uid` field.
#[must_use]
pub fn is_node(value: &Value) -> bool {
    value.as_object().is_some_and(is_node_object)
}

/// Returns true for values treated as an absent field.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Coerce a value to its string representation.
///
/// Strings are returned verbatim, `null` becomes the empty string, and arrays
/// or objects are serialized as compact JSON.
#[must_use]
pub fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed(""),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

/// JSON type name, used in diagnostics.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn document_children(obj: &Map<String, Value>) -> Option<&[Value]> {
    if obj.get("type").and_then(Value::as_str) != Some(DOCUMENT_TYPE) {
        return None;
    }
    obj.get("children").and_then(Value::as_array).map(Vec::as_slice)
}

fn is_node_object(obj: &Map<String, Value>) -> bool {
    obj.get("type").is_some_and(Value::is_string)
        && (obj.get("children").is_some_and(Value::is_array)
            || obj.contains_key("text")
            || obj.contains_key("uid"))
}

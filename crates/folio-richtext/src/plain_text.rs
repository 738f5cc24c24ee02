//! Plain-text extraction from rich text field values.
//!
//! Used wherever markup is not allowed: meta descriptions, `alt` attributes,
//! card excerpts. All formatting is discarded and leaf text is concatenated
//! in document order.
//!
//! No separator is inserted between sibling nodes, so two paragraphs
//! `"Hello"` and `"World"` extract as `"HelloWorld"`. Authors who want
//! whitespace across block boundaries must include it in the content.

use std::borrow::Cow;

use serde_json::Value;

use crate::content::{Content, is_empty, stringify};
use crate::node::NodeRef;
use crate::renderer::DEFAULT_MAX_DEPTH;

/// Suffix appended by [`excerpt`] when text is cut.
pub const ELLIPSIS: &str = "...";

/// Plain-text extractor with a nesting limit.
///
/// Subtrees nested deeper than the limit contribute nothing.
#[derive(Clone, Debug)]
pub struct TextExtractor {
    max_depth: usize,
}

impl TextExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Extract the leaf text of a field value.
    ///
    /// Strings are returned as-is; documents, bare nodes and node arrays are
    /// flattened; anything else is coerced with [`stringify`].
    #[must_use]
    pub fn extract(&self, value: &Value) -> String {
        let mut out = String::new();
        match Content::classify(value) {
            Content::Empty => {}
            Content::PlainText(text) => out.push_str(text),
            Content::Document(children) | Content::NodeArray(children) => {
                self.push_nodes(children, 1, &mut out);
            }
            Content::Node(_) => self.push_node(value, 1, &mut out),
            Content::Unrecognized(other) => out.push_str(&stringify(other)),
        }
        out
    }

    /// Display string for label-like fields.
    ///
    /// Like [`extract`](Self::extract), except that entries of a bare array
    /// which are not node objects (strings, numbers) contribute their string form.
    #[must_use]
    pub fn safe_content(&self, value: &Value) -> String {
        match Content::classify(value) {
            Content::NodeArray(items) => {
                let mut out = String::new();
                for item in items {
                    if item.is_object() {
                        self.push_node(item, 1, &mut out);
                    } else {
                        out.push_str(&self.safe_content(item));
                    }
                }
                out
            }
            Content::Empty
            | Content::PlainText(_)
            | Content::Document(_)
            | Content::Node(_)
            | Content::Unrecognized(_) => self.extract(value),
        }
    }

    fn push_nodes(&self, nodes: &[Value], depth: usize, out: &mut String) {
        for node in nodes {
            self.push_node(node, depth, out);
        }
    }

    fn push_node(&self, value: &Value, depth: usize, out: &mut String) {
        if depth > self.max_depth {
            return;
        }
        match NodeRef::from_value(value) {
            NodeRef::Text { text, .. } if has_text(value) => out.push_str(&text),
            NodeRef::Text { .. } => self.push_nodes(child_nodes(value), depth + 1, out),
            NodeRef::Element { children, .. } => self.push_nodes(children, depth + 1, out),
            NodeRef::Empty => {}
        }
    }
}

/// True when the node's `text` field is present and not falsy.
fn has_text(value: &Value) -> bool {
    value.get("text").is_some_and(|text| !is_empty(text))
}

fn child_nodes(value: &Value) -> &[Value] {
    value
        .get("children")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract plain text with the default nesting limit.
///
/// # Example
///
/// ```
/// use folio_richtext::extract_plain_text;
/// use serde_json::json;
///
/// let doc = json!({
///     "type": "doc",
///     "children": [{ "type": "p", "children": [{ "text": "Golden " }, { "text": "hour", "italic": true }] }]
/// });
/// assert_eq!(extract_plain_text(&doc), "Golden hour");
/// assert_eq!(extract_plain_text(&json!(42)), "42");
/// ```
#[must_use]
pub fn extract_plain_text(value: &Value) -> String {
    TextExtractor::new().extract(value)
}

/// Display string for label-like fields, with the default nesting limit.
#[must_use]
pub fn safe_text_content(value: &Value) -> String {
    TextExtractor::new().safe_content(value)
}

/// Truncate text to at most `max_chars` characters, appending [`ELLIPSIS`] when cut.
///
/// Trailing whitespace before the ellipsis is trimmed. Text within the limit
/// is returned unchanged.
///
/// ```
/// use folio_richtext::excerpt;
///
/// assert_eq!(excerpt("Short story", 50), "Short story");
/// assert_eq!(excerpt("An unforgettable day", 15), "An unforgettabl...");
/// ```
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => {
            let mut out = text[..cut].trim_end().to_owned();
            out.push_str(ELLIPSIS);
            Cow::Owned(out)
        }
    }
}

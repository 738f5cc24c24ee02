//! Borrowed view over a single rich text node.
//!
//! CMS payloads are untyped, so nodes are read leniently: any field may be
//! missing or carry the wrong JSON type. [`NodeRef::from_value`] never fails;
//! values that cannot be interpreted become [`NodeRef::Empty`].

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::content::{is_empty, stringify};

/// Text formatting flag on a text leaf.
///
/// Declaration order is the canonical wrapping order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
}

impl Mark {
    /// All marks in canonical order: bold, italic, underline, strikethrough, code.
    pub const ALL: [Mark; 5] = [
        Mark::Bold,
        Mark::Italic,
        Mark::Underline,
        Mark::Strikethrough,
        Mark::Code,
    ];

    /// Field name of the flag on a text node.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
            Self::Code => "code",
        }
    }
}

/// Set of marks active on a text leaf.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Marks {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub code: bool,
}

impl Marks {
    /// Read mark flags from a node object. Any truthy value enables a mark.
    #[must_use]
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        let flag = |mark: Mark| obj.get(mark.name()).is_some_and(|v| !is_empty(v));
        Self {
            bold: flag(Mark::Bold),
            italic: flag(Mark::Italic),
            underline: flag(Mark::Underline),
            strikethrough: flag(Mark::Strikethrough),
            code: flag(Mark::Code),
        }
    }

    #[must_use]
    pub fn contains(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
            Mark::Strikethrough => self.strikethrough,
            Mark::Code => self.code,
        }
    }

    /// Active marks in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Mark> + '_ {
        Mark::ALL.into_iter().filter(|mark| self.contains(*mark))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Render category of an element node, resolved from its `type` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Paragraph,
    /// Heading level 1-6.
    Heading(u8),
    List {
        ordered: bool,
    },
    ListItem,
    Blockquote,
    Link,
    Image,
    HorizontalRule,
    LineBreak,
    CodeBlock,
    /// Document or fragment wrapper: children are rendered without a wrapper.
    Transparent,
    /// Unrecognized `type`.
    Unknown,
}

/// Dispatch table from node `type` to render category.
///
/// Types missing from the table resolve to [`NodeKind::Unknown`].
const NODE_KINDS: &[(&str, NodeKind)] = &[
    ("p", NodeKind::Paragraph),
    ("paragraph", NodeKind::Paragraph),
    ("h1", NodeKind::Heading(1)),
    ("heading-1", NodeKind::Heading(1)),
    ("h2", NodeKind::Heading(2)),
    ("heading-2", NodeKind::Heading(2)),
    ("h3", NodeKind::Heading(3)),
    ("heading-3", NodeKind::Heading(3)),
    ("h4", NodeKind::Heading(4)),
    ("heading-4", NodeKind::Heading(4)),
    ("h5", NodeKind::Heading(5)),
    ("heading-5", NodeKind::Heading(5)),
    ("h6", NodeKind::Heading(6)),
    ("heading-6", NodeKind::Heading(6)),
    ("ul", NodeKind::List { ordered: false }),
    ("unordered-list", NodeKind::List { ordered: false }),
    ("ol", NodeKind::List { ordered: true }),
    ("ordered-list", NodeKind::List { ordered: true }),
    ("li", NodeKind::ListItem),
    ("list-item", NodeKind::ListItem),
    ("blockquote", NodeKind::Blockquote),
    ("a", NodeKind::Link),
    ("link", NodeKind::Link),
    ("img", NodeKind::Image),
    ("image", NodeKind::Image),
    ("hr", NodeKind::HorizontalRule),
    ("horizontal-rule", NodeKind::HorizontalRule),
    ("br", NodeKind::LineBreak),
    ("code-block", NodeKind::CodeBlock),
    ("codeblock", NodeKind::CodeBlock),
    ("doc", NodeKind::Transparent),
    ("fragment", NodeKind::Transparent),
];

impl NodeKind {
    /// Resolve a node `type` string.
    ///
    /// ```
    /// use folio_richtext::NodeKind;
    ///
    /// assert_eq!(NodeKind::from_type("h2"), NodeKind::Heading(2));
    /// assert_eq!(NodeKind::from_type("carousel"), NodeKind::Unknown);
    /// ```
    #[must_use]
    pub fn from_type(node_type: &str) -> Self {
        NODE_KINDS
            .iter()
            .find(|(name, _)| *name == node_type)
            .map_or(Self::Unknown, |(_, kind)| *kind)
    }
}

/// Optional `attrs` map of an element node.
#[derive(Clone, Copy, Debug, Default)]
pub struct Attrs<'a>(Option<&'a Map<String, Value>>);

impl<'a> Attrs<'a> {
    /// Non-empty string attribute. Empty strings and non-strings read as absent.
    #[must_use]
    pub fn str(&self, key: &str) -> Option<&'a str> {
        self.0
            .and_then(|attrs| attrs.get(key))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Interpreted node.
#[derive(Clone, Debug)]
pub enum NodeRef<'a> {
    /// Text leaf with its marks.
    Text { text: Cow<'a, str>, marks: Marks },
    /// Element with (possibly empty) children.
    Element {
        node_type: &'a str,
        children: &'a [Value],
        attrs: Attrs<'a>,
    },
    /// Neither text nor element: renders nothing.
    Empty,
}

impl<'a> NodeRef<'a> {
    /// Interpret a JSON value as a node.
    ///
    /// A `text` field makes the node a text leaf even if it also has children.
    /// Objects with a string `type` or an array `children` are elements;
    /// a missing `children` field reads as no children.
    #[must_use]
    pub fn from_value(value: &'a Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::Empty;
        };

        if let Some(text) = obj.get("text") {
            return Self::Text {
                text: stringify(text),
                marks: Marks::from_object(obj),
            };
        }

        let node_type = obj.get("type").and_then(Value::as_str);
        let children = obj.get("children").and_then(Value::as_array);
        if node_type.is_none() && children.is_none() {
            return Self::Empty;
        }

        Self::Element {
            node_type: node_type.unwrap_or_default(),
            children: children.map(Vec::as_slice).unwrap_or_default(),
            attrs: Attrs(obj.get("attrs").and_then(Value::as_object)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            Self::Element { node_type, .. } => Some(NodeKind::from_type(node_type)),
            Self::Text { .. } | Self::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_kind_aliases() {
        assert_eq!(NodeKind::from_type("p"), NodeKind::Paragraph);
        assert_eq!(NodeKind::from_type("paragraph"), NodeKind::Paragraph);
        assert_eq!(NodeKind::from_type("heading-6"), NodeKind::Heading(6));
        assert_eq!(
            NodeKind::from_type("ol"),
            NodeKind::List { ordered: true }
        );
        assert_eq!(
            NodeKind::from_type("unordered-list"),
            NodeKind::List { ordered: false }
        );
        assert_eq!(NodeKind::from_type("codeblock"), NodeKind::CodeBlock);
        assert_eq!(NodeKind::from_type("fragment"), NodeKind::Transparent);
    }

    #[test]
    fn test_node_kind_unknown_default() {
        assert_eq!(NodeKind::from_type(""), NodeKind::Unknown);
        assert_eq!(NodeKind::from_type("P"), NodeKind::Unknown);
        assert_eq!(NodeKind::from_type("reference"), NodeKind::Unknown);
    }

    #[test]
    fn test_marks_canonical_order() {
        let value = json!({ "text": "x", "code": true, "bold": true, "italic": true });
        let marks = Marks::from_object(value.as_object().unwrap());
        let order: Vec<_> = marks.iter().collect();
        assert_eq!(order, vec![Mark::Bold, Mark::Italic, Mark::Code]);
    }

    #[test]
    fn test_marks_truthiness() {
        let value = json!({ "text": "x", "bold": false, "italic": 1, "underline": null });
        let marks = Marks::from_object(value.as_object().unwrap());
        assert!(!marks.bold);
        assert!(marks.italic);
        assert!(!marks.underline);
    }

    #[test]
    fn test_from_value_text() {
        let value = json!({ "text": "Hello", "bold": true });
        match NodeRef::from_value(&value) {
            NodeRef::Text { text, marks } => {
                assert_eq!(text, "Hello");
                assert!(marks.bold);
            }
            other => panic!("expected text node, got {other:?}"),
        }
    }

    #[test]
    fn test_from_value_text_wins_over_children() {
        let value = json!({ "type": "p", "text": "t", "children": [{ "text": "c" }] });
        assert!(matches!(NodeRef::from_value(&value), NodeRef::Text { .. }));
    }

    #[test]
    fn test_from_value_null_text_is_empty_text() {
        let value = json!({ "text": null });
        match NodeRef::from_value(&value) {
            NodeRef::Text { text, .. } => assert_eq!(text, ""),
            other => panic!("expected text node, got {other:?}"),
        }
    }

    #[test]
    fn test_from_value_element_without_children() {
        let value = json!({ "type": "hr" });
        match NodeRef::from_value(&value) {
            NodeRef::Element { node_type, children, .. } => {
                assert_eq!(node_type, "hr");
                assert!(children.is_empty());
            }
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_from_value_empty() {
        assert!(matches!(NodeRef::from_value(&json!({})), NodeRef::Empty));
        assert!(matches!(NodeRef::from_value(&json!("str")), NodeRef::Empty));
        assert!(matches!(NodeRef::from_value(&json!(null)), NodeRef::Empty));
        assert!(matches!(
            NodeRef::from_value(&json!({ "children": "x" })),
            NodeRef::Empty
        ));
    }

    #[test]
    fn test_attrs_str() {
        let value = json!({ "type": "a", "attrs": { "href": "", "target": "_blank", "n": 1 } });
        let NodeRef::Element { attrs, .. } = NodeRef::from_value(&value) else {
            panic!("expected element");
        };
        assert_eq!(attrs.str("href"), None);
        assert_eq!(attrs.str("target"), Some("_blank"));
        assert_eq!(attrs.str("n"), None);
        assert_eq!(attrs.str("missing"), None);
    }
}

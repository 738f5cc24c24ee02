//! Rich text document renderer.

use serde_json::Value;

use crate::backend::{RenderBackend, write_nodes};
use crate::content::{Content, json_type_name, stringify};
use crate::diagnostic::Diagnostic;
use crate::html::HtmlBackend;
use crate::node::{Attrs, Marks, NodeKind, NodeRef};
use crate::output::{ElementTag, ImageAttrs, LinkAttrs, RenderElement, RenderNode, TextRun};

/// Default limit on node nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Separator between paragraphs in plain string fields.
///
/// A single newline does not start a new paragraph.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Result of rendering a rich text field.
#[derive(Clone, Debug, Default)]
pub struct RenderResult {
    /// Rendered top-level nodes, in reading order.
    pub nodes: Vec<RenderNode>,
    /// Root class hint, forwarded unchanged from the renderer.
    pub class: Option<String>,
    /// Degradations applied while rendering (e.g., unknown content, truncated nesting).
    pub warnings: Vec<Diagnostic>,
}

impl RenderResult {
    /// True when there is nothing to display.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serialize to HTML with the default [`HtmlBackend`].
    ///
    /// Empty results serialize to an empty string, without a wrapper.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.render_with(&HtmlBackend::default())
    }

    /// Serialize through a custom backend.
    #[must_use]
    pub fn render_with<B: RenderBackend + ?Sized>(&self, backend: &B) -> String {
        if self.is_empty() {
            return String::new();
        }
        let class = self.class.as_deref();
        let mut out = String::with_capacity(1024);
        backend.wrapper_start(class, &mut out);
        write_nodes(backend, &self.nodes, &mut out);
        backend.wrapper_end(class, &mut out);
        out
    }

    /// Emit all warnings through `tracing`.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warning.log();
        }
    }
}

/// Renderer for rich text capable field values.
///
/// Accepts any JSON value (plain string, document, bare node, node array,
/// or anything else) and never fails: malformed input degrades to the most
/// conservative rendering and is reported in [`RenderResult::warnings`].
///
/// # Example
///
/// ```
/// use folio_richtext::RichTextRenderer;
/// use serde_json::json;
///
/// let doc = json!({
///     "type": "doc",
///     "children": [{ "type": "p", "children": [{ "text": "Hi", "bold": true }] }]
/// });
/// let result = RichTextRenderer::new().render(&doc);
/// assert_eq!(result.to_html(), "<p><strong>Hi</strong></p>");
/// ```
#[derive(Clone, Debug)]
pub struct RichTextRenderer {
    class: Option<String>,
    max_depth: usize,
}

impl RichTextRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            class: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the class hint for the root wrapper.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the maximum node nesting depth. Deeper subtrees are dropped.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Render a field value.
    pub fn render(&self, value: &Value) -> RenderResult {
        let mut walk = Walk {
            max_depth: self.max_depth,
            warnings: Vec::new(),
        };
        let mut nodes = Vec::new();

        match Content::classify(value) {
            Content::Empty => {}
            Content::PlainText(text) => nodes = plain_paragraphs(text),
            Content::Document(children) | Content::NodeArray(children) => {
                walk.render_nodes(children, None, 1, &mut nodes);
            }
            Content::Node(_) => walk.render_node(value, "node-0".to_owned(), 1, &mut nodes),
            Content::Unrecognized(other) => {
                walk.warnings.push(Diagnostic::UnrecognizedContent {
                    found: json_type_name(other),
                });
                nodes.push(RenderNode::Text(TextRun {
                    key: "node-0".to_owned(),
                    text: stringify(other).into_owned(),
                }));
            }
        }

        RenderResult {
            nodes,
            class: self.class.clone(),
            warnings: walk.warnings,
        }
    }
}

impl Default for RichTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// One paragraph per blank-line separated segment, empty segments included.
fn plain_paragraphs(text: &str) -> Vec<RenderNode> {
    text.split(PARAGRAPH_SEPARATOR)
        .enumerate()
        .map(|(index, segment)| {
            let key = format!("paragraph-{index}");
            RenderNode::Element(RenderElement {
                children: vec![RenderNode::Text(TextRun {
                    key: format!("{key}-0"),
                    text: segment.to_owned(),
                })],
                key,
                tag: ElementTag::Paragraph,
            })
        })
        .collect()
}

/// Per-call traversal state.
struct Walk {
    max_depth: usize,
    warnings: Vec<Diagnostic>,
}

impl Walk {
    fn render_nodes(
        &mut self,
        nodes: &[Value],
        parent: Option<&str>,
        depth: usize,
        out: &mut Vec<RenderNode>,
    ) {
        for (index, node) in nodes.iter().enumerate() {
            let key = match parent {
                Some(parent) => format!("{parent}-{index}"),
                None => format!("node-{index}"),
            };
            self.render_node(node, key, depth, out);
        }
    }

    fn render_node(&mut self, value: &Value, key: String, depth: usize, out: &mut Vec<RenderNode>) {
        if depth > self.max_depth {
            self.warnings.push(Diagnostic::DepthExceeded {
                key,
                max_depth: self.max_depth,
            });
            return;
        }

        match NodeRef::from_value(value) {
            NodeRef::Empty => {
                if !value.is_object() {
                    self.warnings.push(Diagnostic::MalformedNode {
                        key,
                        found: json_type_name(value),
                    });
                }
            }
            NodeRef::Text { text, marks } => out.push(wrap_marks(key, text.into_owned(), marks)),
            NodeRef::Element {
                node_type,
                children,
                attrs,
            } => match element_tag(NodeKind::from_type(node_type), attrs) {
                // Document wrappers and unknown types render their children in place.
                None => self.render_nodes(children, Some(&key), depth + 1, out),
                Some(tag) if tag.is_leaf() => out.push(RenderNode::Element(RenderElement {
                    key,
                    tag,
                    children: Vec::new(),
                })),
                Some(tag) => {
                    let mut rendered = Vec::with_capacity(children.len());
                    self.render_nodes(children, Some(&key), depth + 1, &mut rendered);
                    out.push(RenderNode::Element(RenderElement {
                        key,
                        tag,
                        children: rendered,
                    }));
                }
            },
        }
    }
}

/// Map a node kind to its element, or `None` for transparent passthrough.
fn element_tag(kind: NodeKind, attrs: Attrs<'_>) -> Option<ElementTag> {
    let tag = match kind {
        NodeKind::Paragraph => ElementTag::Paragraph,
        NodeKind::Heading(level) => ElementTag::Heading(level),
        NodeKind::List { ordered } => ElementTag::List { ordered },
        NodeKind::ListItem => ElementTag::ListItem,
        NodeKind::Blockquote => ElementTag::Blockquote,
        NodeKind::Link => ElementTag::Link(LinkAttrs::new(
            attrs.str("href").or_else(|| attrs.str("url")),
            attrs.str("target"),
        )),
        NodeKind::Image => ElementTag::Image(ImageAttrs {
            src: attrs.str("src").unwrap_or_default().to_owned(),
            alt: attrs.str("alt").unwrap_or_default().to_owned(),
        }),
        NodeKind::HorizontalRule => ElementTag::HorizontalRule,
        NodeKind::LineBreak => ElementTag::LineBreak,
        NodeKind::CodeBlock => ElementTag::CodeBlock,
        NodeKind::Transparent | NodeKind::Unknown => return None,
    };
    Some(tag)
}

/// Wrap a text run in its marks, first canonical mark innermost.
fn wrap_marks(key: String, text: String, marks: Marks) -> RenderNode {
    let wrapper_keys: Vec<_> = marks
        .iter()
        .map(|mark| (mark, format!("{key}-{}", mark.name())))
        .collect();
    let mut node = RenderNode::Text(TextRun { key, text });
    for (mark, key) in wrapper_keys {
        node = RenderNode::Element(RenderElement {
            key,
            tag: ElementTag::Mark(mark),
            children: vec![node],
        });
    }
    node
}
